use nyaya_db::{Db, DbConfig};
use nyayad::proto::http::Request;
use nyayad::router::handle;
use nyayad::storage::laws::NewLaw;
use nyayad::{services, startup, storage};

fn get(path: &str) -> Request {
    Request { method: "GET".into(), path: path.into(), headers: vec![], body: vec![] }
}

fn rand_suffix() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let ns = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos();
    format!("{:x}", ns)
}

fn content_type(resp: &nyayad::proto::http::Response) -> String {
    resp.headers
        .iter()
        .find(|(k, _)| k == "content-type")
        .map(|(_, v)| v.clone())
        .unwrap_or_default()
}

#[tokio::test]
async fn root_serves_search_page_with_script() {
    let resp = handle(get("/")).await.expect("ok");
    assert_eq!(resp.code.as_u16(), 200);
    assert_eq!(content_type(&resp), "text/html");
    let body = String::from_utf8_lossy(&resp.body);
    // the DOM the page script expects
    assert!(body.contains("id=\"query\""));
    assert!(body.contains("id=\"lang\""));
    assert!(body.contains("id=\"searchBtn\""));
    assert!(body.contains("id=\"results\""));
    assert!(body.contains("/assets/app.js"));
}

#[tokio::test]
async fn app_js_asset_is_served() {
    let resp = handle(get("/assets/app.js")).await.expect("ok");
    assert_eq!(resp.code.as_u16(), 200);
    assert_eq!(content_type(&resp), "application/javascript");
    let body = String::from_utf8_lossy(&resp.body);
    assert!(body.contains("fetch('/api/search'"));
    assert!(body.contains("No results found."));
    assert!(body.contains("Searching..."));
    // stale responses must be dropped, failures must surface
    assert!(body.contains("token !== searchSeq"));
    assert!(body.contains("Search failed. Please try again."));
}

#[tokio::test]
async fn asset_path_traversal_is_rejected() {
    let resp = handle(get("/assets/../secret")).await.expect("ok");
    assert_eq!(resp.code.as_u16(), 400);
}

#[tokio::test]
async fn admin_page_has_add_form() {
    let resp = handle(get("/admin")).await.expect("ok");
    assert_eq!(resp.code.as_u16(), 200);
    assert_eq!(content_type(&resp), "text/html");
    let body = String::from_utf8_lossy(&resp.body);
    assert!(body.contains("action=\"/admin/add\""));
    assert!(body.contains("name=\"password\""));
    assert!(body.contains("name=\"title\""));
}

#[tokio::test]
async fn ssr_renders_cards_and_falls_back_to_page() {
    let mut db_path = std::env::temp_dir();
    db_path.push(format!("nyayad-ui-{}-{}.db", std::process::id(), rand_suffix()));
    let mut cfg = DbConfig::default();
    cfg.database_url = format!("sqlite://{}", db_path.display());
    cfg.migrate_on_start = true;
    let db = Db::new(cfg);
    db.init().await.expect("db init");
    let pool = db.get_pool().await.expect("db pool").clone();
    storage::laws::insert_law(
        &pool,
        &NewLaw {
            title: "Theft".into(),
            section: Some("378".into()),
            act: Some("Penal Code".into()),
            text: Some("Dishonest taking of movable property.".into()),
            summary_en: Some("Theft covers dishonest taking of movable property.".into()),
            summary_hi: None,
            summary_mr: None,
        },
    )
    .await
    .expect("insert law");
    services::init(pool);
    startup::reindex_all().await.expect("reindex");

    let resp = handle(get("/search?q=theft&lang=en")).await.expect("ok");
    assert_eq!(resp.code.as_u16(), 200);
    assert_eq!(content_type(&resp), "text/html");
    let body = String::from_utf8_lossy(&resp.body);
    assert!(body.contains("Theft (Penal Code 378)"), "body was: {body}");
    // single hit normalizes to the top score
    assert!(body.contains("Score: 1.000"), "body was: {body}");
    assert!(body.contains("Theft covers dishonest taking of movable property."));

    // no q: plain page, no cards
    let resp = handle(get("/search")).await.expect("ok");
    let body = String::from_utf8_lossy(&resp.body);
    assert!(body.contains("id=\"searchBtn\""));

    // blank q: also the plain page
    let resp = handle(get("/search?q=%20")).await.expect("ok");
    let body = String::from_utf8_lossy(&resp.body);
    assert!(body.contains("id=\"searchBtn\""));
}
