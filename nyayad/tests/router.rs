use nyaya_db::{Db, DbConfig};
use nyayad::proto::http::Request;
use nyayad::router::handle;
use nyayad::storage::laws::NewLaw;
use nyayad::{services, startup, storage};
use serde_json::{json, Value};

fn make_get(path: &str) -> Request {
    Request {
        method: "GET".into(),
        path: path.into(),
        headers: vec![],
        body: vec![],
    }
}

fn post_json(path: &str, body: Value) -> Request {
    Request {
        method: "POST".into(),
        path: path.into(),
        headers: vec![("content-type".into(), "application/json".into())],
        body: serde_json::to_vec(&body).expect("encode body"),
    }
}

fn rand_suffix() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let ns = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos();
    format!("{:x}", ns)
}

async fn init_services_with_laws(laws: &[NewLaw]) -> Vec<i64> {
    let mut db_path = std::env::temp_dir();
    db_path.push(format!("nyayad-router-{}-{}.db", std::process::id(), rand_suffix()));
    let mut cfg = DbConfig::default();
    cfg.database_url = format!("sqlite://{}", db_path.display());
    cfg.migrate_on_start = true;

    let db = Db::new(cfg);
    db.init().await.expect("db init");
    let pool = db.get_pool().await.expect("db pool").clone();

    let mut ids = Vec::with_capacity(laws.len());
    for law in laws {
        ids.push(storage::laws::insert_law(&pool, law).await.expect("insert law"));
    }

    services::init(pool);
    startup::reindex_all().await.expect("reindex");
    ids
}

#[tokio::test]
async fn health_ready_returns_200_and_json() {
    let req = make_get("/health/ready");
    let resp = handle(req).await.expect("router should handle");
    assert_eq!(resp.code.as_u16(), 200);
    let ct = resp.headers.iter().find(|(k, _)| k == "content-type").map(|(_, v)| v.as_str()).unwrap_or("");
    assert_eq!(ct, "application/json");
    assert_eq!(String::from_utf8_lossy(&resp.body), "{\"status\":\"ready\"}");
}

#[tokio::test]
async fn unknown_route_returns_400() {
    let req = make_get("/definitely/not/a/route");
    let resp = handle(req).await.expect("router should handle");
    assert_eq!(resp.code.as_u16(), 400);
}

#[tokio::test]
async fn search_with_empty_query_returns_400() {
    let req = post_json("/api/search", json!({"query": "   ", "lang": "en"}));
    let resp = handle(req).await.expect("router should handle");
    assert_eq!(resp.code.as_u16(), 400);
    let v: Value = serde_json::from_slice(&resp.body).expect("valid json");
    assert_eq!(v["error"], "query required");
}

#[tokio::test]
async fn search_with_invalid_json_returns_400() {
    let req = Request {
        method: "POST".into(),
        path: "/api/search".into(),
        headers: vec![("content-type".into(), "application/json".into())],
        body: b"{not json".to_vec(),
    };
    let resp = handle(req).await.expect("router should handle");
    assert_eq!(resp.code.as_u16(), 400);
}

#[tokio::test]
async fn search_and_law_detail_flow() {
    let laws = [
        NewLaw {
            title: "Theft".into(),
            section: Some("378".into()),
            act: Some("Penal Code".into()),
            text: Some("Dishonest taking of movable property out of possession.".into()),
            summary_en: Some("Theft covers dishonest taking of movable property.".into()),
            summary_hi: Some("चोरी चल संपत्ति के बेईमान हरण को कहते हैं।".into()),
            summary_mr: None,
        },
        NewLaw {
            title: "Cheque bounce".into(),
            section: Some("138".into()),
            act: Some("Negotiable Instruments Act".into()),
            text: Some("Dishonour of cheque for insufficiency of funds.".into()),
            summary_en: Some("A bounced cheque can lead to prosecution under section 138.".into()),
            summary_hi: None,
            summary_mr: None,
        },
    ];
    let ids = init_services_with_laws(&laws).await;

    // English summary selected by default
    let resp = handle(post_json("/api/search", json!({"query": "theft", "lang": "en"})))
        .await
        .expect("router should handle");
    assert_eq!(resp.code.as_u16(), 200);
    let v: Value = serde_json::from_slice(&resp.body).expect("valid json");
    let results = v["results"].as_array().expect("results array");
    assert!(!results.is_empty());
    assert_eq!(results[0]["title"], "Theft");
    assert_eq!(results[0]["act"], "Penal Code");
    assert_eq!(results[0]["section"], "378");
    assert_eq!(
        results[0]["summary"],
        "Theft covers dishonest taking of movable property."
    );
    assert!(results[0]["score"].is_number());
    assert_eq!(v["total"].as_u64(), Some(results.len() as u64));

    // Hindi summary when available
    let resp = handle(post_json("/api/search", json!({"query": "theft", "lang": "hi"})))
        .await
        .expect("router should handle");
    let v: Value = serde_json::from_slice(&resp.body).expect("valid json");
    let results = v["results"].as_array().expect("results array");
    assert_eq!(
        results[0]["summary"],
        "चोरी चल संपत्ति के बेईमान हरण को कहते हैं।"
    );
    // summary_en rides along for client-side fallback
    assert_eq!(
        results[0]["summary_en"],
        "Theft covers dishonest taking of movable property."
    );

    // Unmatched query yields an empty result list, not an error
    let resp = handle(post_json("/api/search", json!({"query": "zzzunheardof", "lang": "en"})))
        .await
        .expect("router should handle");
    assert_eq!(resp.code.as_u16(), 200);
    let v: Value = serde_json::from_slice(&resp.body).expect("valid json");
    assert_eq!(v["results"].as_array().map(|a| a.len()), Some(0));
    assert_eq!(v["total"].as_u64(), Some(0));

    // Law detail round trip
    let resp = handle(make_get(&format!("/api/law/{}", ids[0])))
        .await
        .expect("router should handle");
    assert_eq!(resp.code.as_u16(), 200);
    let v: Value = serde_json::from_slice(&resp.body).expect("valid json");
    assert_eq!(v["title"], "Theft");
    assert_eq!(v["act"], "Penal Code");

    let resp = handle(make_get("/api/law/999999")).await.expect("router should handle");
    assert_eq!(resp.code.as_u16(), 404);
    let v: Value = serde_json::from_slice(&resp.body).expect("valid json");
    assert_eq!(v["error"], "not found");

    let resp = handle(make_get("/api/law/abc")).await.expect("router should handle");
    assert_eq!(resp.code.as_u16(), 400);
}
