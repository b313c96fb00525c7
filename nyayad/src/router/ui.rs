use nyaya_api::status::StatusCode;

use crate::proto::http::Response;

use super::api::run_search;
use super::cards::card_html;
use super::util::escape_html;

pub fn ui_dir() -> std::path::PathBuf {
    let mut candidates: Vec<std::path::PathBuf> = Vec::new();
    if let Ok(dir) = std::env::var("NYAYA_UI_DIR") {
        candidates.push(std::path::PathBuf::from(dir));
    }
    candidates.push(std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("ui"));
    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd.join("ui"));
    }
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            candidates.push(dir.join("ui"));
        }
    }
    for p in &candidates {
        if p.is_dir() {
            if std::env::var("NYAYA_DEBUG_UI")
                .ok()
                .filter(|v| v != "0")
                .is_some()
            {
                eprintln!("[ui] using directory: {}", p.display());
            }
            return p.clone();
        }
    }
    std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("ui")
}

pub fn serve_index_html() -> anyhow::Result<Response> {
    let mut p = ui_dir();
    p.push("index.html");
    match std::fs::read(&p) {
        Ok(bytes) => Ok(html_response(StatusCode::Ok, bytes)),
        Err(e) => {
            if std::env::var("NYAYA_DEBUG_UI")
                .ok()
                .filter(|v| v != "0")
                .is_some()
            {
                eprintln!("[ui] index fallback; failed to read {}: {}", p.display(), e);
            }
            Ok(html_response(
                StatusCode::Ok,
                DEFAULT_INDEX_HTML.as_bytes().to_vec(),
            ))
        }
    }
}

pub fn serve_admin_html() -> anyhow::Result<Response> {
    let mut p = ui_dir();
    p.push("admin.html");
    match std::fs::read(&p) {
        Ok(bytes) => Ok(html_response(StatusCode::Ok, bytes)),
        Err(e) => {
            if std::env::var("NYAYA_DEBUG_UI")
                .ok()
                .filter(|v| v != "0")
                .is_some()
            {
                eprintln!("[ui] admin fallback; failed to read {}: {}", p.display(), e);
            }
            Ok(html_response(
                StatusCode::Ok,
                DEFAULT_ADMIN_HTML.as_bytes().to_vec(),
            ))
        }
    }
}

pub fn serve_asset(path: &str) -> anyhow::Result<Response> {
    let rel = &path["/assets/".len()..];
    if rel.contains("..") {
        return Ok(Response {
            code: StatusCode::BadRequest,
            headers: vec![],
            body: vec![],
        });
    }
    let mut p = ui_dir();
    p.push("assets");
    p.push(rel);
    match std::fs::read(&p) {
        Ok(bytes) => Ok(Response {
            code: StatusCode::Ok,
            headers: vec![("content-type".into(), content_type_for(&p))],
            body: bytes,
        }),
        Err(e) => {
            if std::env::var("NYAYA_DEBUG_UI")
                .ok()
                .filter(|v| v != "0")
                .is_some()
            {
                eprintln!("[ui] asset missing; failed to read {}: {}", p.display(), e);
            }
            // The page script ships inside the binary so a bare checkout
            // still serves a working search page.
            if rel == "app.js" {
                return Ok(Response {
                    code: StatusCode::Ok,
                    headers: vec![("content-type".into(), "application/javascript".into())],
                    body: DEFAULT_APP_JS.as_bytes().to_vec(),
                });
            }
            Ok(Response {
                code: StatusCode::BadRequest,
                headers: vec![],
                body: vec![],
            })
        }
    }
}

fn content_type_for(p: &std::path::Path) -> String {
    match p
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase()
        .as_str()
    {
        "html" => "text/html".into(),
        "css" => "text/css".into(),
        "js" => "application/javascript".into(),
        "json" => "application/json".into(),
        "png" => "image/png".into(),
        "jpg" | "jpeg" => "image/jpeg".into(),
        "svg" => "image/svg+xml".into(),
        _ => "application/octet-stream".into(),
    }
}

fn html_response(code: StatusCode, body: Vec<u8>) -> Response {
    Response {
        code,
        headers: vec![("content-type".into(), "text/html".into())],
        body,
    }
}

pub async fn render_search_ssr(q: &str, lang: &str) -> anyhow::Result<Response> {
    let resp = match run_search(q, lang).await {
        Ok(r) => r,
        Err(e) => {
            eprintln!("[ui] ssr search error: {e:?}");
            return Ok(html_response(
                StatusCode::InternalServerError,
                b"<p class=\"error\">Search failed. Please try again.</p>".to_vec(),
            ));
        }
    };

    let mut items = String::new();
    if resp.results.is_empty() {
        items.push_str("<p>No results found.</p>");
    } else {
        for r in &resp.results {
            items.push_str(&card_html(r));
        }
    }

    let sq = escape_html(q);
    let slang = escape_html(lang);
    let body = format!(
        "<!doctype html>
<html>
<head><meta charset=\"utf-8\"/><title>Results - {sq}</title></head>
<body>
  <h1>Nyaya Legal Search</h1>
  <form action=\"/search\" method=\"get\">
    <input id=\"query\" name=\"q\" type=\"text\" value=\"{sq}\" autofocus autocomplete=\"off\"/>
    <input type=\"hidden\" name=\"lang\" value=\"{slang}\"/>
    <button type=\"submit\">Search</button>
  </form>
  <div id=\"results\">{items}</div>
</body>
</html>"
    );
    Ok(html_response(StatusCode::Ok, body.into_bytes()))
}

// Fallback inline UI if disk files are missing
static DEFAULT_INDEX_HTML: &str = r#"<!doctype html>
<html>
<head>
  <meta charset="utf-8"/>
  <title>Nyaya Legal Search</title>
  <style>
    body { font-family: sans-serif; max-width: 720px; margin: 2em auto; }
    .card { border: 1px solid #ddd; border-radius: 6px; padding: 0.5em 1em; margin: 0.5em 0; }
    .card h3 small { color: #666; }
    .score { font-size: 12px; color: #666; }
    .error { color: #b00020; }
  </style>
</head>
<body>
  <h1>Nyaya Legal Search</h1>
  <p>Describe your legal problem and pick a summary language.</p>
  <div>
    <input id="query" type="text" placeholder="e.g. employer not paying salary" autofocus autocomplete="off"/>
    <select id="lang">
      <option value="en">English</option>
      <option value="hi">हिन्दी</option>
      <option value="mr">मराठी</option>
    </select>
    <button id="searchBtn">Search</button>
  </div>
  <div id="results"></div>
  <script src="/assets/app.js"></script>
</body>
</html>
"#;

// Default admin page if disk file missing. The password travels with the
// form; /admin/add checks it.
static DEFAULT_ADMIN_HTML: &str = r#"<!doctype html>
<html>
<head>
  <meta charset="utf-8"/>
  <title>Nyaya Admin</title>
  <style>
    body { font-family: sans-serif; max-width: 720px; margin: 2em auto; }
    label { display: block; margin-top: 0.75em; }
    input, textarea { width: 100%; }
  </style>
</head>
<body>
  <h1>Add a Law</h1>
  <form action="/admin/add" method="post">
    <label>Admin password <input name="password" type="password"/></label>
    <label>Title <input name="title" type="text"/></label>
    <label>Section <input name="section" type="text"/></label>
    <label>Act <input name="act" type="text"/></label>
    <label>Text <textarea name="text" rows="4"></textarea></label>
    <label>Summary (English) <textarea name="summary_en" rows="3"></textarea></label>
    <label>Summary (Hindi) <textarea name="summary_hi" rows="3"></textarea></label>
    <label>Summary (Marathi) <textarea name="summary_mr" rows="3"></textarea></label>
    <button type="submit">Add</button>
  </form>
  <a href="/">Back to search</a>
</body>
</html>
"#;

// The browser-side search handler. Stale responses are dropped via a
// request token, and failures land in a dedicated error state instead of
// leaving the loading message up forever.
static DEFAULT_APP_JS: &str = r#"let searchSeq = 0;

async function doSearch() {
  const q = document.getElementById('query').value;
  const lang = document.getElementById('lang').value;
  const resDiv = document.getElementById('results');
  const token = ++searchSeq;
  resDiv.innerHTML = '<p>Searching...</p>';
  try {
    const resp = await fetch('/api/search', {
      method: 'POST',
      headers: {'Content-Type': 'application/json'},
      body: JSON.stringify({query: q, lang: lang})
    });
    const j = await resp.json();
    if (token !== searchSeq) return; // a newer search owns the container
    if (!j || !Array.isArray(j.results) || j.results.length === 0) {
      resDiv.innerHTML = '<p>No results found.</p>';
      return;
    }
    resDiv.innerHTML = '';
    j.results.forEach(r => {
      const el = document.createElement('div');
      el.className = 'card';
      const score = typeof r.score === 'number' ? r.score.toFixed(3) : '?';
      const section = r.section ? ' ' + r.section : '';
      el.innerHTML = `<h3>${r.title} <small>(${r.act}${section})</small></h3>
                      <p>${r.summary || r.summary_en || ''}</p>
                      <p class="score">Score: ${score}</p>`;
      resDiv.appendChild(el);
    });
  } catch (err) {
    if (token !== searchSeq) return;
    resDiv.innerHTML = '<p class="error">Search failed. Please try again.</p>';
  }
}

document.getElementById('searchBtn').addEventListener('click', doSearch);
document.getElementById('query').addEventListener('keydown', (e) => {
  if (e.key === 'Enter') { e.preventDefault(); doSearch(); }
});
"#;
