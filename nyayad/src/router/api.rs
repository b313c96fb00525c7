use anyhow::Result;
use once_cell::sync::Lazy;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use nyaya_api::request::{AddLawRequest, SearchRequest};
use nyaya_api::response::{LawDetail, SearchResponse, SearchResultItem};
use nyaya_api::status::StatusCode;

use crate::proto::http::{Request, Response};
use crate::query::parse_query;
use crate::search::{normalize_key, HotQueryCache};
use crate::services;
use crate::startup::law_to_document;
use crate::storage::laws::{self, LawRecord, NewLaw};

use super::cards::normalize_scores;
use super::util::{error_response, get_header, json_response, percent_decode};

/// Search responses are capped at the top six laws.
pub const MAX_RESULTS: usize = 6;

static HOT_CACHE: Lazy<HotQueryCache> =
    Lazy::new(|| HotQueryCache::new(std::time::Duration::from_secs(20)));

fn summary_for_lang(law: &LawRecord, lang: &str) -> Option<String> {
    match lang {
        "hi" if law.summary_hi.as_deref().is_some_and(|s| !s.is_empty()) => {
            law.summary_hi.clone()
        }
        "mr" if law.summary_mr.as_deref().is_some_and(|s| !s.is_empty()) => {
            law.summary_mr.clone()
        }
        _ => law.summary_en.clone(),
    }
}

/// Top-k law hits resolved against storage, scores normalized, summaries
/// selected per `lang`. Shared by the JSON handler and the SSR page.
pub(crate) async fn run_search(query: &str, lang: &str) -> Result<SearchResponse> {
    let pq = parse_query(query);
    let engine = services::index_engine();
    let mut hits = engine.search(&pq, MAX_RESULTS).unwrap_or_default();
    normalize_scores(&mut hits);

    let pool = services::db().clone();
    let mut results = Vec::with_capacity(hits.len());
    for hit in hits {
        // Hits may outlive their rows when the store changes under us.
        let Some(law) = laws::get_law(&pool, hit.law_id).await? else {
            continue;
        };
        results.push(SearchResultItem {
            id: law.id,
            title: law.title.clone(),
            act: law.act.clone().unwrap_or_default(),
            section: law.section.clone(),
            summary: summary_for_lang(&law, lang),
            summary_en: law.summary_en.clone(),
            score: hit.score,
        });
    }
    Ok(SearchResponse {
        query: pq.terms.join(" "),
        total: results.len() as u64,
        results,
    })
}

pub async fn handle_search(req: Request) -> Result<Response> {
    let body: SearchRequest = match serde_json::from_slice(&req.body) {
        Ok(b) => b,
        Err(_) => return Ok(error_response(StatusCode::BadRequest, "invalid json body")),
    };
    let query = body.query.trim().to_string();
    if query.is_empty() {
        return Ok(error_response(StatusCode::BadRequest, "query required"));
    }
    let lang = body.lang.trim().to_ascii_lowercase();

    // Query cache: normalize terms+filters+lang
    let pq = parse_query(&query);
    let key = normalize_key(&pq, &lang);
    if let Some(hit) = HOT_CACHE.get(&key) {
        let body = serde_json::to_vec(&hit).unwrap_or_else(|_| b"{}".to_vec());
        return Ok(json_response(StatusCode::Ok, body));
    }

    let resp = match run_search(&query, &lang).await {
        Ok(r) => r,
        Err(e) => {
            eprintln!("[api] search error: {e:?}");
            return Ok(error_response(StatusCode::InternalServerError, "search failed"));
        }
    };
    HOT_CACHE.put(key, resp.clone());
    let body = serde_json::to_vec(&resp).unwrap_or_else(|_| b"{}".to_vec());
    Ok(json_response(StatusCode::Ok, body))
}

pub async fn handle_get_law(raw_id: &str) -> Result<Response> {
    let Ok(id) = raw_id.parse::<i64>() else {
        return Ok(error_response(StatusCode::BadRequest, "invalid law id"));
    };
    let pool = services::db().clone();
    let law = match laws::get_law(&pool, id).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("[api] law lookup error: {e:?}");
            return Ok(error_response(StatusCode::InternalServerError, "lookup failed"));
        }
    };
    let Some(law) = law else {
        return Ok(error_response(StatusCode::NotFound, "not found"));
    };
    let detail = LawDetail {
        id: law.id,
        title: Some(law.title),
        section: law.section,
        act: law.act,
        text: law.text,
        summary_en: law.summary_en,
    };
    let body = serde_json::to_vec(&detail).unwrap_or_else(|_| b"{}".to_vec());
    Ok(json_response(StatusCode::Ok, body))
}

// Simple per-IP rate limiter for POST /admin/add
struct IpRateLimiter {
    max: usize,
    window: std::time::Duration,
    map: std::sync::Mutex<
        std::collections::HashMap<IpAddr, std::collections::VecDeque<std::time::Instant>>,
    >,
}

impl IpRateLimiter {
    fn new(max: usize, window: std::time::Duration) -> Self {
        Self {
            max,
            window,
            map: std::sync::Mutex::new(std::collections::HashMap::new()),
        }
    }
    fn allow(&self, ip: IpAddr) -> bool {
        let now = std::time::Instant::now();
        let mut map = self.map.lock().unwrap();
        let q = map
            .entry(ip)
            .or_insert_with(|| std::collections::VecDeque::new());
        while let Some(&t) = q.front() {
            if now.duration_since(t) > self.window {
                q.pop_front();
            } else {
                break;
            }
        }
        if q.len() < self.max {
            q.push_back(now);
            true
        } else {
            false
        }
    }
}

static RATE_LIMITER: Lazy<IpRateLimiter> = Lazy::new(|| {
    let max = std::env::var("NYAYA_ADMIN_RATE")
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(5);
    let win = std::env::var("NYAYA_ADMIN_WINDOW")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(60);
    IpRateLimiter::new(max, std::time::Duration::from_secs(win))
});

fn admin_password() -> String {
    std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".to_string())
}

pub async fn handle_admin_add(req: Request, peer: Option<SocketAddr>) -> Result<Response> {
    // Determine client IP (peer preferred, fallback to x-forwarded-for)
    let ip_from_peer = peer.map(|p| p.ip());
    let ip_from_header = get_header(&req, "x-forwarded-for")
        .and_then(|s| s.split(',').next())
        .and_then(|s| IpAddr::from_str(s.trim()).ok());
    let ip = ip_from_peer.or(ip_from_header);
    if let Some(ip) = ip {
        if !RATE_LIMITER.allow(ip) {
            return Ok(error_response(StatusCode::TooManyRequests, "slow down"));
        }
    }

    let Some(add) = extract_add_request(&req) else {
        return Ok(error_response(StatusCode::BadRequest, "invalid body"));
    };
    if add.password != admin_password() {
        return Ok(error_response(StatusCode::Unauthorized, "unauthorized"));
    }
    if add.title.trim().is_empty() {
        return Ok(error_response(StatusCode::BadRequest, "title required"));
    }

    let law = NewLaw {
        title: add.title.trim().to_string(),
        section: add.section.filter(|s| !s.is_empty()),
        act: add.act.filter(|s| !s.is_empty()),
        text: add.text.filter(|s| !s.is_empty()),
        summary_en: add.summary_en.filter(|s| !s.is_empty()),
        summary_hi: add.summary_hi.filter(|s| !s.is_empty()),
        summary_mr: add.summary_mr.filter(|s| !s.is_empty()),
    };

    let pool = services::db().clone();
    let id = match laws::insert_law(&pool, &law).await {
        Ok(id) => id,
        Err(e) => {
            eprintln!("[admin] insert error: {e:?}");
            return Ok(error_response(StatusCode::InternalServerError, "insert failed"));
        }
    };

    // Make the new law searchable before answering.
    let engine = services::index_engine();
    let stored = LawRecord {
        id,
        title: law.title.clone(),
        section: law.section.clone(),
        act: law.act.clone(),
        text: law.text.clone(),
        summary_en: law.summary_en.clone(),
        summary_hi: law.summary_hi.clone(),
        summary_mr: law.summary_mr.clone(),
    };
    if let Err(e) = engine
        .add(law_to_document(&stored))
        .and_then(|_| engine.commit())
        .and_then(|_| engine.refresh())
    {
        eprintln!("[admin] index error for law id={id}: {e:?}");
    }
    HOT_CACHE.clear();

    let body = serde_json::to_vec(&serde_json::json!({
        "ok": true,
        "id": id
    }))
    .unwrap_or_else(|_| b"{}".to_vec());
    Ok(json_response(StatusCode::Ok, body))
}

/// Admin submissions arrive as JSON from tooling or as a urlencoded form
/// from the admin page; both decode into the same request shape.
fn extract_add_request(req: &Request) -> Option<AddLawRequest> {
    let ct = get_header(req, "content-type").unwrap_or("");
    if ct.contains("application/x-www-form-urlencoded") {
        return Some(parse_add_form(&req.body));
    }
    serde_json::from_slice::<AddLawRequest>(&req.body).ok()
}

fn parse_add_form(body: &[u8]) -> AddLawRequest {
    let mut out = AddLawRequest::default();
    let text = String::from_utf8_lossy(body);
    for pair in text.split('&') {
        let Some((k, v)) = pair.split_once('=') else {
            continue;
        };
        let v = percent_decode(v);
        match k {
            "password" => out.password = v,
            "title" => out.title = v,
            "section" => out.section = Some(v),
            "act" => out.act = Some(v),
            "text" => out.text = Some(v),
            "summary_en" => out.summary_en = Some(v),
            "summary_hi" => out.summary_hi = Some(v),
            "summary_mr" => out.summary_mr = Some(v),
            _ => {}
        }
    }
    out
}
