use anyhow::Result;
use std::net::SocketAddr;

use crate::proto::http::{Request, Response};
use nyaya_api::status::StatusCode;

mod api;
mod cards;
mod ui;
mod util;

pub async fn handle(req: Request) -> Result<Response> {
    handle_with_peer(req, None).await
}

pub async fn handle_with_peer(req: Request, peer: Option<SocketAddr>) -> Result<Response> {
    let path = req.path.split('?').next().unwrap_or("").to_string();
    match (req.method.as_str(), path.as_str()) {
        ("GET", "/") => ui::serve_index_html(),
        ("GET", "/search") => {
            // SSR: if q is present render server-side results, else serve the page
            if let Some(query) = req.query() {
                let mut q: Option<String> = None;
                let mut lang = "en".to_string();
                for pair in query.split('&') {
                    if let Some((k, v)) = pair.split_once('=') {
                        match k {
                            "q" => q = Some(util::percent_decode(v)),
                            "lang" => lang = util::percent_decode(v),
                            _ => {}
                        }
                    }
                }
                if let Some(q) = q.filter(|q| !q.trim().is_empty()) {
                    return ui::render_search_ssr(&q, &lang).await;
                }
            }
            ui::serve_index_html()
        }
        ("GET", "/admin") => ui::serve_admin_html(),
        ("GET", p) if p.starts_with("/assets/") => ui::serve_asset(p),
        ("GET", "/health/ready") => Ok(util::json_response(
            StatusCode::Ok,
            b"{\"status\":\"ready\"}".to_vec(),
        )),
        ("POST", "/api/search") => api::handle_search(req).await,
        ("GET", p) if p.starts_with("/api/law/") => {
            api::handle_get_law(&p["/api/law/".len()..]).await
        }
        ("POST", "/admin/add") => api::handle_admin_add(req, peer).await,
        _ => Ok(Response {
            code: StatusCode::BadRequest,
            headers: vec![],
            body: vec![],
        }),
    }
}
