use nyaya_api::status::StatusCode;

use crate::proto::http::Response;

pub fn percent_decode(s: &str) -> String {
    // form bodies encode spaces as '+'
    let s = s.replace('+', " ");
    percent_encoding::percent_decode_str(&s).decode_utf8_lossy().to_string()
}

pub fn json_response(code: StatusCode, body: Vec<u8>) -> Response {
    if code == StatusCode::Ok
        && std::env::var("NYAYA_DEBUG_RESULTS").ok().filter(|v| v != "0").is_some()
    {
        if let Ok(txt) = std::str::from_utf8(&body) {
            eprintln!("[results] {}", txt);
        }
    }
    Response { code, headers: vec![("content-type".into(), "application/json".into())], body }
}

pub fn error_response(code: StatusCode, message: &str) -> Response {
    let body = serde_json::to_vec(&serde_json::json!({ "error": message }))
        .unwrap_or_else(|_| b"{}".to_vec());
    Response { code, headers: vec![("content-type".into(), "application/json".into())], body }
}

pub fn get_header<'a>(req: &'a crate::proto::http::Request, name: &str) -> Option<&'a str> {
    let lname = name.to_ascii_lowercase();
    for (k, v) in &req.headers {
        if k.eq_ignore_ascii_case(&lname) { return Some(v.as_str()); }
    }
    None
}

pub fn escape_html(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            '\'' => "&#39;".to_string(),
            _ => c.to_string(),
        })
        .collect::<String>()
}
