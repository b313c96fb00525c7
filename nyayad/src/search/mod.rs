use std::collections::HashMap;
use std::time::{Duration, Instant};

use nyaya_api::response::SearchResponse;

use crate::query::ParsedQuery;

/// Create a normalized cache key from a parsed query plus the summary
/// language (terms + filters + lang).
pub fn normalize_key(pq: &ParsedQuery, lang: &str) -> String {
    let mut parts: Vec<String> = Vec::new();
    // keep term order but lowercase
    for t in &pq.terms {
        parts.push(t.to_ascii_lowercase());
    }
    if let Some(act) = &pq.filters.act {
        parts.push(format!("act={}", act.to_ascii_lowercase()));
    }
    if let Some(section) = &pq.filters.section {
        parts.push(format!("section={}", section.to_ascii_lowercase()));
    }
    parts.push(format!("lang={}", lang.to_ascii_lowercase()));
    parts.join("\u{1f}") // use a non-space separator
}

#[derive(Clone)]
pub struct CacheEntry {
    pub inserted: Instant,
    pub response: SearchResponse,
}

/// A simple hot query cache with TTL.
pub struct HotQueryCache {
    ttl: Duration,
    map: std::sync::Mutex<HashMap<String, CacheEntry>>,
}

impl HotQueryCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            map: std::sync::Mutex::new(HashMap::new()),
        }
    }
    pub fn get(&self, key: &str) -> Option<SearchResponse> {
        let mut m = self.map.lock().unwrap();
        if let Some(entry) = m.get(key) {
            if entry.inserted.elapsed() <= self.ttl {
                return Some(entry.response.clone());
            }
        }
        m.remove(key);
        None
    }
    pub fn put(&self, key: String, resp: SearchResponse) {
        let mut m = self.map.lock().unwrap();
        m.insert(
            key,
            CacheEntry {
                inserted: Instant::now(),
                response: resp,
            },
        );
        // optional pruning for size constraints could be added here
    }
    /// Drop every entry. Called after the corpus changes so cached result
    /// lists cannot outlive the laws they were computed from.
    pub fn clear(&self) {
        let mut m = self.map.lock().unwrap();
        m.clear();
    }
}
