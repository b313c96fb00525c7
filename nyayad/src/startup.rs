use anyhow::Result;
use std::time::Instant;

use crate::index::LawDocument;
use crate::storage;

fn env_flag_true(key: &str, default_true: bool) -> bool {
    match std::env::var(key) {
        Ok(v) => {
            let s = v.trim().to_ascii_lowercase();
            matches!(s.as_str(), "1" | "true" | "yes" | "on")
        }
        Err(_) => default_true,
    }
}

fn env_usize(key: &str, default_val: usize) -> usize {
    std::env::var(key)
        .ok()
        .and_then(|s| s.trim().parse::<usize>().ok())
        .unwrap_or(default_val)
}

/// Searchable body for a law: section label, statute text, and the English
/// summary, so queries hit any of them.
pub fn law_content(
    section: Option<&str>,
    text: Option<&str>,
    summary_en: Option<&str>,
) -> String {
    let mut parts: Vec<&str> = Vec::new();
    if let Some(s) = section {
        parts.push(s);
    }
    if let Some(t) = text {
        parts.push(t);
    }
    if let Some(s) = summary_en {
        parts.push(s);
    }
    parts.join(" ")
}

pub fn law_to_document(law: &storage::laws::LawRecord) -> LawDocument {
    LawDocument {
        law_id: law.id,
        title: law.title.clone(),
        act: law.act.clone().unwrap_or_default(),
        section: law.section.clone().unwrap_or_default(),
        content: law_content(
            law.section.as_deref(),
            law.text.as_deref(),
            law.summary_en.as_deref(),
        ),
    }
}

/// Rebuild the relevance index from the full law table. Runs before the
/// accept loop so the first query sees the whole corpus.
/// - bounded via NYAYA_REINDEX_LIMIT (default 100_000)
/// - progress logs are sparse (every NYAYA_REINDEX_LOG_EVERY; default 50)
pub async fn reindex_all() -> Result<()> {
    if !env_flag_true("NYAYA_REINDEX_ENABLED", true) {
        eprintln!("[reindex] disabled via NYAYA_REINDEX_ENABLED");
        return Ok(());
    }

    let start = Instant::now();
    let pool = crate::services::db().clone();
    let limit = env_usize("NYAYA_REINDEX_LIMIT", 100_000);
    let log_every = env_usize("NYAYA_REINDEX_LOG_EVERY", 50);

    let laws = match storage::laws::list_laws(&pool, limit as i64).await {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!("[reindex] list_laws error: {:?}", e);
            Vec::new()
        }
    };

    let total = laws.len();
    if total == 0 {
        eprintln!("[reindex] no laws in store; took {:?}", start.elapsed());
        return Ok(());
    }

    let engine = crate::services::index_engine();
    for (i, law) in laws.iter().enumerate() {
        if let Err(err) = engine.add(law_to_document(law)) {
            tracing::warn!("[reindex] law id={} error: {:?}", law.id, err);
        }
        let done = i + 1;
        if log_every > 0 && (done % log_every == 0 || done == total) {
            eprintln!(
                "[reindex] indexed {}/{} laws in {:?}",
                done,
                total,
                start.elapsed()
            );
        }
    }
    engine.commit()?;
    engine.refresh()?;

    Ok(())
}
