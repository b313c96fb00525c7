use anyhow::Result;

use nyaya_query::ParsedQuery;

/// Law as handed to the relevance engine. `content` carries everything
/// term-searchable beyond the title and act name (section label, statute
/// text, English summary), concatenated by the caller.
#[derive(Debug, Clone)]
pub struct LawDocument {
    pub law_id: i64,
    pub title: String,
    pub act: String,
    pub section: String,
    pub content: String,
}

/// Minimal search hit representation for the query path. Everything beyond
/// the id and score is looked up from storage when building responses.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub law_id: i64,
    pub title: String,
    pub score: f32,
}

/// Pluggable relevance engine abstraction.
/// Implementations should be thread-safe; near-real-time updates are
/// expected via commit/refresh semantics.
pub trait IndexEngine: Send + Sync {
    fn engine_name(&self) -> &'static str;

    /// Add a law to the index.
    fn add(&self, _doc: LawDocument) -> Result<()>;

    /// Commit pending changes to make them durable.
    fn commit(&self) -> Result<()>;

    /// Refresh searchers to see new segments (near-real-time).
    fn refresh(&self) -> Result<()>;

    /// Execute a search, returning at most `limit` hits in score order.
    fn search(&self, _query: &ParsedQuery, _limit: usize) -> Result<Vec<SearchHit>>;
}

pub mod noop;
pub mod tantivy;

/// Select an engine implementation by name.
pub fn make_engine(name: &str) -> anyhow::Result<Box<dyn IndexEngine>> {
    match name {
        "tantivy" => Ok(Box::new(tantivy::TantivyIndexEngine::with_default_schema())),
        "noop" => Ok(Box::new(noop::NoopIndexEngine::default())),
        other => Err(anyhow::anyhow!(format!("unknown engine: {}", other))),
    }
}
