use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use nyaya_query::ParsedQuery;
use tantivy::collector::TopDocs;
use tantivy::doc;
use tantivy::query::{BooleanQuery, Occur, Query, TermQuery};
use tantivy::schema::{
    Field, IndexRecordOption, Schema, SchemaBuilder, TextFieldIndexing, TextOptions, FAST, INDEXED,
    STORED, STRING,
};
use tantivy::{Document as _, Index, IndexReader, IndexWriter, Term};

use crate::{IndexEngine, LawDocument, SearchHit};

/// Field handles for fast access at query time.
#[derive(Debug, Clone)]
pub struct TantivyFields {
    pub law_id: Field,
    pub title: Field,
    pub act: Field,
    pub act_slug: Field,
    pub section: Field,
    pub content: Field,
}

/// Default Tantivy-based relevance engine.
pub struct TantivyIndexEngine {
    pub schema: Schema,
    pub fields: TantivyFields,
    index: Index,
    reader: IndexReader,
    writer: Mutex<IndexWriter>,
}

impl TantivyIndexEngine {
    /// Build the schema: law_id, title, act (analyzed + raw slug for the
    /// `act:` filter), section (raw, for the `section:` filter), content.
    pub fn build_schema() -> (Schema, TantivyFields) {
        // Indexing options for text fields: positions+freqs for BM25.
        let text_indexing = TextFieldIndexing::default()
            .set_index_option(IndexRecordOption::WithFreqsAndPositions)
            .set_tokenizer("en_stops");

        let text_with_positions = TextOptions::default()
            .set_indexing_options(text_indexing)
            .set_stored();

        let mut sb = SchemaBuilder::default();
        let law_id = sb.add_i64_field("law_id", INDEXED | FAST | STORED);
        let title = sb.add_text_field("title", text_with_positions.clone());
        let act = sb.add_text_field("act", text_with_positions.clone());
        let act_slug = sb.add_text_field("act_slug", STRING);
        let section = sb.add_text_field("section", STRING | STORED);
        let content = sb.add_text_field("content", text_with_positions);
        let schema = sb.build();
        let fields = TantivyFields {
            law_id,
            title,
            act,
            act_slug,
            section,
            content,
        };
        (schema, fields)
    }

    /// Create an engine with an in-memory index (useful for quick setup).
    pub fn with_default_schema() -> Self {
        let (schema, fields) = Self::build_schema();
        let index = Index::create_in_ram(schema.clone());
        register_tokenizer_en(&index);
        let reader = index.reader().expect("build reader");
        let writer = index.writer(50_000_000).expect("build writer");
        Self {
            schema,
            fields,
            index,
            reader,
            writer: Mutex::new(writer),
        }
    }

    /// Open an existing index at `dir`, or create one if missing.
    pub fn open_or_create_in_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let (schema, fields) = Self::build_schema();
        if !dir.exists() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating index dir {}", dir.display()))?;
        }
        let meta = dir.join("meta.json");
        let index = if meta.exists() {
            Index::open_in_dir(dir).context("open tantivy index")?
        } else {
            Index::create_in_dir(dir, schema.clone()).context("create tantivy index")?
        };
        register_tokenizer_en(&index);
        let reader = index.reader().context("build index reader")?;
        let writer = index.writer(50_000_000).context("create index writer")?;
        Ok(Self {
            schema,
            fields,
            index,
            reader,
            writer: Mutex::new(writer),
        })
    }

    /// Number of laws visible to the current searcher.
    pub fn num_docs(&self) -> u64 {
        self.reader.searcher().num_docs()
    }
}

impl IndexEngine for TantivyIndexEngine {
    fn engine_name(&self) -> &'static str {
        "tantivy"
    }

    fn add(&self, law: LawDocument) -> Result<()> {
        let act_slug = law.act.trim().to_ascii_lowercase();
        let section_raw = law.section.trim().to_ascii_lowercase();
        let tdoc = doc!(
            self.fields.law_id => law.law_id,
            self.fields.title => law.title,
            self.fields.act => law.act,
            self.fields.act_slug => act_slug,
            self.fields.section => section_raw,
            self.fields.content => law.content
        );
        let mut writer = self.writer.lock().expect("writer lock");
        let _ = writer.add_document(tdoc);
        Ok(())
    }

    fn commit(&self) -> Result<()> {
        let mut writer = self.writer.lock().expect("writer lock");
        writer.commit().context("writer commit")?;
        Ok(())
    }

    fn refresh(&self) -> Result<()> {
        self.reader.reload().context("reader reload")?;
        Ok(())
    }

    fn search(&self, query: &ParsedQuery, limit: usize) -> Result<Vec<SearchHit>> {
        // Build a BM25-backed boolean query from analyzed terms over
        // title + act + content, with raw-field filters as MUST clauses.
        let limit = limit.max(1);

        let tokens = analyze_terms(&query.terms);
        if tokens.is_empty() {
            return Ok(Vec::new());
        }

        let mut clauses: Vec<(Occur, Box<dyn Query>)> = Vec::new();
        for t in tokens {
            for field in [self.fields.title, self.fields.act, self.fields.content] {
                let term = Term::from_field_text(field, &t);
                clauses.push((
                    Occur::Should,
                    Box::new(TermQuery::new(term, IndexRecordOption::WithFreqsAndPositions)),
                ));
            }
        }
        if let Some(act) = &query.filters.act {
            let term = Term::from_field_text(self.fields.act_slug, act);
            clauses.push((
                Occur::Must,
                Box::new(TermQuery::new(term, IndexRecordOption::Basic)),
            ));
        }
        if let Some(section) = &query.filters.section {
            let term = Term::from_field_text(self.fields.section, section);
            clauses.push((
                Occur::Must,
                Box::new(TermQuery::new(term, IndexRecordOption::Basic)),
            ));
        }
        let bool_query = BooleanQuery::new(clauses);
        let searcher = self.reader.searcher();
        let top_docs = searcher.search(&bool_query, &TopDocs::with_limit(limit))?;

        fn first_str(v: &serde_json::Value) -> Option<String> {
            match v {
                serde_json::Value::String(s) => Some(s.clone()),
                serde_json::Value::Array(arr) => {
                    arr.iter().find_map(|x| x.as_str().map(|s| s.to_string()))
                }
                serde_json::Value::Object(map) => {
                    // Sometimes Tantivy representations can be object-y; try common keys
                    for key in ["value", "text", "raw"] {
                        if let Some(s) = map.get(key).and_then(|x| x.as_str()) {
                            return Some(s.to_string());
                        }
                    }
                    None
                }
                _ => None,
            }
        }
        fn first_i64(v: &serde_json::Value) -> Option<i64> {
            match v {
                serde_json::Value::Number(n) => n.as_i64(),
                serde_json::Value::Array(arr) => arr.iter().find_map(|x| x.as_i64()),
                serde_json::Value::Object(map) => map.get("value").and_then(|x| x.as_i64()),
                _ => None,
            }
        }

        let mut out = Vec::with_capacity(top_docs.len());
        for (score, addr) in top_docs {
            let doc = searcher.doc::<tantivy::TantivyDocument>(addr)?;
            let json = doc.to_json(&self.schema);
            let v: serde_json::Value = serde_json::from_str(&json).unwrap_or(serde_json::json!({}));
            let law_id = v.get("law_id").and_then(first_i64).unwrap_or(0);
            let title = v.get("title").and_then(first_str).unwrap_or_default();
            out.push(SearchHit {
                law_id,
                title,
                score,
            });
        }
        Ok(out)
    }
}

fn analyze_terms(raw_terms: &[String]) -> Vec<String> {
    let mut out = Vec::new();
    for term in raw_terms {
        for tok in term.split(|c: char| !c.is_alphanumeric()) {
            let t = tok.to_ascii_lowercase();
            if t.is_empty() {
                continue;
            }
            if is_stopword(&t) {
                continue;
            }
            out.push(t);
        }
    }
    out
}

fn is_stopword(t: &str) -> bool {
    matches!(
        t,
        "a" | "an"
            | "the"
            | "and"
            | "or"
            | "of"
            | "in"
            | "to"
            | "for"
            | "on"
            | "with"
            | "is"
            | "it"
            | "this"
            | "that"
            | "by"
            | "be"
            | "as"
            | "at"
            | "from"
    )
}

fn register_tokenizer_en(index: &Index) {
    use tantivy::tokenizer::{LowerCaser, SimpleTokenizer, StopWordFilter, TextAnalyzer};
    // A minimal English analyzer: lowercase + stopwords removal.
    let stopwords: Vec<String> = vec![
        "a", "an", "the", "and", "or", "of", "in", "to", "for", "on", "with", "is", "it", "this",
        "that", "by", "be", "as", "at", "from",
    ]
    .into_iter()
    .map(|s| s.to_string())
    .collect();
    let analyzer = TextAnalyzer::builder(SimpleTokenizer::default())
        .filter(LowerCaser)
        .filter(StopWordFilter::remove(stopwords))
        .build();
    index.tokenizers().register("en_stops", analyzer);
}
