use nyayad::index::tantivy::TantivyIndexEngine;
use nyayad::index::{IndexEngine, LawDocument};
use nyayad::query::{parse_query, ParsedQuery, QueryFilters};
use std::path::PathBuf;

fn tempdir() -> PathBuf {
    let mut p = std::env::temp_dir();
    let uniq = format!("nyayad-bm25-{}-{}", std::process::id(), rand_suffix());
    p.push(uniq);
    p
}

fn rand_suffix() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let ns = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos();
    format!("{:x}", ns)
}

fn law(id: i64, title: &str, act: &str, section: &str, content: &str) -> LawDocument {
    LawDocument {
        law_id: id,
        title: title.into(),
        act: act.into(),
        section: section.into(),
        content: content.into(),
    }
}

#[test]
fn stopwords_are_removed_in_query() {
    let dir = tempdir();
    let engine = TantivyIndexEngine::open_or_create_in_dir(&dir).expect("open/create index");

    // Index a law containing a meaningful term plus some stopwords.
    engine
        .add(law(1, "The Theft Provision", "IPC", "378", "The and of theft"))
        .unwrap();
    engine.commit().unwrap();
    engine.refresh().unwrap();

    // Query mixes upper-case and stopwords.
    let pq = ParsedQuery {
        terms: vec!["THE".into(), "and".into(), "THEFT".into(), "of".into()],
        filters: QueryFilters::default(),
    };
    let hits = engine.search(&pq, 10).expect("search ok");
    assert!(!hits.is_empty(), "should match after removing stopwords");
}

#[test]
fn bm25_prefers_higher_tf() {
    let dir = tempdir();
    let engine = TantivyIndexEngine::open_or_create_in_dir(&dir).expect("open/create index");

    // Law with higher term frequency for 'theft'
    engine
        .add(law(1, "theft theft", "IPC", "378", "theft of property"))
        .unwrap();

    // Law with lower term frequency
    engine
        .add(law(2, "theft", "IPC", "379", "punishment"))
        .unwrap();

    engine.commit().unwrap();
    engine.refresh().unwrap();

    let pq = ParsedQuery {
        terms: vec!["theft".into()],
        filters: QueryFilters::default(),
    };
    let hits = engine.search(&pq, 10).expect("search ok");
    assert!(hits.len() >= 2);
    // Expect first score >= second due to higher term frequency
    assert!(hits[0].score >= hits[1].score, "expected top score >= second: {:?}", hits);
    assert_eq!(hits[0].law_id, 1);
}

#[test]
fn act_and_section_filters_restrict_hits() {
    let dir = tempdir();
    let engine = TantivyIndexEngine::open_or_create_in_dir(&dir).expect("open/create index");

    engine
        .add(law(1, "Theft", "IPC", "378", "dishonest taking of property"))
        .unwrap();
    engine
        .add(law(2, "Cheque bounce", "NIA", "138", "dishonour of cheque for property dues"))
        .unwrap();
    engine.commit().unwrap();
    engine.refresh().unwrap();

    let pq = parse_query("property act:ipc");
    let hits = engine.search(&pq, 10).expect("search ok");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].law_id, 1);

    let pq = parse_query("property section:138");
    let hits = engine.search(&pq, 10).expect("search ok");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].law_id, 2);

    let pq = parse_query("property act:crpc");
    let hits = engine.search(&pq, 10).expect("search ok");
    assert!(hits.is_empty());
}
