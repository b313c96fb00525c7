use nyayad::query::{parse_query, ParsedQuery, QueryFilters};

#[test]
fn parses_supported_filters_and_terms() {
    let pq = parse_query("theft act:IPC section:378 punishment");
    assert_eq!(pq.filters.act.as_deref(), Some("ipc"));
    assert_eq!(pq.filters.section.as_deref(), Some("378"));
    assert_eq!(pq.terms, vec!["theft", "punishment"]);
}

#[test]
fn strips_quotes_and_normalizes_values() {
    let pq = parse_query("\"multi word\" act:'CrPC' section:\"138\"");
    assert_eq!(pq.filters.act.as_deref(), Some("crpc"));
    assert_eq!(pq.filters.section.as_deref(), Some("138"));
    // The quoted multi-word token is not grouped by our simple parser; asserts tokenization
    assert_eq!(pq.terms, vec!["\"multi", "word\""]);
}

#[test]
fn last_occurrence_wins_for_duplicate_filters() {
    let pq = parse_query("act:ipc act:crpc section:378 section:138 x");
    assert_eq!(pq.filters.act.as_deref(), Some("crpc"));
    assert_eq!(pq.filters.section.as_deref(), Some("138"));
    assert_eq!(pq.terms, vec!["x"]);
}

#[test]
fn unsupported_filter_tokens_become_terms() {
    let pq = parse_query("lang:en tag:news theft");
    // Unsupported filters should be treated as free-text tokens
    assert_eq!(pq.filters.act, None);
    assert_eq!(pq.filters.section, None);
    assert_eq!(pq.terms, vec!["lang:en", "tag:news", "theft"]);
}

#[test]
fn empty_or_missing_filter_values_are_ignored() {
    let pq = parse_query("act: section:  theft");
    assert_eq!(pq.filters.act, None);
    assert_eq!(pq.filters.section, None);
    assert_eq!(pq.terms, vec!["theft"]);
}

#[test]
fn empty_input_yields_no_terms() {
    assert_eq!(
        parse_query("   "),
        ParsedQuery {
            terms: vec![],
            filters: QueryFilters::default()
        }
    );
}
