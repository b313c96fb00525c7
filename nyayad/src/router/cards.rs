pub use super::util::escape_html;

use nyaya_api::response::SearchResultItem;

use crate::index::SearchHit;

/// Scale raw BM25 scores into (0, 1] against the best hit, keeping the
/// engine's ordering.
pub(crate) fn normalize_scores(hits: &mut [SearchHit]) {
    if hits.is_empty() {
        return;
    }
    let max_bm = hits
        .iter()
        .map(|h| h.score)
        .fold(0.0f32, |a, b| a.max(b))
        .max(1e-6);
    for h in hits.iter_mut() {
        h.score /= max_bm;
    }
    hits.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

/// Fixed three decimal places, the display contract for scores.
pub fn format_score(score: f32) -> String {
    format!("{:.3}", score)
}

/// "Theft (Penal Code 378)"; the parenthetical collapses to the act alone
/// when there is no section, and disappears when there is neither.
pub fn card_heading(title: &str, act: &str, section: Option<&str>) -> String {
    let act = act.trim();
    let section = section.map(str::trim).filter(|s| !s.is_empty());
    match (act.is_empty(), section) {
        (true, None) => title.to_string(),
        (true, Some(s)) => format!("{} ({})", title, s),
        (false, None) => format!("{} ({})", title, act),
        (false, Some(s)) => format!("{} ({} {})", title, act, s),
    }
}

/// summary, else summary_en, else empty.
pub fn summary_text(summary: Option<&str>, summary_en: Option<&str>) -> String {
    summary
        .filter(|s| !s.is_empty())
        .or(summary_en.filter(|s| !s.is_empty()))
        .unwrap_or("")
        .to_string()
}

/// One rendered result card (server-side variant of the page script's card).
pub fn card_html(item: &SearchResultItem) -> String {
    let heading = escape_html(&card_heading(
        &item.title,
        &item.act,
        item.section.as_deref(),
    ));
    let summary = escape_html(&summary_text(
        item.summary.as_deref(),
        item.summary_en.as_deref(),
    ));
    let score = format_score(item.score);
    format!(
        "<div class=\"card\">\
            <h3>{heading}</h3>\
            <p>{summary}</p>\
            <p class=\"score\">Score: {score}</p>\
        </div>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_is_padded_and_truncated_to_three_decimals() {
        assert_eq!(format_score(0.8), "0.800");
        assert_eq!(format_score(0.12345), "0.123");
        assert_eq!(format_score(1.0), "1.000");
    }

    #[test]
    fn heading_includes_act_and_section() {
        assert_eq!(
            card_heading("Theft", "Penal Code", Some("378")),
            "Theft (Penal Code 378)"
        );
        assert_eq!(card_heading("Theft", "Penal Code", None), "Theft (Penal Code)");
        assert_eq!(card_heading("Theft", "", None), "Theft");
    }

    #[test]
    fn summary_falls_back_to_english_then_empty() {
        assert_eq!(summary_text(Some("hi"), Some("en")), "hi");
        assert_eq!(summary_text(None, Some("en")), "en");
        assert_eq!(summary_text(Some(""), Some("en")), "en");
        assert_eq!(summary_text(None, None), "");
    }

    #[test]
    fn normalization_keeps_order_and_tops_out_at_one() {
        use crate::index::SearchHit;
        let mut hits = vec![
            SearchHit { law_id: 1, title: "a".into(), score: 2.0 },
            SearchHit { law_id: 2, title: "b".into(), score: 4.0 },
        ];
        normalize_scores(&mut hits);
        assert_eq!(hits[0].law_id, 2);
        assert!((hits[0].score - 1.0).abs() < 1e-6);
        assert!((hits[1].score - 0.5).abs() < 1e-6);
    }
}
