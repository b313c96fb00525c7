#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResultItem {
    pub id: i64,
    pub title: String,
    pub act: String,
    #[cfg_attr(
        feature = "json",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub section: Option<String>,
    #[cfg_attr(
        feature = "json",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub summary: Option<String>,
    #[cfg_attr(
        feature = "json",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub summary_en: Option<String>,
    pub score: f32,
}

#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResponse {
    pub query: String,
    pub total: u64,
    pub results: Vec<SearchResultItem>,
}

/// Full law record as returned by `GET /api/law/<id>`.
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LawDetail {
    pub id: i64,
    #[cfg_attr(feature = "json", serde(default))]
    pub title: Option<String>,
    #[cfg_attr(feature = "json", serde(default))]
    pub section: Option<String>,
    #[cfg_attr(feature = "json", serde(default))]
    pub act: Option<String>,
    #[cfg_attr(feature = "json", serde(default))]
    pub text: Option<String>,
    #[cfg_attr(feature = "json", serde(default))]
    pub summary_en: Option<String>,
}
