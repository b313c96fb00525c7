#[cfg(feature = "json")]
use serde::Deserialize;

/// Body of `POST /api/search`. Both fields are optional on the wire; a
/// missing query decodes as empty (the handler rejects it with 400).
#[cfg_attr(feature = "json", derive(Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    #[cfg_attr(feature = "json", serde(default))]
    pub query: String,
    #[cfg_attr(feature = "json", serde(default = "default_lang"))]
    pub lang: String,
}

pub fn default_lang() -> String {
    "en".to_string()
}

/// Body of `POST /admin/add` (JSON form; the urlencoded variant is decoded
/// into the same shape by the daemon).
#[cfg_attr(feature = "json", derive(Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddLawRequest {
    #[cfg_attr(feature = "json", serde(default))]
    pub password: String,
    #[cfg_attr(feature = "json", serde(default))]
    pub title: String,
    #[cfg_attr(feature = "json", serde(default))]
    pub section: Option<String>,
    #[cfg_attr(feature = "json", serde(default))]
    pub act: Option<String>,
    #[cfg_attr(feature = "json", serde(default))]
    pub text: Option<String>,
    #[cfg_attr(feature = "json", serde(default))]
    pub summary_en: Option<String>,
    #[cfg_attr(feature = "json", serde(default))]
    pub summary_hi: Option<String>,
    #[cfg_attr(feature = "json", serde(default))]
    pub summary_mr: Option<String>,
}
