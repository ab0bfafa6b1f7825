//! Enrichment directory response types.
//!
//! Models the JSON returned by the business search endpoint. Unlike the
//! places directory there is no status envelope; errors arrive as non-2xx
//! responses with an `{"error": {...}}` body.

use serde::Deserialize;

/// Response from the `businesses/search` endpoint.
#[derive(Debug, Deserialize)]
pub struct BusinessSearchResponse {
    #[serde(default)]
    pub businesses: Vec<Business>,
    #[serde(default)]
    pub total: i64,
}

/// One business listing. Most detail fields are optional on the wire;
/// listings the directory knows little about omit them.
#[derive(Debug, Deserialize)]
pub struct Business {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub rating: Option<f64>,
    /// Dollar-sign price string, `$` through `$$$$`.
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub display_phone: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// A category tag attached to a business.
#[derive(Debug, Deserialize)]
pub struct Category {
    pub alias: String,
    pub title: String,
}
