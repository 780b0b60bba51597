//! Wire types for the search API.

use serde::{Deserialize, Serialize};

/// POST body for the `/search` endpoint.
#[derive(Debug, Serialize)]
pub(crate) struct SearchRequest<'a> {
    /// Account key, sent in the body as the API expects. Omitted entirely
    /// when the deployment runs without one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<&'a str>,
    pub query: &'a str,
    pub max_results: u8,
}

/// Raw response body as it arrives off the wire.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchResult>,
    /// Not every response carries references; the client resolves the
    /// absent case to an empty list.
    #[serde(default)]
    pub references: Option<Vec<String>>,
}

/// A single search hit.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub content: String,
}

/// Search output after resolution at the client boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchContext {
    pub results: Vec<SearchResult>,
    /// Citation URLs to surface to the user. Empty when the API offered
    /// none, so callers never branch on an `Option`.
    pub references: Vec<String>,
}
