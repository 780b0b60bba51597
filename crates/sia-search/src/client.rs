//! HTTP client for the web-search API.

use reqwest::{Client, Url};
use tracing::debug;

use crate::error::SearchError;
use crate::types::{SearchContext, SearchRequest, SearchResponse};

const DEFAULT_BASE_URL: &str = "https://api.tavily.com/";

/// Client for the web-search `/search` endpoint.
///
/// Manages the HTTP client, the optional API key, and the endpoint URL. Use
/// [`SearchClient::new`] for production or [`SearchClient::with_base_url`]
/// to point at a mock server in tests.
pub struct SearchClient {
    client: Client,
    api_key: Option<String>,
    search_url: Url,
}

impl SearchClient {
    /// Creates a new client pointed at the production search API. The API
    /// key is optional; when `None` the requests carry no key at all.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: Option<&str>) -> Result<Self, SearchError> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with
    /// wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`SearchError::Api`] if `base_url` is not
    /// a valid URL.
    pub fn with_base_url(api_key: Option<&str>, base_url: &str) -> Result<Self, SearchError> {
        // No request timeout: a slow search holds the submission open
        // rather than failing it, and the client defaults apply.
        let client = Client::builder()
            .user_agent("sia/0.1 (sales-insights)")
            .build()?;

        // Normalise: exactly one trailing slash so join() appends the
        // endpoint instead of replacing the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let search_url = Url::parse(&normalised)
            .and_then(|base| base.join("search"))
            .map_err(|e| SearchError::Api(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.map(ToOwned::to_owned),
            search_url,
        })
    }

    /// Runs one search and resolves the response at the boundary: hits plus
    /// a concrete references list, empty when the API offered none.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] on transport failure or a non-2xx
    /// status, and [`SearchError::Decode`] when the body is not the
    /// expected shape.
    pub async fn search(&self, query: &str, max_results: u8) -> Result<SearchContext, SearchError> {
        let request = SearchRequest {
            api_key: self.api_key.as_deref(),
            query,
            max_results,
        };

        let response = self
            .client
            .post(self.search_url.clone())
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        let parsed: SearchResponse =
            serde_json::from_str(&body).map_err(|e| SearchError::Decode {
                context: format!("search '{query}'"),
                source: e,
            })?;

        let context = SearchContext {
            references: parsed.references.unwrap_or_default(),
            results: parsed.results,
        };
        debug!(
            results = context.results.len(),
            references = context.references.len(),
            "search completed"
        );
        Ok(context)
    }
}
