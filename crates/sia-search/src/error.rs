use thiserror::Error;

/// Errors returned by the web-search client.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Transport failure or a non-2xx response status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Client construction failed or the API misbehaved in a way that has
    /// no more specific variant.
    #[error("search API error: {0}")]
    Api(String),

    /// The response body was not the expected JSON shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
