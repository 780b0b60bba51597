use thiserror::Error;

/// Errors returned by the chat-completions client.
#[derive(Debug, Error)]
pub enum LlmError {
    /// Transport failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response. The message comes from the error payload when the
    /// body carries one, otherwise the bare HTTP status.
    #[error("completion API error: {0}")]
    Api(String),

    /// The response body was not the expected JSON shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The response parsed but carried no message content.
    #[error("completion response contained no message content")]
    NoContent,
}
