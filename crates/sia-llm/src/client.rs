//! HTTP client for the chat-completions API.

use reqwest::{Client, StatusCode, Url};
use tracing::debug;

use crate::error::LlmError;
use crate::types::{ChatMessage, ChatRequest, ChatResponse};

const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1/";

/// Client for the `/chat/completions` endpoint.
///
/// Manages the HTTP client, API key, model name, and endpoint URL. Use
/// [`LlmClient::new`] for production or [`LlmClient::with_base_url`] to
/// point at a mock server in tests.
pub struct LlmClient {
    client: Client,
    api_key: String,
    model: String,
    completions_url: Url,
}

impl LlmClient {
    /// Creates a new client pointed at the production completions API.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, model: &str) -> Result<Self, LlmError> {
        Self::with_base_url(api_key, model, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with
    /// wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`LlmError::Api`] if `base_url` is not a
    /// valid URL.
    pub fn with_base_url(api_key: &str, model: &str, base_url: &str) -> Result<Self, LlmError> {
        // No request timeout: completions can outlast any fixed cutoff and
        // the flow has no cancellation, so the client defaults apply.
        let client = Client::builder()
            .user_agent("sia/0.1 (sales-insights)")
            .build()?;

        // Normalise: exactly one trailing slash so join() appends the
        // endpoint instead of replacing the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let completions_url = Url::parse(&normalised)
            .and_then(|base| base.join("chat/completions"))
            .map_err(|e| LlmError::Api(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            model: model.to_owned(),
            completions_url,
        })
    }

    /// Sends the prompt as a single system message and returns the first
    /// choice's content verbatim. An empty string is a valid completion.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Api`] on a non-2xx status, [`LlmError::Decode`]
    /// when the body is not the expected shape, and [`LlmError::NoContent`]
    /// when the response carries no message content at all.
    pub async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "system",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(self.completions_url.clone())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(LlmError::Api(api_error_message(status, &body)));
        }

        let parsed: ChatResponse = serde_json::from_str(&body).map_err(|e| LlmError::Decode {
            context: "chat completion".to_string(),
            source: e,
        })?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(LlmError::NoContent)?;

        debug!(model = %self.model, chars = content.len(), "completion received");
        Ok(content)
    }
}

/// Pulls `error.message` out of an error payload, falling back to the bare
/// HTTP status when the body is not the expected shape.
fn api_error_message(status: StatusCode, body: &str) -> String {
    let parsed: Option<serde_json::Value> = serde_json::from_str(body).ok();
    parsed
        .as_ref()
        .and_then(|value| value.get("error"))
        .and_then(|error| error.get("message"))
        .and_then(serde_json::Value::as_str)
        .map_or_else(|| format!("HTTP {status}"), ToOwned::to_owned)
}
