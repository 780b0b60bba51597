use std::net::SocketAddr;

/// Runtime configuration, loaded once at startup and passed explicitly to
/// the pieces that need it. Nothing reads the environment after startup.
#[derive(Clone)]
pub struct AppConfig {
    /// API key for the hosted chat-completions provider. Required.
    pub groq_api_key: String,
    /// API key for the web-search provider. Optional; when unset the search
    /// request is sent without one.
    pub tavily_api_key: Option<String>,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Model name sent with every chat-completions request.
    pub llm_model: String,
    /// Result cap for the context search, clamped to the 1–10 range the
    /// settings panel advertises.
    pub search_max_results: u8,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("groq_api_key", &"[redacted]")
            .field(
                "tavily_api_key",
                &self.tavily_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("llm_model", &self.llm_model)
            .field("search_max_results", &self.search_max_results)
            .finish()
    }
}
