//! HTTP routes and shared application state.

mod home;
mod insights;
mod settings;

use std::sync::Arc;

use askama::Template;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use sia_core::AppConfig;
use sia_llm::LlmClient;
use sia_search::SearchClient;
use tower_http::trace::TraceLayer;
use tracing::error;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub search: Arc<SearchClient>,
    pub llm: Arc<LlmClient>,
}

impl AppState {
    pub fn new(config: AppConfig, search: SearchClient, llm: LlmClient) -> Self {
        Self {
            config: Arc::new(config),
            search: Arc::new(search),
            llm: Arc::new(llm),
        }
    }
}

/// Request body cap. Raised from axum's 2 MB default so a full-sized
/// overview sheet upload fits; the bytes are drained either way.
const MAX_BODY_BYTES: usize = 200 * 1024 * 1024;

/// Builds the application router.
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(home::index))
        .route("/insights", get(insights::show_form).post(insights::submit))
        .route("/insights/download", post(insights::download))
        .route("/settings", get(settings::show))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Renders a template into a response, mapping render failures to a 500.
pub(crate) fn render_page<T: Template>(template: &T) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!(error = %e, "template render failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
