use askama::Template;
use axum::extract::State;
use axum::response::Response;

use super::{render_page, AppState};

#[derive(Template)]
#[template(path = "settings.html")]
struct SettingsTemplate {
    active_page: &'static str,
    api_key: String,
    max_results: u8,
}

/// Display-only preferences panel; the controls mirror the loaded
/// configuration and changing them has no effect on the running server.
pub(crate) async fn show(State(state): State<AppState>) -> Response {
    render_page(&SettingsTemplate {
        active_page: "settings",
        api_key: state.config.groq_api_key.clone(),
        max_results: state.config.search_max_results,
    })
}
