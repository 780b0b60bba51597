//! Sales Insights Assistant server.
//!
//! Serves the submission form, runs the search plus completion flow for
//! each submission, and renders the generated insight back to the user.

mod flow;
mod routes;

use sia_core::load_app_config;
use sia_llm::LlmClient;
use sia_search::SearchClient;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::routes::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let search = SearchClient::new(config.tavily_api_key.as_deref())?;
    let llm = LlmClient::new(&config.groq_api_key, &config.llm_model)?;

    let bind_addr = config.bind_addr;
    let app = routes::build_app(AppState::new(config, search, llm));

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    info!(%bind_addr, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("received shutdown signal, starting graceful shutdown");
}
