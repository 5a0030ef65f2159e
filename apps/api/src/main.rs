mod config;
mod errors;
mod evaluation;
mod extraction;
mod llm_client;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::{LlmClient, LlmClientConfig};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CV Evaluator API v{}", env!("CARGO_PKG_VERSION"));

    // Remote evaluation is optional; without a key every request is rule-based.
    let llm = match &config.openrouter_api_key {
        Some(api_key) => {
            let client = LlmClient::new(LlmClientConfig {
                api_key: api_key.clone(),
                base_url: config.openrouter_base_url.clone(),
                referer: config.openrouter_referer.clone(),
                app_title: config.openrouter_app_title.clone(),
            })
            .context("Failed to build HTTP client")?;
            info!("LLM client initialized (default model: {})", config.openrouter_model);
            Some(client)
        }
        None => {
            info!("OPENROUTER_API_KEY not set, using rule-based evaluation only");
            None
        }
    };

    let state = AppState::new(config.clone(), llm);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
