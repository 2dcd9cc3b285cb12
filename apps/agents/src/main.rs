mod cache;
mod chat;
mod config;
mod errors;
mod interviewer;
mod jobs_client;
mod knowledge;
mod lenient;
mod llm_client;
mod resume_analyzer;
mod resume_generator;
mod roadmap;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting career agents v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "LLM client: model {} at {} ({} retries, {}ms backoff)",
        llm_client::MODEL,
        config.asi1_api_url,
        config.llm_max_retries,
        config.llm_retry_delay.as_millis()
    );
    if config.jsearch_api_key.is_none() {
        warn!("JSEARCH_API_KEY not set; resume analyses will carry no job recommendations");
    }

    let state = AppState::from_config(&config)?;

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
