mod config;
mod errors;
mod handbook;
mod llm_client;
mod routes;
mod session;
mod state;
mod tasks;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::session::store::SessionStore;
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

    info!("Starting Handbook API v{}", env!("CARGO_PKG_VERSION"));

    if config.synthesis_enabled() {
        info!("API_KEY found, synthesis enabled");
    } else {
        warn!("API_KEY not set: handbook synthesis is disabled until it is configured");
    }

    let gemini = GeminiClient::spawn_new(config.gemini_base_url.clone()).await?;
    info!(
        "LLM client initialized (model: {}, endpoint: {})",
        llm_client::HANDBOOK_MODEL,
        config.gemini_base_url
    );

    let state = AppState {
        config: config.clone(),
        generator: Arc::new(gemini),
        sessions: SessionStore::default(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
