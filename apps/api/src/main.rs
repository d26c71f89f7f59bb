mod config;
mod errors;
mod llm_client;
mod narration;
mod recommendation;
mod routes;
mod speech;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::recommendation::generator::LlmRecommender;
use crate::routes::build_router;
use crate::speech::SpeechClient;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first; a missing key is reported before anything starts
    let config = Config::from_env().context("Invalid configuration")?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Kampus API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = LlmClient::new(config.openai_api_key.clone(), config.openai_base_url.clone())
        .context("Failed to build LLM client")?;
    if config.verify_credentials_on_startup {
        llm.verify_credentials()
            .await
            .context("LLM credentials check failed; set OPENAI_API_KEY to a valid key")?;
    }
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Initialize speech client on the same connection pool
    let synthesizer = SpeechClient::new(
        llm.http(),
        config.openai_api_key.clone(),
        config.openai_base_url.clone(),
    );
    info!(
        "Speech client initialized (model: {}, default voice: {})",
        speech::client::SPEECH_MODEL,
        config.default_voice
    );

    // Build app state
    let state = AppState {
        config: config.clone(),
        recommender: Arc::new(LlmRecommender::new(llm)),
        synthesizer: Arc::new(synthesizer),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
