mod config;
mod diff;
mod errors;
mod llm_client;
mod models;
mod optimize;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::{OpenAiClient, TextGenerator, UnconfiguredGenerator};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on an unparseable PORT or timeout)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting résumé optimizer v{}", env!("CARGO_PKG_VERSION"));

    let generator = build_generator(&config)?;

    let state = AppState {
        generator,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("AI résumé optimizer server listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Picks the generator once at startup. Without a key every optimize request
/// fails with a configuration error and no network call is made.
fn build_generator(config: &Config) -> Result<Arc<dyn TextGenerator>> {
    match &config.openai_api_key {
        Some(api_key) => {
            let client = OpenAiClient::new(
                api_key.clone(),
                config.openai_base_url.clone(),
                config.openai_model.clone(),
                Duration::from_secs(config.openai_timeout_secs),
            )?;
            info!(
                "LLM client initialized (model: {}, timeout: {}s)",
                config.openai_model, config.openai_timeout_secs
            );
            Ok(Arc::new(client))
        }
        None => {
            warn!("OPENAI_API_KEY is not set. /api/optimize will return 500 until it is configured.");
            Ok(Arc::new(UnconfiguredGenerator))
        }
    }
}
