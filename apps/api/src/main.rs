mod config;
mod errors;
mod llm_client;
mod matching;
mod profiles;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{AppVariant, Config};
use crate::llm_client::{CompletionProvider, LlmClient};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting Matchify API v{} ({:?} variant)",
        env!("CARGO_PKG_VERSION"),
        config.variant
    );

    // Only the student variant talks to the completion service
    let llm: Option<Arc<dyn CompletionProvider>> = match (config.variant, &config.openai_api_key) {
        (AppVariant::Student, Some(key)) => {
            let client: Arc<dyn CompletionProvider> = Arc::new(
                LlmClient::new(key.clone(), config.completion_api_url.clone())
                    .context("Failed to build completion HTTP client")?,
            );
            info!(
                "LLM client initialized (model: {}, endpoint: {})",
                llm_client::MODEL,
                config.completion_api_url
            );
            Some(client)
        }
        _ => None,
    };

    if config.seed_demo_profiles {
        info!("Seeding demo student and mentor profiles");
    }
    if config.cascade_match_deletes {
        info!("Profile deletes cascade to matches");
    }

    let state = AppState::new(config.clone(), llm);

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
