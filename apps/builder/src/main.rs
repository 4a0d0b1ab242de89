mod config;
mod editors;
mod errors;
mod export;
mod extract;
mod generation;
mod layout;
mod llm_client;
mod models;
mod pending;
mod preview;
mod routes;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::generation::TextGenerator;
use crate::layout::default_page_layout;
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
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

    info!("Starting Resume Builder v{}", env!("CARGO_PKG_VERSION"));

    // Text generation is optional: without a key every generate call fails fast.
    let generator = match &config.gemini_api_key {
        Some(api_key) => {
            let client = GeminiClient::new(
                api_key.clone(),
                config.gemini_model.clone(),
                config.generation_timeout,
            )?;
            info!("LLM client initialized (model: {})", client.model());
            TextGenerator::new(Arc::new(client))
        }
        None => {
            error!("GEMINI_API_KEY is not set; text generation is disabled");
            TextGenerator::unconfigured()
        }
    };

    let page_layout = default_page_layout();
    info!(
        "Export page: {}x{}pt",
        page_layout.width_pt, page_layout.height_pt
    );

    let state = AppState::new(generator, config.clone(), page_layout);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
