//! Manna Bridge chatbot service
//!
//! Rule-based chat widget backend for the Manna Bridge missionary support
//! site: keyword intent routing, per-user conversation state and the contact
//! form endpoint.

mod api;
mod config;
mod contact;
mod dialogue;

use api::{create_router, AppState};
use config::{LogFormat, ServerConfig};
use dialogue::DialogueEngine;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env();

    // Initialize logging
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "manna_bridge=info,tower_http=debug".into());
    let registry = tracing_subscriber::registry().with(filter);
    match config.log_format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_span_list(false),
            )
            .init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }

    tracing::info!(?config, "Configuration loaded");

    // Conversation state lives only as long as the process
    let engine = DialogueEngine::in_memory();
    let state = AppState::new(engine);

    // The widget is embedded in a separately served site
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let compression = CompressionLayer::new()
        .gzip(true)
        .br(true)
        .deflate(true)
        .zstd(true);

    let app = create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(compression);

    // Start server
    let addr = config.addr();
    tracing::info!("Manna Bridge chatbot listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
