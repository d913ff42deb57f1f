//! Shopfront Service - read-only catalog API
//!
//! This is the main entry point for the shopfront service.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shopfront_service::{create_router, AppState, ServiceConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,shopfront=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Shopfront Service");

    // Load configuration from environment
    let config = ServiceConfig::from_env();

    tracing::info!(
        listen_addr = %config.listen_addr,
        service = %config.service_name,
        environment = %config.environment,
        seed_path = ?config.seed_path,
        cors_origins = ?config.cors_origins,
        "Service configuration loaded"
    );

    // Build the immutable store and app state
    let state = AppState::from_config(config.clone())?;

    // Create the router
    let app = create_router(state);
    tracing::info!("Router configured with all API endpoints");

    // Start HTTP server
    tracing::info!(listen_addr = %config.listen_addr, "Starting HTTP server");
    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
