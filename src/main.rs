//! Promo Admin - marketing content API
//!
//! Serves the mobile app's promotional banners and splash screen
//! configuration, and relays website contact-form submissions into the CRM.

use std::sync::Arc;

use sqlx::sqlite::SqlitePool;
use tokio::net::TcpListener;

mod api;
mod config;
mod crm;
mod domain;
mod error;
mod logging;
mod storage;

use crate::api::build_router;
use crate::config::Config;
use crate::crm::{ContactForwarder, PipedriveClient, RecaptchaVerifier};
use crate::storage::PromoRepository;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database repository.
    pub repository: PromoRepository,
    /// Contact-form CRM forwarder.
    pub forwarder: ContactForwarder,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file (if present)
    if let Err(e) = dotenvy::dotenv() {
        // Missing .env is expected in production
        eprintln!("Note: No .env file loaded ({e})");
    }

    // Initialize logging
    logging::init();

    tracing::info!("Starting Promo Admin v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = Config::load().map_err(|e| {
        tracing::error!(error = %e, "Failed to load configuration");
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    tracing::info!(
        host = %config.server.host,
        port = %config.server.port,
        database = %config.database.url,
        crm_base_url = %config.crm.base_url,
        "Configuration loaded"
    );

    if config.captcha.secret_key.is_empty() {
        tracing::warn!("CAPTCHA secret key is empty - all tokens will be rejected upstream");
    }

    // Connect to database
    let pool = SqlitePool::connect(&config.database.url)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to connect to database");
            anyhow::anyhow!("Database connection error: {}", e)
        })?;

    // Initialize repository and schema
    let repository = PromoRepository::new(pool);
    repository.init_schema().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to initialize database schema");
        anyhow::anyhow!("Schema initialization error: {}", e)
    })?;

    tracing::info!("Database connected and schema initialized");

    // Build the outbound clients and the contact forwarder
    let captcha = RecaptchaVerifier::new(&config.captcha)
        .map_err(|e| anyhow::anyhow!("CAPTCHA client error: {}", e))?;
    let pipedrive = PipedriveClient::new(&config.crm)
        .map_err(|e| anyhow::anyhow!("CRM client error: {}", e))?;
    let forwarder = ContactForwarder::new(Arc::new(captcha), Arc::new(pipedrive));

    // Build application state
    let state = AppState {
        repository,
        forwarder,
    };

    // Build router
    let app = build_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!(address = %addr, "Server listening");
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
