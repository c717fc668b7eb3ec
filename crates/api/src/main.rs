use anyhow::{Context, Result};
use tracing::info;

use event_registration_api::{app, config, middleware};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Load configuration
    let config = config::Config::load()?;

    // Initialize logging
    middleware::logging::init_logging(&config.logging)
        .context("Failed to initialize logging")?;

    info!(
        "Starting Event Registration API v{}",
        env!("CARGO_PKG_VERSION")
    );

    middleware::init_metrics().context("Failed to install Prometheus recorder")?;

    // Create database pool
    let pool = persistence::db::create_pool(&config.persistence_database_config()).await?;

    // Run migrations
    info!("Running database migrations...");
    persistence::db::run_migrations(&pool).await?;
    info!("Migrations completed");

    // Build application
    let addr = config.socket_addr()?;
    let app = app::create_app(config, pool)?;

    // Start server
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
