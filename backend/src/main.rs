//! Krishi Vaani advisory server binary

use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use krishi_advisory_backend::{create_app, AppError, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load().map_err(|e| AppError::Configuration(e.to_string()))?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "advisory_server=debug,krishi_advisory_backend=debug,shared=info,tower_http=debug".into()
    });
    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting Krishi Vaani Advisory Server");
    tracing::info!("Environment: {}", config.environment);
    tracing::info!(
        "Weather cache TTL: {}s, default location: {}",
        config.weather.cache_ttl_seconds,
        config.weather.default_location
    );

    let host: std::net::IpAddr = config
        .server
        .host
        .parse()
        .map_err(|_| AppError::Configuration(format!("invalid server.host: {}", config.server.host)))?;
    let addr = SocketAddr::new(host, config.server.port);

    // Create application state
    let state = AppState::new(config)?;

    // Build application
    let app = create_app(state);

    // Start server
    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
