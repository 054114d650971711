use anyhow::{Context, Result};
use infohub::http;
use infohub::{InfoHubConfig, InfoHubServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env for local dev (if present)
    let dotenv_loaded = dotenvy::dotenv().is_ok();

    let config = match std::env::var("INFOHUB_CONFIG") {
        Ok(path) => InfoHubConfig::from_file(&path)
            .and_then(InfoHubConfig::with_env_overrides)
            .with_context(|| format!("failed to load configuration from {}", path))?,
        Err(_) => InfoHubConfig::from_env().context("failed to load configuration")?,
    };

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("infohub={}", config.server.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if dotenv_loaded {
        tracing::info!("Loaded .env");
    }

    tracing::info!("Starting InfoHub server");
    tracing::info!(
        "Configuration loaded: host={}, port={}, weather_key={}, currency_key={}",
        config.server.host,
        config.server.port,
        config.apis.openweather_api_key.is_some(),
        config.apis.exchangerate_api_key.is_some()
    );

    let server = InfoHubServer::new(config).context("failed to build adapters")?;

    let endpoints = server.endpoints();
    tracing::info!("Available endpoints: {}", endpoints.len());
    for endpoint in endpoints {
        tracing::info!("  - {}: {}", endpoint.path, endpoint.description);
    }

    http::run_http_server(server).await?;

    tracing::info!("InfoHub server shutting down");
    Ok(())
}
