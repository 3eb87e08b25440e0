use std::sync::Arc;
use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use quill_api::{create_app, AppState, config::ProxyConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ProxyConfig::from_env();
    if let Err(e) = config.require_api_key() {
        warn!("{}; every request will be answered with 500", e);
    }

    let state = Arc::new(AppState::from_config(&config));
    let app = create_app(state, &config.proxy_path);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!("Listening on {} (proxy path {})", listener.local_addr()?, config.proxy_path);
    axum::serve(listener, app).await?;
    Ok(())
}
