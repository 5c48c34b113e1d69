use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use hrdesk::api::{self, RolesApi};
use hrdesk::config::ServerConfig;
use hrdesk::{logging, mock, Collection};

const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config()?;
    logging::init(&config.logging)?;

    let roles = mock::generate(config.api.mock_size);
    tracing::info!(roles = roles.len(), "generated mock roles");

    let api = Arc::new(
        RolesApi::new(Collection::new(roles))
            .with_latency(config.api.latency())
            .with_scopes(config.api.scopes.clone()),
    );

    let addr = config.bind_addr();
    api::serve_with_shutdown(api, &addr, shutdown_signal())
        .await
        .with_context(|| format!("server on {} failed", addr))?;

    tracing::info!("server stopped");
    Ok(())
}

fn load_config() -> anyhow::Result<ServerConfig> {
    let path = std::env::var("HRDESK_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    if Path::new(&path).exists() {
        return ServerConfig::from_file(&path)
            .with_context(|| format!("failed to load config from {}", path));
    }

    let mut config = ServerConfig::default();
    config.apply_env_overrides()?;
    config.validate()?;
    Ok(config)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
