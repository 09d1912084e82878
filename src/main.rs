//! HTTP server for the detailing payroll engine.

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use detailing_payroll::api::{AppState, create_router};
use detailing_payroll::config::ConfigLoader;

const DEFAULT_CONFIG_DIR: &str = "./config/detail-lab";
const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config_dir =
        std::env::var("DETAIL_LAB_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let listen_addr =
        std::env::var("LISTEN_ADDR").unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string());

    let config = ConfigLoader::load(&config_dir)
        .with_context(|| format!("failed to load shop configuration from {config_dir}"))?;
    info!(
        shop = %config.shop().name,
        method = config.policy().method_name(),
        employees = config.employees().len(),
        "Configuration loaded"
    );

    let app = create_router(AppState::new(config));
    let listener = TcpListener::bind(&listen_addr)
        .await
        .with_context(|| format!("failed to bind {listen_addr}"))?;
    info!(addr = %listen_addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
