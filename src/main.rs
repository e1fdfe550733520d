use anyhow::Context;
use tracing_subscriber::EnvFilter;
use user_collection::{AppConfig, build_app, lifecycle::shutdown_signal};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("Starting user collection service...");

    let config = AppConfig::from_env().context("Failed to load configuration")?;
    let router = build_app(&config).context("Failed to register application modules")?;

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!(%addr, base_path = %config.base_path, "Server running");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            tracing::info!("Initiating graceful shutdown...");
        })
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}
