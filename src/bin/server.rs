use anyhow::Context;
use panorama::core::config::AppConfig;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = AppConfig::from_env().context("Invalid configuration")?;
    let addr = format!("0.0.0.0:{}", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Server listening on http://localhost:{}", config.port);

    axum::serve(listener, panorama::api::server::router(config))
        .await
        .context("Server error")?;

    Ok(())
}
