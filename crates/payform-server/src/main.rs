mod app;
mod config;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = Config::from_env()?;
    info!(
        pkg_dir = %config.server.pkg_dir,
        static_dir = %config.server.static_dir,
        "payform server starting"
    );

    if !std::path::Path::new(&config.server.pkg_dir).exists() {
        warn!(
            "wasm package directory {:?} not found; build it with `wasm-pack build crates/payform-wasm --target web --out-dir ../../{}`",
            config.server.pkg_dir, config.server.pkg_dir
        );
    }

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Listening on http://{}", addr);

    axum::serve(listener, app::router(&config))
        .await
        .context("Server error")?;

    Ok(())
}
