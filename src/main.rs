use anyhow::Result;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod models;
mod search;
mod server;

use config::ServerConfig;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("article_server=info,tower_http=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ServerConfig::parse();
    info!("Serving articles from {}", config.articles_dir.display());

    if let Err(e) = server::run(&config, shutdown_signal()).await {
        error!(error = %e, "Server encountered an error");
        std::process::exit(1);
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
