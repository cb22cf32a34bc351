mod config;
mod export;
mod github;
mod http;
mod logger;
mod pull_request;
mod report;

use anyhow::{Context, Result};
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load().context("Cannot load config")?;
    logger::init(config.log_level)?;

    log::info!("Starting");
    let exported = export::run(&config)
        .await
        .context("Cannot export the merged pull requests")?;

    log::info!(
        "Exported {} merged pull requests to {}",
        exported,
        config.output.display()
    );

    Ok(())
}
