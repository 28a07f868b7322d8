use clap::Parser;
use std::io;
use std::path::Path;

mod api;
mod cli;
mod core;
mod generators;
mod models;

use crate::cli::Args;
use crate::core::config::Config;

#[tokio::main]
async fn main() -> Result<(), io::Error> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let mut config = Config::load();

    if let Some(address) = args.address {
        config.web_address = address;
    }
    if let Some(port) = args.port {
        config.web_port = port;
    }

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .format_target(true)
        .parse_default_env()
        .init();

    log::info!(
        "🔐 Starting passforge on {}:{}",
        config.web_address,
        config.web_port
    );

    api::start_server(config).await
}
