//! Main application entry point (web server binary).
//!
//! This is a thin wrapper around the `whois_lookup` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Starting the web server
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use whois_lookup::initialization::{init_logger_with, init_lookup_client};
use whois_lookup::server::{start_server, AppState};
use whois_lookup::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Load WHOIS_LOOKUP_* settings from a .env file if one exists
    let _ = dotenvy::dotenv();

    let config = Config::parse();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let client = init_lookup_client(&config).context("Failed to initialize lookup client")?;

    if let Err(e) = start_server(config.bind, AppState::new(client)).await {
        eprintln!("whois_lookup error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}
