//! Logger initialization.
//!
//! This module provides functions to initialize the logger with custom formatting.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::LevelFilter;

/// Initializes the logger with the specified level and format.
///
/// Configures `env_logger` with custom formatting. Supports both colored
/// plain text and JSON formats for structured logging.
///
/// `RUST_LOG` is read first, then `level` replaces its default directive and
/// the directives for this crate. The HTTP stack (`reqwest`, `hyper`,
/// `hyper_util`, `axum`) is pinned to `info`. Per-module `RUST_LOG` entries
/// therefore only take effect for other targets.
///
/// # Arguments
///
/// * `level` - Minimum log level to display (overrides `RUST_LOG` if set)
/// * `format` - Log format (Plain or Json)
///
/// # Returns
///
/// `Ok(())` if initialization succeeds, or an error if logger setup fails.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if logger initialization fails.
///
/// # Examples
///
/// ```bash
/// # Raise the level for this crate
/// whois_lookup --log-level debug
///
/// # CLI level wins over RUST_LOG for this crate
/// RUST_LOG=whois_lookup=debug whois_lookup --log-level info
///
/// # Per-module RUST_LOG still applies to targets not pinned here
/// RUST_LOG=h2=debug whois_lookup
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    colored::control::set_override(true);

    let mut builder = filtered_builder(level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{}",
                    json_log_line(
                        chrono::Utc::now().timestamp_millis(),
                        record.level(),
                        record.target(),
                        &record.args().to_string(),
                    )
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let level = record.level();
                let colored_level = match level {
                    log::Level::Error => level.as_str().red().bold(),
                    log::Level::Warn => level.as_str().yellow(),
                    log::Level::Info => level.as_str().green(),
                    log::Level::Debug => level.as_str().blue(),
                    log::Level::Trace => level.as_str().purple(),
                };

                writeln!(
                    buf,
                    "{} {:>5} {} {}",
                    chrono::Local::now().format("%H:%M:%S%.3f").to_string().dimmed(),
                    colored_level,
                    record.target().cyan(),
                    record.args()
                )
            });
        }
    }

    // Use try_init() instead of init() to avoid panicking if logger is already initialized
    // This is important for tests where logger may be initialized multiple times
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

/// Builds the filter set: `RUST_LOG` first, then the CLI level and the
/// pinned HTTP stack levels on top.
fn filtered_builder(level: LevelFilter) -> env_logger::Builder {
    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);
    builder.filter_module("reqwest", LevelFilter::Info);
    builder.filter_module("hyper", LevelFilter::Info);
    builder.filter_module("hyper_util", LevelFilter::Info);
    builder.filter_module("axum", LevelFilter::Info);
    builder.filter_module("whois_lookup", level);
    builder
}

/// Renders one structured log line.
fn json_log_line(ts_millis: i64, level: log::Level, target: &str, message: &str) -> String {
    serde_json::json!({
        "ts": ts_millis,
        "level": level.as_str(),
        "target": target,
        "msg": message,
    })
    .to_string()
}
