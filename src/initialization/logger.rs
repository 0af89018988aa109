//! Logger initialization.
//!
//! This module provides the logger setup with the status-marker format used
//! for console feedback.

use std::io::Write;

use crate::config::{LogFormat, SUCCESS_TARGET};
use crate::error_handling::InitializationError;
use colored::*;
use log::{Level, LevelFilter, Record};

/// Initializes the logger with the specified level and format.
///
/// Configures `env_logger` with custom formatting. The plain format prefixes
/// every line with a status marker:
///
/// - `[*]` informational lines
/// - `[+]` successful transfers (the `axfr_audit::success` target)
/// - `[-]` unsuccessful attempts (warnings)
/// - `[!]` errors
/// - `[~]` debug and trace output
///
/// The logger reads from the `RUST_LOG` environment variable by default, but
/// the provided `level` parameter will override it.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Per-module filtering via RUST_LOG
/// RUST_LOG=axfr_audit=debug axfr_audit -d example.com
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    // Read from RUST_LOG environment variable first, then override with CLI arg
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    builder.filter_module("hickory_proto", LevelFilter::Error);
    builder.filter_module("hickory_resolver", LevelFilter::Warn);
    builder.filter_module("axfr_audit", level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
                    chrono::Utc::now().timestamp_millis(),
                    record.level(),
                    record.target(),
                    serde_json::to_string(&record.args().to_string())
                        .unwrap_or_else(|_| "\"\"".into())
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| writeln!(buf, "{} {}", marker(record), record.args()));
        }
    }

    // try_init() returns an error instead of panicking when a logger exists,
    // which happens when tests initialize it more than once
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

fn marker(record: &Record<'_>) -> ColoredString {
    match record.level() {
        Level::Error => "[!]".red(),
        Level::Warn => "[-]".red(),
        Level::Info if record.target() == SUCCESS_TARGET => "[+]".green(),
        Level::Info => "[*]".blue(),
        Level::Debug | Level::Trace => "[~]".dimmed(),
    }
}
