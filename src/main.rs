//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `axfr_audit` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing summary and exit status
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use axfr_audit::config::Opt;
use axfr_audit::initialization::init_logger_with;
use axfr_audit::{run_audit, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from(Opt::parse());

    init_logger_with(config.log_level.into(), config.log_format)
        .context("Failed to initialize logger")?;

    match run_audit(config).await {
        Ok(report) => {
            log::info!(
                "Finished {} attempt{} ({} succeeded, {} failed) in {:.1}s",
                report.attempts,
                if report.attempts == 1 { "" } else { "s" },
                report.successful,
                report.failed,
                report.elapsed_seconds
            );
            Ok(())
        }
        Err(e) => {
            log::error!("{:#}", e);
            process::exit(1);
        }
    }
}
