//! axfr_audit library: zone transfer auditing
//!
//! This library enumerates the authoritative nameservers of a list of domains
//! and attempts a DNS zone transfer (AXFR) against each of them, collecting
//! every record a nameserver is willing to disclose.
//!
//! # Example
//!
//! ```no_run
//! use axfr_audit::{Config, OutputFormat, run_audit};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     domains: vec!["example.com".to_string()],
//!     nameserver: Some("9.9.9.9".to_string()),
//!     output_formats: vec![OutputFormat::Json],
//!     ..Default::default()
//! };
//!
//! let report = run_audit(config).await?;
//! println!("{} attempts, {} open zone transfers", report.attempts, report.successful);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

pub mod config;
pub mod dns;
pub mod error_handling;
pub mod export;
pub mod initialization;
mod input;
mod models;
pub mod scan;
mod target;

// Re-export public API
pub use config::{Config, EnvelopeMerge, LogFormat, LogLevel, OutputFormat};
pub use input::gather_domains;
pub use models::{NormalizedRecord, ZoneTransferResult};
pub use run::{run_audit, AuditReport};
pub use scan::{NameserverLookup, ScanSummary, Scanner, ZoneTransfer};
pub use target::DomainTarget;

// Internal run module (wires configuration, scanner and exporters together)
mod run {
    use anyhow::{Context, Result};
    use chrono::Local;
    use log::info;

    use crate::config::Config;
    use crate::dns::{NameserverResolver, ZoneTransferExecutor};
    use crate::export::{OutputTargets, ReportFiles};
    use crate::initialization::init_resolving_server;
    use crate::input::gather_domains;
    use crate::models::ZoneTransferResult;
    use crate::scan::Scanner;

    /// Results of an audit run.
    #[derive(Debug, Clone)]
    pub struct AuditReport {
        /// One result per attempted `(domain, nameserver)` pair, in attempt order
        pub results: Vec<ZoneTransferResult>,
        /// Number of transfer attempts made
        pub attempts: usize,
        /// Attempts that returned a complete zone
        pub successful: usize,
        /// Attempts that failed
        pub failed: usize,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs a zone transfer audit with the provided configuration.
    ///
    /// Domains and nameservers are processed one at a time in input order.
    /// Requested report files are created before the first query and written
    /// once every attempt has finished.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - No domains were supplied or the domain file cannot be read
    /// - No resolving server was given and none is configured on the system
    /// - An output file cannot be created or written
    ///
    /// Failed lookups and transfers are not errors; they are logged and
    /// reflected in the report.
    pub async fn run_audit(config: Config) -> Result<AuditReport> {
        let domains = gather_domains(&config).context("Invalid domain input")?;
        let resolving_server =
            init_resolving_server(&config).context("No resolving nameserver available")?;
        let resolver = NameserverResolver::new(resolving_server, config.port, config.timeout);
        info!("Using nameserver: {}", resolver.server());

        let files = ReportFiles::create(&OutputTargets::from_config(&config, Local::now()))?;

        info!(
            "Attempting zone transfer for {} domains",
            domains.iter().filter(|d| !d.trim().is_empty()).count()
        );

        let start_time = std::time::Instant::now();
        let scanner = Scanner::new(
            resolver,
            ZoneTransferExecutor::new(config.port, config.timeout, config.envelope_merge),
            config.verbose,
        );
        let summary = scanner.run(&domains).await;

        files.write(&summary.results)?;

        Ok(AuditReport {
            attempts: summary.results.len(),
            successful: summary.successful,
            failed: summary.failed,
            results: summary.results,
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }
}
