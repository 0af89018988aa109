//! Configuration types.
//!
//! This module defines the enums and structs used for configuring an audit run,
//! independent of how they were obtained (CLI, tests, embedding code).

use std::path::PathBuf;
use std::time::Duration;

use clap::ValueEnum;

use crate::config::constants::{DEFAULT_TIMEOUT_SECS, DNS_PORT};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: status markers (`[*]`, `[+]`, `[-]`, `[!]`) with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Structured output formats for the aggregate report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON array of zone transfer results
    Json,
    /// One CSV row per disclosed record
    Csv,
}

impl OutputFormat {
    /// File extension used for generated output file names.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }
}

/// How records from successive AXFR envelopes are combined.
///
/// A transfer may span several DNS messages. `Accumulate` keeps every record
/// in arrival order. `KeepLast` only keeps the records of the final message,
/// which reproduces the output of older versions of this tool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum EnvelopeMerge {
    /// Union of all envelopes, in arrival order (default)
    #[default]
    Accumulate,
    /// Records of the last envelope only
    KeepLast,
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without going through the command line.
///
/// # Examples
///
/// ```no_run
/// use axfr_audit::Config;
///
/// let config = Config {
///     domains: vec!["example.com".to_string(), "example.org@ns1.example.org".to_string()],
///     nameserver: Some("9.9.9.9".to_string()),
///     verbose: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Domain tokens (`domain` or `domain@nameserver`)
    pub domains: Vec<String>,

    /// File with one domain token per line, appended after `domains`
    pub domains_file: Option<PathBuf>,

    /// Resolving DNS server used for NS lookups (system resolver if `None`)
    pub nameserver: Option<String>,

    /// Structured outputs to write once the run completes
    pub output_formats: Vec<OutputFormat>,

    /// JSON output path (generated from the current time if `None`)
    pub json_path: Option<PathBuf>,

    /// CSV output path (generated from the current time if `None`)
    pub csv_path: Option<PathBuf>,

    /// Log nameserver sets, each attempt and every disclosed record
    pub verbose: bool,

    /// Per-operation network timeout
    pub timeout: Duration,

    /// DNS port for NS lookups and transfers
    pub port: u16,

    /// How multi-message transfers are combined
    pub envelope_merge: EnvelopeMerge,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Config {
    /// Returns true if `format` was requested.
    pub fn wants(&self, format: OutputFormat) -> bool {
        self.output_formats.contains(&format)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domains: Vec::new(),
            domains_file: None,
            nameserver: None,
            output_formats: Vec::new(),
            json_path: None,
            csv_path: None,
            verbose: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            port: DNS_PORT,
            envelope_merge: EnvelopeMerge::Accumulate,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_log_level_ordering() {
        let error = log::LevelFilter::from(LogLevel::Error);
        let warn = log::LevelFilter::from(LogLevel::Warn);
        let info = log::LevelFilter::from(LogLevel::Info);
        let debug = log::LevelFilter::from(LogLevel::Debug);
        let trace = log::LevelFilter::from(LogLevel::Trace);

        assert!(error < warn);
        assert!(warn < info);
        assert!(info < debug);
        assert!(debug < trace);
    }

    #[test]
    fn test_output_format_extension() {
        assert_eq!(OutputFormat::Json.extension(), "json");
        assert_eq!(OutputFormat::Csv.extension(), "csv");
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.domains.is_empty());
        assert!(config.nameserver.is_none());
        assert!(config.output_formats.is_empty());
        assert!(!config.verbose);
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.port, 53);
        assert_eq!(config.envelope_merge, EnvelopeMerge::Accumulate);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_config_wants() {
        let config = Config {
            output_formats: vec![OutputFormat::Csv],
            ..Default::default()
        };
        assert!(config.wants(OutputFormat::Csv));
        assert!(!config.wants(OutputFormat::Json));
    }
}
