//! Error type definitions.
//!
//! This module defines the error types used throughout the application. Lookup
//! and transfer errors are per-attempt and never abort a run; configuration and
//! initialization errors are fatal and are raised before any network traffic.

use std::path::PathBuf;
use std::time::Duration;

use hickory_resolver::proto::op::ResponseCode;
use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Fatal configuration problems detected before the run starts.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Neither `--domains` nor `--file` produced a usable domain token.
    #[error("No domains specified")]
    NoDomains,

    /// No `--nameserver` was given and the system resolver has none configured.
    #[error("Failed to get system nameserver, specify with -n")]
    NoResolver,

    /// The domain list file could not be read.
    #[error("Failed to read domains file {path}: {source}")]
    DomainsFile {
        /// Path that was given on the command line
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Nameserver discovery failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The exchange with the resolving server failed (timeout, refused
    /// connection, malformed or mismatched response).
    #[error("query failed: {0}")]
    Query(String),

    /// The resolving server answered with a non-success response code.
    #[error("server responded with {0}")]
    Response(ResponseCode),
}

/// Zone transfer failures.
///
/// `Setup` means the transfer never started. The other variants are stream
/// errors: the server rejected the transfer or the stream broke off.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransferError {
    /// The TCP connection to the nameserver could not be established or the
    /// request could not be sent.
    #[error("transfer setup failed: {0}")]
    Setup(String),

    /// The server answered an envelope with a non-success response code.
    #[error("transfer refused: {0}")]
    Refused(ResponseCode),

    /// The envelope stream was malformed or ended early.
    #[error("transfer stream failed: {0}")]
    Stream(String),

    /// No envelope arrived within the configured timeout.
    #[error("transfer timed out after {}s", .0.as_secs())]
    Timeout(Duration),
}

impl TransferError {
    /// Returns true if the transfer never got past connection setup.
    pub fn is_setup(&self) -> bool {
        matches!(self, TransferError::Setup(_))
    }
}
