//! Error handling.
//!
//! This module provides the error types of the audit pipeline:
//! - **Fatal**: configuration and initialization errors that stop the run
//!   before any query is sent
//! - **Per-attempt**: nameserver lookup and zone transfer errors, which are
//!   logged and never abort processing of other domains or nameservers

mod types;

// Re-export public API
pub use types::{ConfigError, InitializationError, ResolveError, TransferError};

#[cfg(test)]
mod tests {
    use super::*;
    use hickory_resolver::proto::op::ResponseCode;
    use std::time::Duration;

    #[test]
    fn test_setup_errors_are_distinguished() {
        assert!(TransferError::Setup("connection refused".into()).is_setup());
        assert!(!TransferError::Refused(ResponseCode::Refused).is_setup());
        assert!(!TransferError::Stream("closed".into()).is_setup());
        assert!(!TransferError::Timeout(Duration::from_secs(1)).is_setup());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            TransferError::Timeout(Duration::from_secs(10)).to_string(),
            "transfer timed out after 10s"
        );
        assert_eq!(
            ResolveError::Query("timed out".into()).to_string(),
            "query failed: timed out"
        );
        assert_eq!(
            ConfigError::NoResolver.to_string(),
            "Failed to get system nameserver, specify with -n"
        );
    }

    #[test]
    fn test_response_error_mentions_code() {
        let message = ResolveError::Response(ResponseCode::NXDomain).to_string();
        assert!(message.starts_with("server responded with"));
    }
}
