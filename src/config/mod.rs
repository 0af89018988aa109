//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (ports, timeouts, output naming)
//! - The library `Config` struct and its option enums
//! - CLI option parsing (`Opt`) and its conversion into `Config`

mod cli;
mod constants;
mod types;

// Re-export all constants
pub use cli::Opt;
pub use constants::*;
pub use types::{Config, EnvelopeMerge, LogFormat, LogLevel, OutputFormat};
