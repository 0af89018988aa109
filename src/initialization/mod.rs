//! Application initialization.
//!
//! This module provides the setup steps that run before any query is sent:
//! - Logger (plain status markers or JSON lines)
//! - Resolving server selection (explicit or system resolver)

mod logger;
mod resolver;

// Re-export public API
pub use logger::init_logger_with;
pub use resolver::{init_resolving_server, system_nameserver};
