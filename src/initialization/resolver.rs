//! Resolving server selection.
//!
//! NS lookups go to the server given with `--nameserver`; without one, the
//! first nameserver of the platform resolver configuration is used.

use hickory_resolver::system_conf::read_system_conf;

use crate::config::Config;
use crate::error_handling::ConfigError;

/// Returns the first nameserver configured for the system resolver, if any.
pub fn system_nameserver() -> Option<String> {
    match read_system_conf() {
        Ok((config, _opts)) => config
            .name_servers()
            .first()
            .map(|ns| ns.socket_addr.ip().to_string()),
        Err(e) => {
            log::debug!("Failed to read system resolver configuration: {e}");
            None
        }
    }
}

/// Picks the resolving server for the run.
///
/// # Errors
///
/// Returns `ConfigError::NoResolver` if none was configured and the system
/// resolver has none either.
pub fn init_resolving_server(config: &Config) -> Result<String, ConfigError> {
    config
        .nameserver
        .clone()
        .or_else(system_nameserver)
        .ok_or(ConfigError::NoResolver)
}
