//! Domain list gathering.
//!
//! Domain tokens come from `--domains` values followed by the lines of
//! `--file`. Blank lines are kept as empty tokens; the scanner skips them.

use crate::config::Config;
use crate::error_handling::ConfigError;

/// Collects every domain token for the run.
///
/// # Errors
///
/// - `ConfigError::DomainsFile` if the domain file cannot be read
/// - `ConfigError::NoDomains` if no token names a domain
pub fn gather_domains(config: &Config) -> Result<Vec<String>, ConfigError> {
    let mut domains = config.domains.clone();

    if let Some(path) = &config.domains_file {
        log::info!("Reading domains from file");
        let content =
            std::fs::read_to_string(path).map_err(|source| ConfigError::DomainsFile {
                path: path.clone(),
                source,
            })?;
        domains.extend(content.split('\n').map(str::to_string));
    }

    if domains.iter().all(|token| token.trim().is_empty()) {
        return Err(ConfigError::NoDomains);
    }

    Ok(domains)
}
