//! Domain target parsing.
//!
//! Input tokens are either a bare domain (`example.com`) or a domain with an
//! explicit nameserver (`example.com@ns1.example.com`). An explicit nameserver
//! replaces NS discovery for that domain.

use std::fmt;

/// A domain to audit, optionally pinned to a single nameserver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainTarget {
    domain: String,
    nameserver: Option<String>,
}

impl DomainTarget {
    /// Parses one input token.
    ///
    /// Returns `None` for tokens without a domain (blank lines, `@ns`), which
    /// callers skip silently. Surrounding whitespace and a trailing `\r` are
    /// ignored. `domain@` is treated as a bare domain.
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim();
        let mut parts = token.split('@');
        let domain = parts.next().unwrap_or_default().trim();
        if domain.is_empty() {
            return None;
        }

        let nameserver = parts
            .next()
            .map(str::trim)
            .filter(|ns| !ns.is_empty())
            .map(str::to_string);

        Some(Self {
            domain: domain.to_string(),
            nameserver,
        })
    }

    /// Domain whose zone is requested.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Explicit nameserver override, if one was given.
    pub fn nameserver(&self) -> Option<&str> {
        self.nameserver.as_deref()
    }
}

impl fmt::Display for DomainTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.nameserver {
            Some(ns) => write!(f, "{}@{}", self.domain, ns),
            None => f.write_str(&self.domain),
        }
    }
}
