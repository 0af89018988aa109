//! Audit orchestration.
//!
//! Walks the domain tokens in input order, determines the nameserver set of
//! each domain, and attempts a zone transfer against every nameserver. All
//! attempts run one after another; the report lists them in attempt order.
//! Per-attempt failures are logged and never stop the walk.

use async_trait::async_trait;
use log::{debug, error, info, warn};

use crate::config::SUCCESS_TARGET;
use crate::dns::{NameserverResolver, TransferAttempt, ZoneTransferExecutor};
use crate::error_handling::{ResolveError, TransferError};
use crate::models::ZoneTransferResult;
use crate::target::DomainTarget;

/// Source of a domain's nameserver set.
#[async_trait]
pub trait NameserverLookup: Send + Sync {
    /// Returns the nameserver hostnames advertised for `domain`.
    async fn lookup_nameservers(&self, domain: &str) -> Result<Vec<String>, ResolveError>;
}

/// Performs one zone transfer attempt.
#[async_trait]
pub trait ZoneTransfer: Send + Sync {
    /// Requests the zone of `domain` from `nameserver`.
    async fn transfer(&self, domain: &str, nameserver: &str) -> TransferAttempt;
}

#[async_trait]
impl NameserverLookup for NameserverResolver {
    async fn lookup_nameservers(&self, domain: &str) -> Result<Vec<String>, ResolveError> {
        self.resolve(domain).await
    }
}

#[async_trait]
impl ZoneTransfer for ZoneTransferExecutor {
    async fn transfer(&self, domain: &str, nameserver: &str) -> TransferAttempt {
        ZoneTransferExecutor::transfer(self, domain, nameserver).await
    }
}

/// Aggregate report of a scan plus attempt counters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanSummary {
    /// One entry per attempted `(domain, nameserver)` pair, in attempt order
    pub results: Vec<ZoneTransferResult>,
    /// Attempts that completed without error
    pub successful: usize,
    /// Attempts that failed
    pub failed: usize,
}

/// Drives nameserver discovery and zone transfers for a list of domains.
pub struct Scanner<L, T> {
    lookup: L,
    transfer: T,
    verbose: bool,
}

impl<L, T> Scanner<L, T>
where
    L: NameserverLookup,
    T: ZoneTransfer,
{
    /// Creates a scanner. `verbose` adds per-attempt and per-record log lines.
    pub fn new(lookup: L, transfer: T, verbose: bool) -> Self {
        Self {
            lookup,
            transfer,
            verbose,
        }
    }

    /// Audits every token (`domain` or `domain@nameserver`) in order.
    ///
    /// Empty tokens are skipped. A domain whose nameservers cannot be
    /// resolved contributes no results.
    pub async fn run<I, S>(&self, tokens: I) -> ScanSummary
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut summary = ScanSummary::default();

        for token in tokens {
            let Some(target) = DomainTarget::parse(token.as_ref()) else {
                continue;
            };
            debug!("Processing {target}");

            let Some(nameservers) = self.nameservers_for(&target).await else {
                continue;
            };

            for nameserver in &nameservers {
                let attempt = self.attempt(target.domain(), nameserver).await;
                if attempt.is_success() {
                    summary.successful += 1;
                } else {
                    summary.failed += 1;
                }
                summary.results.push(attempt.result);
            }
        }

        summary
    }

    async fn nameservers_for(&self, target: &DomainTarget) -> Option<Vec<String>> {
        let domain = target.domain();
        let nameservers = match target.nameserver() {
            Some(ns) => vec![ns.to_string()],
            None => match self.lookup.lookup_nameservers(domain).await {
                Ok(nameservers) => nameservers,
                Err(e) => {
                    error!("Failed to get nameservers for {domain}: {e}");
                    return None;
                }
            },
        };

        if nameservers.is_empty() {
            warn!("No nameservers advertised for {domain}");
        } else if self.verbose {
            info!("Nameservers for {domain}: {}", nameservers.join(", "));
        }

        Some(nameservers)
    }

    async fn attempt(&self, domain: &str, nameserver: &str) -> TransferAttempt {
        if self.verbose {
            info!("Performing zone transfer for {domain} against {nameserver}");
        }

        let attempt = self.transfer.transfer(domain, nameserver).await;
        match &attempt.error {
            Some(e) => warn!("{}", failure_message(domain, nameserver, e)),
            None => {
                info!(
                    target: SUCCESS_TARGET,
                    "Zone transfer successful for {domain} against {nameserver}, identified {} records",
                    attempt.result.records.len()
                );
                if self.verbose {
                    log_records(&attempt.result);
                }
            }
        }

        attempt
    }
}

/// Status line for a failed attempt. Setup failures mean the nameserver was
/// never asked for the zone.
fn failure_message(domain: &str, nameserver: &str, error: &TransferError) -> String {
    if error.is_setup() {
        format!("Could not reach {nameserver} for {domain}: {error}")
    } else {
        format!("Zone transfer failed for {domain} against {nameserver}: {error}")
    }
}

fn log_records(result: &ZoneTransferResult) {
    let header = format!(
        "=== {}@{} =======================================",
        result.domain, result.nameserver
    );
    info!(target: SUCCESS_TARGET, "{header}");
    for record in &result.records {
        info!(
            target: SUCCESS_TARGET,
            "Name: {}, Type: {}, TTL: {}, Value: {}",
            record.name,
            record.record_type,
            record.ttl,
            record.value
        );
    }
    info!(target: SUCCESS_TARGET, "{}", "=".repeat(header.len()));
}
