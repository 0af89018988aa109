//! DNS operations of the audit pipeline.
//!
//! This module provides:
//! - Record normalization (any RR kind into `{name, type, ttl, value}`, with
//!   the value in zone-file presentation format)
//! - Nameserver discovery (NS query against a resolving server)
//! - Zone transfer execution (AXFR over TCP, consumed envelope by envelope)
//!
//! Messages are built and parsed with `hickory-proto`; the transport is plain
//! tokio UDP/TCP sockets.

mod presentation;
mod records;
mod resolution;
mod transfer;
mod wire;

// Re-export public API
pub use records::{normalize, type_mnemonic, RenderRecord};
pub use resolution::{nameservers_from_response, NameserverResolver};
pub use transfer::{collect_records, envelopes, Envelope, TransferAttempt, ZoneTransferExecutor};
pub use wire::{build_query, fqdn, read_frame, write_frame};
