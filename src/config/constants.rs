//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including DNS transport parameters and output file naming.

/// Port used for both nameserver lookups and zone transfers.
pub const DNS_PORT: u16 = 53;

/// Per-operation network timeout in seconds.
///
/// Applies to each NS exchange, to the AXFR connect, and to every envelope read
/// of a running transfer. A silent server therefore costs at most this long per step.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Receive buffer for UDP responses. Larger answers come back truncated and
/// are retried over TCP.
pub const MAX_UDP_PAYLOAD: usize = 4096;

/// Prefix of generated output file names (`axfr-YYYYMMDD-HHMMSS.json`).
pub const OUTPUT_FILE_PREFIX: &str = "axfr";

/// Timestamp layout used in generated output file names.
pub const OUTPUT_FILE_TIMESTAMP: &str = "%Y%m%d-%H%M%S";

/// Header row of the CSV export.
pub const CSV_HEADER: [&str; 6] = ["Domain", "Nameserver", "Name", "Type", "TTL", "Value"];

/// Log target used for successful transfer lines (rendered with the `[+]` marker).
pub const SUCCESS_TARGET: &str = "axfr_audit::success";
