//! JSON export functionality.
//!
//! The report is written as one pretty-printed array of
//! `{domain, nameserver, records: [{name, type, ttl, value}]}` objects,
//! including attempts that failed (with an empty `records` array).

use anyhow::Result;
use std::io::Write;

use crate::models::ZoneTransferResult;

/// Writes the whole report as a JSON array.
pub fn write_json<W: Write>(mut writer: W, results: &[ZoneTransferResult]) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, results)?;
    writer.flush()?;
    Ok(())
}
