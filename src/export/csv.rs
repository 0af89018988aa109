//! CSV export functionality.
//!
//! One row per disclosed record, with the domain and nameserver of the attempt
//! repeated on every row. Attempts without records contribute no rows.

use anyhow::Result;
use csv::Writer;
use std::io::Write;

use crate::config::CSV_HEADER;
use crate::models::ZoneTransferResult;

/// Writes the header and one row per record.
///
/// # Returns
///
/// Returns the number of data rows written.
pub fn write_csv<W: Write>(writer: W, results: &[ZoneTransferResult]) -> Result<usize> {
    let mut writer = Writer::from_writer(writer);
    writer.write_record(CSV_HEADER)?;

    let mut row_count = 0;
    for result in results {
        for record in &result.records {
            let ttl = record.ttl.to_string();
            writer.write_record([
                result.domain.as_str(),
                result.nameserver.as_str(),
                record.name.as_str(),
                record.record_type.as_str(),
                ttl.as_str(),
                record.value.as_str(),
            ])?;
            row_count += 1;
        }
    }

    writer.flush()?;
    Ok(row_count)
}
