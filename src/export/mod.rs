//! Export of the aggregate report.
//!
//! This module writes the zone transfer results of a run to the structured
//! formats requested on the command line (JSON, CSV).

mod csv;
mod json;
mod types;

pub use csv::write_csv;
pub use json::write_json;
pub use types::{OutputTargets, ReportFiles};
