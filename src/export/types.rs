//! Output file selection and creation.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use log::info;

use crate::config::{Config, OutputFormat, OUTPUT_FILE_PREFIX, OUTPUT_FILE_TIMESTAMP};
use crate::export::{write_csv, write_json};
use crate::models::ZoneTransferResult;

/// Paths of the report files requested for a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputTargets {
    /// JSON report path, if JSON output was requested
    pub json: Option<PathBuf>,
    /// CSV report path, if CSV output was requested
    pub csv: Option<PathBuf>,
}

impl OutputTargets {
    /// Resolves the requested formats to paths.
    ///
    /// Formats without an explicit path get `axfr-YYYYMMDD-HHMMSS.<ext>`,
    /// stamped with `now`. Paths given for formats that were not requested
    /// are ignored.
    pub fn from_config(config: &Config, now: DateTime<Local>) -> Self {
        let pick = |format: OutputFormat, explicit: &Option<PathBuf>| {
            config.wants(format).then(|| {
                explicit
                    .clone()
                    .unwrap_or_else(|| default_file_name(format, now))
            })
        };

        Self {
            json: pick(OutputFormat::Json, &config.json_path),
            csv: pick(OutputFormat::Csv, &config.csv_path),
        }
    }
}

fn default_file_name(format: OutputFormat, now: DateTime<Local>) -> PathBuf {
    PathBuf::from(format!(
        "{}-{}.{}",
        OUTPUT_FILE_PREFIX,
        now.format(OUTPUT_FILE_TIMESTAMP),
        format.extension()
    ))
}

/// Report files opened before the scan starts, written once it completes.
#[derive(Debug, Default)]
pub struct ReportFiles {
    json: Option<(PathBuf, File)>,
    csv: Option<(PathBuf, File)>,
}

impl ReportFiles {
    /// Creates (truncating) every requested output file.
    ///
    /// # Errors
    ///
    /// Returns an error if any file cannot be created.
    pub fn create(targets: &OutputTargets) -> Result<Self> {
        Ok(Self {
            json: targets.json.as_deref().map(open_output).transpose()?,
            csv: targets.csv.as_deref().map(open_output).transpose()?,
        })
    }

    /// Writes the report into every opened file.
    pub fn write(self, results: &[ZoneTransferResult]) -> Result<()> {
        if let Some((path, file)) = self.json {
            write_json(BufWriter::new(file), results)
                .with_context(|| format!("Failed to write JSON report {}", path.display()))?;
        }
        if let Some((path, file)) = self.csv {
            let rows = write_csv(BufWriter::new(file), results)
                .with_context(|| format!("Failed to write CSV report {}", path.display()))?;
            log::debug!("Wrote {rows} CSV rows to {}", path.display());
        }
        Ok(())
    }
}

fn open_output(path: &Path) -> Result<(PathBuf, File)> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    info!("Using output file: {}", path.display());
    Ok((path.to_path_buf(), file))
}
