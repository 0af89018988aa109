//! Command-line options.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::config::constants::{DEFAULT_TIMEOUT_SECS, DNS_PORT};
use crate::config::types::{Config, EnvelopeMerge, LogFormat, LogLevel, OutputFormat};

/// Command-line options and configuration.
///
/// This struct is automatically generated by `clap` from the field attributes
/// and converted into a [`Config`] before the run starts.
///
/// # Examples
///
/// ```bash
/// # Discover nameservers through 9.9.9.9 and try each of them
/// axfr_audit -n 9.9.9.9 -d example.com -d example.org
///
/// # Skip discovery for one domain and write both report formats
/// axfr_audit -d example.com@ns1.example.com -o json,csv
///
/// # Read domains from a file, print every disclosed record
/// axfr_audit -f domains.txt -v
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "axfr_audit",
    about = "Attempts DNS zone transfers (AXFR) against the nameservers of each domain."
)]
pub struct Opt {
    /// DNS server for resolving domain nameservers
    #[arg(short = 'n', long)]
    pub nameserver: Option<String>,

    /// Domain names to transfer (`domain` or `domain@nameserver`)
    #[arg(short = 'd', long = "domains")]
    pub domains: Vec<String>,

    /// File containing domain names to transfer, one per line
    #[arg(short = 'f', long = "file", value_parser)]
    pub file: Option<PathBuf>,

    /// Output formats: json,csv
    #[arg(short = 'o', long = "output", value_enum, value_delimiter = ',')]
    pub output: Vec<OutputFormat>,

    /// Output file for json format
    #[arg(short = 'j', long = "json", value_parser)]
    pub json: Option<PathBuf>,

    /// Output file for csv format
    #[arg(short = 'c', long = "csv", value_parser)]
    pub csv: Option<PathBuf>,

    /// Verbose output
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Network timeout per DNS exchange and per transfer read, in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// DNS port for nameserver lookups and transfers
    #[arg(long, default_value_t = DNS_PORT)]
    pub port: u16,

    /// How records of multi-message transfers are combined: accumulate|keep-last
    #[arg(long, value_enum, default_value_t = EnvelopeMerge::Accumulate)]
    pub envelope_merge: EnvelopeMerge,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            domains: opt.domains,
            domains_file: opt.file,
            nameserver: opt.nameserver.filter(|ns| !ns.trim().is_empty()),
            output_formats: opt.output,
            json_path: opt.json,
            csv_path: opt.csv,
            verbose: opt.verbose,
            timeout: Duration::from_secs(opt.timeout_seconds),
            port: opt.port,
            envelope_merge: opt.envelope_merge,
            log_level: opt.log_level,
            log_format: opt.log_format,
        }
    }
}
