//! Tests for command-line parsing and conversion into `Config`.

use std::path::PathBuf;
use std::time::Duration;

use axfr_audit::config::Opt;
use axfr_audit::{Config, EnvelopeMerge, LogFormat, LogLevel, OutputFormat};
use clap::Parser;

fn parse(args: &[&str]) -> Config {
    let mut argv = vec!["axfr_audit"];
    argv.extend_from_slice(args);
    Config::from(Opt::try_parse_from(argv).expect("Should parse arguments"))
}

#[test]
fn test_long_and_short_flags_are_equivalent() {
    let short = parse(&["-n", "9.9.9.9", "-d", "example.com", "-f", "list.txt", "-v"]);
    let long = parse(&[
        "--nameserver",
        "9.9.9.9",
        "--domains",
        "example.com",
        "--file",
        "list.txt",
        "--verbose",
    ]);

    for config in [short, long] {
        assert_eq!(config.nameserver.as_deref(), Some("9.9.9.9"));
        assert_eq!(config.domains, vec!["example.com"]);
        assert_eq!(config.domains_file, Some(PathBuf::from("list.txt")));
        assert!(config.verbose);
    }
}

#[test]
fn test_output_paths() {
    let config = parse(&[
        "-d",
        "example.com",
        "-o",
        "csv",
        "-o",
        "json",
        "-j",
        "out.json",
        "-c",
        "out.csv",
    ]);
    assert_eq!(config.output_formats, vec![OutputFormat::Csv, OutputFormat::Json]);
    assert_eq!(config.json_path, Some(PathBuf::from("out.json")));
    assert_eq!(config.csv_path, Some(PathBuf::from("out.csv")));
}

#[test]
fn test_runtime_options() {
    let config = parse(&[
        "-d",
        "example.com",
        "--timeout-seconds",
        "3",
        "--port",
        "5353",
        "--envelope-merge",
        "keep-last",
        "--log-level",
        "debug",
        "--log-format",
        "json",
    ]);
    assert_eq!(config.timeout, Duration::from_secs(3));
    assert_eq!(config.port, 5353);
    assert_eq!(config.envelope_merge, EnvelopeMerge::KeepLast);
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.log_format, LogFormat::Json);
}

#[test]
fn test_blank_nameserver_means_system_resolver() {
    let config = parse(&["-d", "example.com", "-n", ""]);
    assert!(config.nameserver.is_none());
}

#[test]
fn test_no_arguments_parse_to_empty_domain_list() {
    // Missing domains are reported at run time, not by the parser
    let config = parse(&[]);
    assert!(config.domains.is_empty());
    assert!(config.domains_file.is_none());
}

#[test]
fn test_invalid_values_are_rejected() {
    assert!(Opt::try_parse_from(["axfr_audit", "-o", "xml"]).is_err());
    assert!(Opt::try_parse_from(["axfr_audit", "--port", "70000"]).is_err());
    assert!(Opt::try_parse_from(["axfr_audit", "--envelope-merge", "union"]).is_err());
}
