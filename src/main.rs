//! Natural-order sort CLI.
//!
//! Tokenizes an input stream (inline value or file, optionally gzip/base64
//! encoded) on a single-character separator, sorts the records into
//! natural order and writes them back out joined with the same separator.

use std::process;
use std::thread;
use std::time::Duration;

use clap::{Arg, ArgAction, Command};
use crossbeam_channel::{bounded, RecvTimeoutError};

use natsort::{
    config::SortConfig,
    error::{SortError, SortResult},
    filesystem::RealFilesystem,
    pipeline::SortPipeline,
    signal, EXIT_SUCCESS,
};

fn main() {
    match run() {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("natsort: {e}");
            process::exit(e.exit_code());
        }
    }
}

fn run() -> SortResult<i32> {
    let matches = build_cli().get_matches();
    let config = parse_config_from_matches(&matches)?;

    init_logging(config.debug);
    config.validate()?;

    signal::install();

    // The pipeline runs on a worker thread so the process stays
    // responsive to interrupts while large inputs are read and sorted.
    let (sender, receiver) = bounded(1);
    let worker_config = config.clone();
    thread::spawn(move || {
        let pipeline = SortPipeline::new(worker_config, RealFilesystem);
        let _ = sender.send(pipeline.run());
    });

    loop {
        match receiver.recv_timeout(Duration::from_millis(50)) {
            Ok(result) => {
                result?;
                return Ok(EXIT_SUCCESS);
            }
            Err(RecvTimeoutError::Timeout) => {
                if signal::interrupted() {
                    return Err(SortError::Interrupted);
                }
            }
            Err(RecvTimeoutError::Disconnected) => {
                return Err(SortError::internal("sort worker exited without a result"));
            }
        }
    }
}

fn init_logging(debug: bool) {
    let default_filter = if debug { "natsort=debug" } else { "natsort=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn build_cli() -> Command {
    Command::new("natsort")
        .version(env!("CARGO_PKG_VERSION"))
        .override_usage("natsort [OPTION]...")
        .about("Sort delimited string records into natural order")
        .long_about(
            "Sort delimited string records into natural order.\n\n\
             Natural order compares embedded numbers by value, so z2 sorts \
             before z11 and 1 before 001. Input comes from --input or \
             --input-file and may be gzip and/or base64 encoded; output goes \
             to stdout or --output-file with the same optional encodings.",
        )
        .arg(
            Arg::new("separator")
                .short('s')
                .long("separator")
                .help("Record separator; must be exactly one character (a space splits on whitespace)")
                .value_name("SEP")
                .default_value(","),
        )
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .help("Inline input to sort")
                .value_name("STRING"),
        )
        .arg(
            Arg::new("input-file")
                .long("input-file")
                .help("File to read input from (takes precedence over --input)")
                .value_name("FILE"),
        )
        .arg(
            Arg::new("input-gzip")
                .long("input-gzip")
                .help("Decode gzip input")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("input-base64")
                .long("input-base64")
                .help("Decode base64 input")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output-file")
                .short('o')
                .long("output-file")
                .help("Write result to FILE instead of standard output")
                .value_name("FILE"),
        )
        .arg(
            Arg::new("output-gzip")
                .long("output-gzip")
                .help("Encode gzip output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output-base64")
                .long("output-base64")
                .help("Encode base64 output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Enable debug logging")
                .action(ArgAction::SetTrue),
        )
}

/// Parse configuration from command line matches
fn parse_config_from_matches(matches: &clap::ArgMatches) -> SortResult<SortConfig> {
    let mut config = SortConfig::default();

    if let Some(sep) = matches.get_one::<String>("separator") {
        let mut chars = sep.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => config.separator = c,
            _ => return Err(SortError::invalid_separator(sep)),
        }
    }

    if let Some(input) = matches.get_one::<String>("input") {
        config.input = Some(input.clone());
    }
    if let Some(file) = matches.get_one::<String>("input-file") {
        config.input_file = Some(file.clone());
    }
    if let Some(file) = matches.get_one::<String>("output-file") {
        config.output_file = Some(file.clone());
    }

    config.input_gzip = matches.get_flag("input-gzip");
    config.input_base64 = matches.get_flag("input-base64");
    config.output_gzip = matches.get_flag("output-gzip");
    config.output_base64 = matches.get_flag("output-base64");
    config.debug = matches.get_flag("debug");

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_config() {
        let app = build_cli();
        let matches = app
            .try_get_matches_from(["natsort", "-i", "b,a,2,1"])
            .expect("Failed to parse test arguments");

        let config = parse_config_from_matches(&matches).expect("Failed to parse test config");

        assert_eq!(config.separator, ',');
        assert_eq!(config.inline_input(), Some("b,a,2,1"));
        assert!(config.writing_to_stdout());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let app = build_cli();
        let matches = app
            .try_get_matches_from([
                "natsort",
                "-s",
                ";",
                "--input-file",
                "in.gz",
                "--input-gzip",
                "--input-base64",
                "-o",
                "out.gz",
                "--output-gzip",
                "--debug",
            ])
            .expect("Failed to parse test arguments");

        let config = parse_config_from_matches(&matches).expect("Failed to parse test config");

        assert_eq!(config.separator, ';');
        assert_eq!(config.input_path(), Some("in.gz"));
        assert!(config.input_gzip);
        assert!(config.input_base64);
        assert_eq!(config.output_path(), Some("out.gz"));
        assert!(config.output_gzip);
        assert!(!config.output_base64);
        assert!(config.debug);
    }

    #[test]
    fn test_parse_rejects_long_separator() {
        let app = build_cli();
        let matches = app
            .try_get_matches_from(["natsort", "-s", "::", "-i", "a::b"])
            .expect("Failed to parse test arguments");

        let err = parse_config_from_matches(&matches).expect_err("expected separator error");
        assert!(matches!(err, SortError::InvalidSeparator { .. }));
    }

    #[test]
    fn test_parse_rejects_empty_separator() {
        let app = build_cli();
        let matches = app
            .try_get_matches_from(["natsort", "-s", "", "-i", "a,b"])
            .expect("Failed to parse test arguments");

        let err = parse_config_from_matches(&matches).expect_err("expected separator error");
        assert!(matches!(err, SortError::InvalidSeparator { .. }));
    }
}
