//! Command-line interface for commentcase
//! Normalizes the casing of comments inside Go containers.
//!
//! Usage:
//!   commentcase `<path>...`                      - Print normalized sources to stdout
//!   commentcase `<path>...` --write              - Rewrite changed files in place
//!   commentcase `<path>...` --check              - Exit with status 1 if anything would change
//!   commentcase `<path>...` --mode title --json  - One JSON summary per file
//!
//! Settings are layered: built-in defaults, then `./.commentcase.toml`, then
//! `--config <file>`, then command-line flags.

mod error;
mod files;

use clap::{Arg, ArgAction, ArgMatches, Command};
use commentcase_config::{CommentcaseConfig, Loader, LOCAL_CONFIG_FILE};
use commentcase_parser::CaseMode;
use error::CliError;
use files::{describe, process_file, Output};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let matches = build_cli().get_matches();

    match run(&matches) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(2)
        }
    }
}

fn build_cli() -> Command {
    Command::new("commentcase")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Normalize the casing of comments inside Go function bodies and declaration groups")
        .arg(
            Arg::new("paths")
                .help("Go source files to process")
                .required(true)
                .num_args(1..)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("mode")
                .long("mode")
                .short('m')
                .help("Casing mode: 'lowercase' or 'title' (default: from config)"),
        )
        .arg(
            Arg::new("write")
                .long("write")
                .short('w')
                .help("Rewrite changed files in place")
                .action(ArgAction::SetTrue)
                .conflicts_with("check"),
        )
        .arg(
            Arg::new("check")
                .long("check")
                .help("Report files that would change and exit with status 1 if any")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print one JSON summary per file instead of sources")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Enable debug logging")
                .action(ArgAction::SetTrue),
        )
}

fn run(matches: &ArgMatches) -> Result<ExitCode, CliError> {
    let config = load_config(matches)?;
    init_logging(&config, matches.get_flag("verbose"));

    let output = if config.output.check {
        Output::Check
    } else if config.output.write {
        Output::Write
    } else if matches.get_flag("json") {
        // --json prints summaries, never sources
        Output::Check
    } else {
        Output::Stdout
    };
    let json = matches.get_flag("json");
    let mode = config.casing.mode;

    let mut any_modified = false;
    for path in matches.get_many::<PathBuf>("paths").into_iter().flatten() {
        let summary = process_file(path, mode, output)?;
        any_modified |= summary.report.modified;

        if json {
            println!("{}", serde_json::to_string(&summary)?);
        } else if let Some(line) = describe(&summary, output) {
            eprintln!("{line}");
        }
    }

    if config.output.check && any_modified {
        return Ok(ExitCode::from(1));
    }
    Ok(ExitCode::SUCCESS)
}

fn load_config(matches: &ArgMatches) -> Result<CommentcaseConfig, CliError> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG_FILE);
    if let Some(path) = matches.get_one::<PathBuf>("config") {
        loader = loader.with_file(path);
    }

    if let Some(mode) = matches.get_one::<String>("mode") {
        let mode: CaseMode = mode.parse()?;
        loader = loader.set_override("casing.mode", mode.as_str())?;
    }
    if matches.get_flag("write") {
        loader = loader
            .set_override("output.write", true)?
            .set_override("output.check", false)?;
    }
    if matches.get_flag("check") {
        loader = loader
            .set_override("output.check", true)?
            .set_override("output.write", false)?;
    }

    Ok(loader.build()?)
}

/// `RUST_LOG` wins over the configured level; `--verbose` wins over both.
fn init_logging(config: &CommentcaseConfig, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&config.logging.level))
            .unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
