// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `depclosure`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "depclosure",
    version,
    about = "Print the transitive dependencies of every library in a declaration file.",
    long_about = None
)]
pub struct CliArgs {
    /// Input file with one `<library> depends on <deps...>` line per library.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Optional TOML config controlling parsing and output.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Only report this library. May be given more than once.
    #[arg(long = "library", value_name = "NAME")]
    pub libraries: Vec<String>,

    /// Parse and validate the input, print a summary, skip the report.
    #[arg(long)]
    pub check: bool,

    /// Logging level (error, warn, info, debug, trace). Defaults to `warn`.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
