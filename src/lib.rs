// src/lib.rs

pub mod cli;
pub mod config;
pub mod deps;
pub mod errors;
pub mod fs;
pub mod logging;
pub mod types;

use std::io::{self, Write};

use tracing::{debug, info, warn};

use crate::cli::CliArgs;
use crate::config::load_or_default;
use crate::deps::{GraphSummary, Resolver, load_declarations, render_report};
use crate::errors::Result;
use crate::fs::{FileSystem, RealFileSystem};

/// High-level entry point used by `main.rs`: reads from disk and writes the
/// report to stdout.
pub fn run(args: CliArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with(&args, &RealFileSystem, &mut out)
}

/// Run against an arbitrary filesystem and output sink.
///
/// This wires together:
/// - config loading
/// - parsing the input into a graph
/// - cycle diagnostics
/// - resolution and rendering (or the `--check` summary)
///
/// Nothing is written to `out` unless every stage succeeds.
pub fn run_with(args: &CliArgs, fs: &dyn FileSystem, out: &mut dyn Write) -> Result<()> {
    let cfg = load_or_default(fs, args.config.as_deref())?;

    info!(input = %args.input.display(), "reading input file");
    let graph = load_declarations(fs, &args.input, cfg.parse.redeclaration)?;
    info!(libraries = graph.len(), "parsed input file");

    for cycle in graph.cycles() {
        warn!(members = %cycle.join(", "), "dependency cycle detected");
    }

    if args.check {
        let summary = GraphSummary::from_graph(&graph);
        writeln!(out, "{summary}")?;
        debug!("check complete (no report)");
        return Ok(());
    }

    let resolver = Resolver::new(&graph);
    let resolutions = if args.libraries.is_empty() {
        resolver.resolve_all()
    } else {
        resolver.resolve(&args.libraries)?
    };

    info!(count = resolutions.len(), "generating dependency report");
    writeln!(out, "{}", render_report(&resolutions, &cfg.output))?;
    Ok(())
}
