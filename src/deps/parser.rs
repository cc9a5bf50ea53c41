// src/deps/parser.rs

use std::io;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::deps::graph::DependencyGraph;
use crate::errors::{DepclosureError, Result};
use crate::fs::FileSystem;
use crate::types::RedeclarationPolicy;

/// `<name> depends on <deps>`, with "depends on" matched case-insensitively
/// and any run of whitespace around and inside it.
static DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(.+?)\s+depends\s+on\s+(.+)$").expect("declaration pattern is valid")
});

/// Split a single declaration into the library name and its dependencies.
///
/// Returns `None` if the line does not have the declaration shape.
pub fn parse_line(line: &str) -> Option<(&str, Vec<&str>)> {
    let caps = DECLARATION.captures(line)?;
    let name = caps.get(1)?.as_str().trim();
    let deps: Vec<&str> = caps.get(2)?.as_str().split_whitespace().collect();

    if name.is_empty() || deps.is_empty() {
        return None;
    }
    Some((name, deps))
}

/// Parse a whole input text into a [`DependencyGraph`].
///
/// Blank lines are skipped. The first malformed line aborts the parse.
pub fn parse_declarations(text: &str, policy: RedeclarationPolicy) -> Result<DependencyGraph> {
    let mut graph = DependencyGraph::new();

    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let line_number = idx + 1;

        let Some((library, deps)) = parse_line(line) else {
            return Err(DepclosureError::InvalidLineFormat {
                line_number,
                line: line.to_string(),
            });
        };

        if policy == RedeclarationPolicy::Reject && graph.is_declared(library) {
            return Err(DepclosureError::DuplicateDeclaration {
                library: library.to_string(),
                line_number,
            });
        }

        debug!(line_number, library, ?deps, "parsed declaration");
        if graph.declare(library, deps) {
            warn!(line_number, library, "library declared again; replacing its dependencies");
        }
    }

    if graph.is_empty() {
        return Err(DepclosureError::EmptyInput);
    }
    Ok(graph)
}

/// Read `path` through `fs` and parse it.
///
/// Any failure to read the file is reported as [`DepclosureError::FileNotFound`].
pub fn load_declarations(
    fs: &dyn FileSystem,
    path: impl AsRef<Path>,
    policy: RedeclarationPolicy,
) -> Result<DependencyGraph> {
    let path = path.as_ref();
    let text = fs
        .read_to_string(path)
        .map_err(|source: io::Error| DepclosureError::FileNotFound {
            path: path.to_path_buf(),
            source,
        })?;
    parse_declarations(&text, policy)
}
