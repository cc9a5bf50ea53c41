// src/deps/mod.rs

//! Dependency graph model, parsing and transitive resolution.
//!
//! - [`graph`] holds the declared libraries and their direct dependencies.
//! - [`parser`] turns `"<name> depends on <dep>..."` lines into a graph.
//! - [`resolver`] computes transitive closures over a parsed graph.
//! - [`report`] renders resolutions and graph summaries as text.

pub mod graph;
pub mod parser;
pub mod report;
pub mod resolver;

pub use graph::DependencyGraph;
pub use parser::{load_declarations, parse_declarations};
pub use report::{GraphSummary, render_report};
pub use resolver::{Resolution, Resolver};
