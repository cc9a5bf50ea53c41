// src/deps/resolver.rs

use std::collections::HashSet;
use std::fmt;

use tracing::debug;

use crate::deps::graph::DependencyGraph;
use crate::errors::{DepclosureError, Result};

/// A library together with its full transitive dependency list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<'g> {
    pub library: &'g str,
    /// Dependencies in the order the depth-first walk first reached them.
    pub dependencies: Vec<&'g str>,
}

impl Resolution<'_> {
    /// `"<library> depends on <d1><sep><d2>..."`.
    pub fn render_line(&self, separator: &str) -> String {
        format!(
            "{} depends on {}",
            self.library,
            self.dependencies.join(separator)
        )
    }
}

impl fmt::Display for Resolution<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_line(" "))
    }
}

/// Computes transitive closures over a parsed [`DependencyGraph`].
///
/// The resolver only borrows the graph; it keeps no state between calls.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'g> {
    graph: &'g DependencyGraph,
}

impl<'g> Resolver<'g> {
    pub fn new(graph: &'g DependencyGraph) -> Self {
        Self { graph }
    }

    /// Every dependency reachable from `name`, in first-discovery order.
    ///
    /// `name` itself only appears if a cycle leads back to it. Each node is
    /// expanded at most once per call. Undeclared names have an empty
    /// closure.
    pub fn closure(&self, name: &str) -> Vec<&'g str> {
        let mut result = Vec::new();
        let Some(direct) = self.graph.direct_dependencies(name) else {
            return result;
        };

        let mut visited: HashSet<&'g str> = HashSet::new();
        let mut stack = vec![direct.iter()];

        while let Some(frame) = stack.last_mut() {
            let Some(dep) = frame.next() else {
                stack.pop();
                continue;
            };
            if !visited.insert(dep.as_str()) {
                continue;
            }
            result.push(dep.as_str());
            if let Some(next) = self.graph.direct_dependencies(dep) {
                stack.push(next.iter());
            }
        }

        debug!(library = name, count = result.len(), "resolved closure");
        result
    }

    /// Resolve every declared library, in first-seen order.
    pub fn resolve_all(&self) -> Vec<Resolution<'g>> {
        self.graph
            .libraries()
            .map(|library| Resolution {
                library,
                dependencies: self.closure(library),
            })
            .collect()
    }

    /// Resolve the given libraries, in the order given.
    ///
    /// Fails on the first name that was never declared.
    pub fn resolve<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<Resolution<'g>>> {
        names
            .iter()
            .map(|name| -> Result<Resolution<'g>> {
                let name = name.as_ref();
                let (library, _) = self
                    .graph
                    .entry(name)
                    .ok_or_else(|| DepclosureError::LibraryNotFound(name.to_string()))?;
                Ok(Resolution {
                    library,
                    dependencies: self.closure(library),
                })
            })
            .collect()
    }
}
