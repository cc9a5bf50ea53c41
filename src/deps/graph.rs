// src/deps/graph.rs

use std::collections::{HashMap, HashSet};

use petgraph::algo::tarjan_scc;
use petgraph::graphmap::DiGraphMap;

/// Declared libraries and their direct dependencies.
///
/// Libraries keep the position of their first declaration even when a later
/// line replaces their dependency set. Dependency names do not have to be
/// declared themselves; undeclared names are leaves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    /// Direct dependencies per library, duplicate-free, in the order written.
    deps: HashMap<String, Vec<String>>,
    /// Libraries in first-seen order.
    order: Vec<String>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the direct dependencies of `library`.
    ///
    /// Returns `true` if the library was already declared, in which case its
    /// previous dependency set is replaced.
    pub fn declare<I, S>(&mut self, library: impl Into<String>, deps: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let library = library.into();

        let mut seen = HashSet::new();
        let deps: Vec<String> = deps
            .into_iter()
            .map(Into::into)
            .filter(|d| seen.insert(d.clone()))
            .collect();

        let existed = self.deps.insert(library.clone(), deps).is_some();
        if !existed {
            self.order.push(library);
        }
        existed
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.deps.contains_key(name)
    }

    /// Direct dependencies of a declared library, `None` for leaves.
    pub fn direct_dependencies(&self, name: &str) -> Option<&[String]> {
        self.deps.get(name).map(Vec::as_slice)
    }

    /// The stored name and dependencies of a declared library.
    pub fn entry(&self, name: &str) -> Option<(&str, &[String])> {
        self.deps
            .get_key_value(name)
            .map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Declared libraries in first-seen order.
    pub fn libraries(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Dependency names that are never declared, in first-seen order.
    pub fn leaves(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.libraries()
            .flat_map(|lib| self.deps[lib].iter())
            .map(|d| d.as_str())
            .filter(|d| !self.is_declared(d) && seen.insert(*d))
            .collect()
    }

    /// Groups of libraries that depend on each other, directly or through
    /// other libraries.
    ///
    /// Each group lists its members in first-seen order and groups are
    /// ordered by their earliest member. A library depending on itself is a
    /// group of one.
    pub fn cycles(&self) -> Vec<Vec<&str>> {
        let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();
        for lib in self.libraries() {
            graph.add_node(lib);
        }
        for lib in self.libraries() {
            for dep in &self.deps[lib] {
                graph.add_edge(lib, dep.as_str(), ());
            }
        }

        let position: HashMap<&str, usize> = self
            .libraries()
            .enumerate()
            .map(|(i, lib)| (lib, i))
            .collect();

        // Every node in a cycle has an outgoing edge, so it is declared and
        // has a position.
        let mut cycles: Vec<Vec<&str>> = tarjan_scc(&graph)
            .into_iter()
            .filter(|scc| scc.len() > 1 || graph.contains_edge(scc[0], scc[0]))
            .map(|mut scc| {
                scc.sort_by_key(|lib| position[lib]);
                scc
            })
            .collect();
        cycles.sort_by_key(|scc| position[scc[0]]);
        cycles
    }
}
