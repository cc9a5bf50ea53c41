// src/deps/report.rs

use std::fmt;

use crate::config::model::OutputSection;
use crate::deps::graph::DependencyGraph;
use crate::deps::resolver::Resolution;

const BANNER_TITLE: &str = "Resolved Dependencies:";
const BANNER_RULE: &str = "------------------------";

/// Render resolutions one per line, without a trailing newline.
pub fn render_report(resolutions: &[Resolution<'_>], output: &OutputSection) -> String {
    let body = resolutions
        .iter()
        .map(|r| r.render_line(&output.separator))
        .collect::<Vec<_>>()
        .join("\n");

    if !output.banner {
        return body;
    }
    format!("{BANNER_TITLE}\n{BANNER_RULE}\n{body}\n{BANNER_RULE}")
}

/// Counts printed by `--check`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphSummary {
    pub libraries: usize,
    pub leaves: usize,
    pub cycles: usize,
}

impl GraphSummary {
    pub fn from_graph(graph: &DependencyGraph) -> Self {
        Self {
            libraries: graph.len(),
            leaves: graph.leaves().len(),
            cycles: graph.cycles().len(),
        }
    }
}

impl fmt::Display for GraphSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "declared libraries: {}", self.libraries)?;
        writeln!(f, "leaf dependencies: {}", self.leaves)?;
        write!(f, "cycles: {}", self.cycles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deps::resolver::Resolver;

    fn sample() -> DependencyGraph {
        let mut graph = DependencyGraph::new();
        graph.declare("X", ["Y", "R"]);
        graph.declare("Y", ["Z"]);
        graph
    }

    #[test]
    fn plain_report() {
        let graph = sample();
        let report = render_report(&Resolver::new(&graph).resolve_all(), &OutputSection::default());
        assert_eq!(report, "X depends on Y Z R\nY depends on Z");
    }

    #[test]
    fn banner_and_separator() {
        let graph = sample();
        let output = OutputSection {
            banner: true,
            separator: ", ".to_string(),
        };
        let report = render_report(&Resolver::new(&graph).resolve_all(), &output);
        assert_eq!(
            report,
            "Resolved Dependencies:\n\
             ------------------------\n\
             X depends on Y, Z, R\n\
             Y depends on Z\n\
             ------------------------"
        );
    }

    #[test]
    fn summary_counts() {
        let mut graph = sample();
        graph.declare("Z", ["X"]);
        let summary = GraphSummary::from_graph(&graph);
        assert_eq!(
            summary,
            GraphSummary {
                libraries: 3,
                leaves: 1,
                cycles: 1,
            }
        );
        assert_eq!(
            summary.to_string(),
            "declared libraries: 3\nleaf dependencies: 1\ncycles: 1"
        );
    }
}
