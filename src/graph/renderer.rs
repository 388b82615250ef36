use std::io::Write;

use miette::Result;
use petgraph::graph::DiGraph;
use petgraph::visit::EdgeRef;

use super::types::{ProcessNode, WaitEdge};
use crate::core::{Cycle, ProcessId};
use crate::error::GridlockError;

// Blue-Orange Accessible Palette - Soothing colors with excellent contrast
mod colors {
    pub const NORMAL_NODE_FILL: &str = "#E3F2FD"; // Light blue
    pub const NORMAL_NODE_STROKE: &str = "#1976D2"; // Medium blue
    pub const CYCLE_NODE_FILL: &str = "#FFF3E0"; // Light orange
    pub const CYCLE_NODE_STROKE: &str = "#F57C00"; // Vibrant orange
    pub const NORMAL_EDGE: &str = "#64B5F6"; // Soft blue
    pub const CYCLE_EDGE: &str = "#FF6500"; // Deep orange
}

// Helper macro for write operations that converts IO errors
macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err(GridlockError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(GridlockError::from)
    };
}

pub struct GraphRenderer {
    highlight_cycle: bool,
}

impl GraphRenderer {
    pub fn new(highlight_cycle: bool) -> Self {
        Self { highlight_cycle }
    }

    fn on_cycle(&self, cycle: Option<&Cycle>, process: ProcessId) -> bool {
        self.highlight_cycle && cycle.is_some_and(|c| c.contains(process))
    }

    fn on_cycle_edge(&self, cycle: Option<&Cycle>, from: ProcessId, to: ProcessId) -> bool {
        self.highlight_cycle
            && cycle.is_some_and(|c| c.nodes().windows(2).any(|pair| pair == [from, to]))
    }

    pub fn render_ascii(
        &self,
        graph: &DiGraph<ProcessNode, WaitEdge>,
        cycle: Option<&Cycle>,
        output: &mut dyn Write,
    ) -> Result<()> {
        if graph.node_count() == 0 {
            writeln_out!(output, "No processes found to visualize")?;
            return Ok(());
        }

        writeln_out!(output, "\n📊 Wait-For Graph\n")?;

        for index in graph.node_indices() {
            let node = &graph[index];
            let marker = if self.on_cycle(cycle, node.id) {
                "⚠ "
            } else {
                "  "
            };

            let mut targets: Vec<ProcessId> =
                graph.edges(index).map(|edge| edge.weight().to).collect();
            targets.sort_unstable();
            targets.dedup();

            if targets.is_empty() {
                writeln_out!(output, "{}{} (not waiting)", marker, node.label())?;
            } else {
                let rendered: Vec<String> = targets.iter().map(|t| format!("P{t}")).collect();
                writeln_out!(
                    output,
                    "{}{} → {}",
                    marker,
                    node.label(),
                    rendered.join(", ")
                )?;
            }
        }

        if let Some(cycle) = cycle.filter(|_| self.highlight_cycle) {
            writeln_out!(output, "\n🔄 Deadlock cycle: {cycle}")?;
        }

        Ok(())
    }

    pub fn render_dot(
        &self,
        graph: &DiGraph<ProcessNode, WaitEdge>,
        cycle: Option<&Cycle>,
        output: &mut dyn Write,
    ) -> Result<()> {
        writeln_out!(output, "digraph wait_for {{")?;
        writeln_out!(output, "    rankdir=LR;")?;
        writeln_out!(output, "    node [shape=circle, style=filled];")?;

        for index in graph.node_indices() {
            let node = &graph[index];
            let (fill, stroke) = if self.on_cycle(cycle, node.id) {
                (colors::CYCLE_NODE_FILL, colors::CYCLE_NODE_STROKE)
            } else {
                (colors::NORMAL_NODE_FILL, colors::NORMAL_NODE_STROKE)
            };
            writeln_out!(
                output,
                "    {} [fillcolor=\"{}\", color=\"{}\"];",
                node.label(),
                fill,
                stroke
            )?;
        }

        let mut edges: Vec<(ProcessId, ProcessId)> = graph
            .edge_references()
            .map(|edge| (edge.weight().from, edge.weight().to))
            .collect();
        edges.sort_unstable();
        edges.dedup();

        for (from, to) in edges {
            let color = if self.on_cycle_edge(cycle, from, to) {
                colors::CYCLE_EDGE
            } else {
                colors::NORMAL_EDGE
            };
            writeln_out!(output, "    P{from} -> P{to} [color=\"{color}\"];")?;
        }

        writeln_out!(output, "}}")?;
        Ok(())
    }

    pub fn render_mermaid(
        &self,
        graph: &DiGraph<ProcessNode, WaitEdge>,
        cycle: Option<&Cycle>,
        output: &mut dyn Write,
    ) -> Result<()> {
        writeln_out!(output, "graph LR")?;

        for index in graph.node_indices() {
            let node = &graph[index];
            writeln_out!(output, "    {}(({}))", node.label(), node.label())?;
        }

        let mut edges: Vec<(ProcessId, ProcessId)> = graph
            .edge_references()
            .map(|edge| (edge.weight().from, edge.weight().to))
            .collect();
        edges.sort_unstable();
        edges.dedup();

        for (from, to) in edges {
            writeln_out!(output, "    P{from} --> P{to}")?;
        }

        for index in graph.node_indices() {
            let node = &graph[index];
            if self.on_cycle(cycle, node.id) {
                writeln_out!(
                    output,
                    "    style {} fill:{},stroke:{}",
                    node.label(),
                    colors::CYCLE_NODE_FILL,
                    colors::CYCLE_NODE_STROKE
                )?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WaitForGraph;
    use crate::detector::detect_cycle;
    use crate::graph::WaitGraphBuilder;

    fn render(
        snapshot: &WaitForGraph,
        highlight: bool,
        format: &str,
    ) -> String {
        let cycle = detect_cycle(snapshot);
        let mut builder = WaitGraphBuilder::new();
        builder.build_from_snapshot(snapshot);

        let renderer = GraphRenderer::new(highlight);
        let mut output = Vec::new();
        match format {
            "ascii" => renderer
                .render_ascii(builder.graph(), cycle.as_ref(), &mut output)
                .unwrap(),
            "dot" => renderer
                .render_dot(builder.graph(), cycle.as_ref(), &mut output)
                .unwrap(),
            _ => renderer
                .render_mermaid(builder.graph(), cycle.as_ref(), &mut output)
                .unwrap(),
        }
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_ascii_lists_waiting_relationships() {
        let snapshot = WaitForGraph::from_adjacency(vec![vec![1], vec![]]).unwrap();

        let ascii = render(&snapshot, true, "ascii");
        assert!(ascii.contains("P0 → P1"));
        assert!(ascii.contains("P1 (not waiting)"));
    }

    #[test]
    fn test_ascii_marks_cycle_members() {
        let snapshot = WaitForGraph::from_adjacency(vec![vec![1], vec![0], vec![]]).unwrap();

        let ascii = render(&snapshot, true, "ascii");
        assert!(ascii.contains("⚠ P0"));
        assert!(ascii.contains("Deadlock cycle: P0 → P1 → P0"));
        assert!(!ascii.contains("⚠ P2"));
    }

    #[test]
    fn test_dot_structure() {
        let snapshot = WaitForGraph::from_adjacency(vec![vec![1], vec![0]]).unwrap();

        let dot = render(&snapshot, true, "dot");
        assert!(dot.starts_with("digraph wait_for {"));
        assert!(dot.contains("P0 -> P1"));
        assert!(dot.contains(colors::CYCLE_EDGE));
        assert!(dot.trim_end().ends_with('}'));
    }

    #[test]
    fn test_dot_without_highlighting_uses_normal_palette() {
        let snapshot = WaitForGraph::from_adjacency(vec![vec![1], vec![0]]).unwrap();

        let dot = render(&snapshot, false, "dot");
        assert!(!dot.contains(colors::CYCLE_EDGE));
        assert!(dot.contains(colors::NORMAL_EDGE));
    }

    #[test]
    fn test_mermaid_structure() {
        let snapshot = WaitForGraph::from_adjacency(vec![vec![1], vec![0]]).unwrap();

        let mermaid = render(&snapshot, true, "mermaid");
        assert!(mermaid.starts_with("graph LR"));
        assert!(mermaid.contains("P0((P0))"));
        assert!(mermaid.contains("P0 --> P1"));
        assert!(mermaid.contains("style P0"));
    }

    #[test]
    fn test_empty_graph_ascii() {
        let snapshot = WaitForGraph::new(0);

        let ascii = render(&snapshot, true, "ascii");
        assert!(ascii.contains("No processes found"));
    }
}
