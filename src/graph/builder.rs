use petgraph::graph::{DiGraph, NodeIndex};

use super::types::{ProcessNode, WaitEdge};
use crate::core::WaitForGraph;

/// Builder for constructing the rendered wait-for graph
///
/// Node indices are allocated in ascending process order, so process `i`
/// always maps to petgraph node index `i` and renderers can iterate
/// deterministically.
pub struct WaitGraphBuilder {
    graph: DiGraph<ProcessNode, WaitEdge>,
    node_indices: Vec<NodeIndex>,
}

impl Default for WaitGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl WaitGraphBuilder {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            node_indices: Vec::new(),
        }
    }

    /// Populate the graph from a validated snapshot
    pub fn build_from_snapshot(&mut self, snapshot: &WaitForGraph) {
        self.graph = DiGraph::new();
        self.node_indices = (0..snapshot.process_count())
            .map(|id| self.graph.add_node(ProcessNode::new(id)))
            .collect();

        for from in 0..snapshot.process_count() {
            for &to in snapshot.neighbors(from) {
                self.graph.add_edge(
                    self.node_indices[from],
                    self.node_indices[to],
                    WaitEdge { from, to },
                );
            }
        }
    }

    pub fn graph(&self) -> &DiGraph<ProcessNode, WaitEdge> {
        &self.graph
    }
}
