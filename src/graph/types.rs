//! Core graph types
//!
//! This module contains the fundamental data structures used in the
//! rendered wait-for graph.

use crate::core::ProcessId;

/// A process node in the rendered wait-for graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessNode {
    pub id: ProcessId,
}

impl ProcessNode {
    pub fn new(id: ProcessId) -> Self {
        Self { id }
    }

    /// Display label ("P0", "P1", ...)
    pub fn label(&self) -> String {
        format!("P{}", self.id)
    }
}

/// A wait-for edge between two processes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitEdge {
    pub from: ProcessId,
    pub to: ProcessId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_label() {
        assert_eq!(ProcessNode::new(7).label(), "P7");
    }
}
