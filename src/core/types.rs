//! Core type definitions
//!
//! This module contains the basic data structures used throughout the
//! application, with minimal logic - focusing on data representation.
//! Every type is a plain value owned by a single analysis call; nothing
//! here is shared or mutated across calls.

use crate::error::GridlockError;

/// Identifier of a process within one snapshot: a positional index in
/// `[0, n)` where `n` is the snapshot's process count.
pub type ProcessId = usize;

/// A wait-for graph: process `i` is blocked waiting on every process in
/// `edges[i]`.
///
/// The adjacency structure is sized exactly `n` and every neighbor is
/// range-checked when the graph is built, so traversal never has to
/// re-validate identifiers. Self-loops and duplicate edges are allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitForGraph {
    edges: Vec<Vec<ProcessId>>,
}

impl WaitForGraph {
    /// Create a graph of `n` processes with no wait-for edges
    pub fn new(processes: usize) -> Self {
        Self {
            edges: vec![Vec::new(); processes],
        }
    }

    /// Build a graph from a raw adjacency list, validating that every
    /// neighbor identifier lies in `[0, n)`
    pub fn from_adjacency(edges: Vec<Vec<ProcessId>>) -> Result<Self, GridlockError> {
        let processes = edges.len();
        for (line, neighbors) in edges.iter().enumerate() {
            for &neighbor in neighbors {
                if neighbor >= processes {
                    return Err(GridlockError::NeighborOutOfRange {
                        line: line + 1,
                        neighbor,
                        processes,
                    });
                }
            }
        }
        Ok(Self { edges })
    }

    /// Add a wait-for edge `from → to`
    pub fn add_edge(&mut self, from: ProcessId, to: ProcessId) -> Result<(), GridlockError> {
        let processes = self.edges.len();
        if from >= processes {
            return Err(GridlockError::NeighborOutOfRange {
                line: from + 1,
                neighbor: from,
                processes,
            });
        }
        if to >= processes {
            return Err(GridlockError::NeighborOutOfRange {
                line: from + 1,
                neighbor: to,
                processes,
            });
        }
        self.edges[from].push(to);
        Ok(())
    }

    /// Number of processes in the snapshot
    pub fn process_count(&self) -> usize {
        self.edges.len()
    }

    /// Total number of wait-for edges (duplicates counted)
    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(Vec::len).sum()
    }

    /// Processes `process` is waiting for, in input order
    pub fn neighbors(&self, process: ProcessId) -> &[ProcessId] {
        &self.edges[process]
    }

    /// Check whether the edge `from → to` exists
    pub fn has_edge(&self, from: ProcessId, to: ProcessId) -> bool {
        self.edges
            .get(from)
            .is_some_and(|neighbors| neighbors.contains(&to))
    }

    /// A copy of this graph with `victim` terminated: it no longer waits
    /// for anyone and nobody waits for it. Identifiers keep their positions
    /// so cycle reports from successive scans stay comparable.
    pub fn release(&self, victim: ProcessId) -> Self {
        let edges = self
            .edges
            .iter()
            .enumerate()
            .map(|(process, neighbors)| {
                if process == victim {
                    Vec::new()
                } else {
                    neighbors
                        .iter()
                        .copied()
                        .filter(|&neighbor| neighbor != victim)
                        .collect()
                }
            })
            .collect();
        Self { edges }
    }
}

/// A deadlock cycle: an ordered sequence of process identifiers where
/// consecutive entries are connected by wait-for edges and the first and
/// last entries are equal. A self-loop closes as `[p, p]`, so the length
/// is always at least 2.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cycle {
    nodes: Vec<ProcessId>,
}

impl Cycle {
    pub fn new(nodes: Vec<ProcessId>) -> Self {
        debug_assert!(nodes.len() >= 2, "a cycle closes with at least two entries");
        debug_assert_eq!(nodes.first(), nodes.last(), "a cycle must close on itself");
        Self { nodes }
    }

    /// The full closed sequence, including the repeated closing entry
    pub fn nodes(&self) -> &[ProcessId] {
        &self.nodes
    }

    /// The participating processes, in cycle order, without the closing
    /// repetition
    pub fn participants(&self) -> &[ProcessId] {
        &self.nodes[..self.nodes.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, process: ProcessId) -> bool {
        self.participants().contains(&process)
    }
}

impl std::fmt::Display for Cycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rendered: Vec<String> = self.nodes.iter().map(|p| format!("P{p}")).collect();
        write!(f, "{}", rendered.join(" → "))
    }
}

/// Snapshot of resource state for the safety checker: `available` has one
/// entry per resource type, `max` and `allocation` are n×m matrices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceState {
    available: Vec<u64>,
    max: Vec<Vec<u64>>,
    allocation: Vec<Vec<u64>>,
}

impl ResourceState {
    /// Assemble a state snapshot, validating that every matrix agrees with
    /// the dimensions implied by `available` (m) and `max` (n)
    pub fn new(
        available: Vec<u64>,
        max: Vec<Vec<u64>>,
        allocation: Vec<Vec<u64>>,
    ) -> Result<Self, GridlockError> {
        let processes = max.len();
        let resources = available.len();

        if allocation.len() != processes {
            return Err(GridlockError::RowCount {
                expected: processes,
                actual: allocation.len(),
            });
        }
        for (row, values) in max.iter().chain(allocation.iter()).enumerate() {
            if values.len() != resources {
                return Err(GridlockError::RowShape {
                    row: row % processes.max(1) + 1,
                    expected: resources,
                    actual: values.len(),
                });
            }
        }

        Ok(Self {
            available,
            max,
            allocation,
        })
    }

    pub fn process_count(&self) -> usize {
        self.max.len()
    }

    pub fn resource_count(&self) -> usize {
        self.available.len()
    }

    pub fn available(&self) -> &[u64] {
        &self.available
    }

    pub fn max(&self) -> &[Vec<u64>] {
        &self.max
    }

    pub fn allocation(&self) -> &[Vec<u64>] {
        &self.allocation
    }

    /// Derive the Need matrix (`Max - Allocation`).
    ///
    /// A negative entry means a process holds more than it declared it
    /// would ever need; that is a semantic error in the snapshot, not a
    /// runtime condition to clamp.
    pub fn need(&self) -> Result<Vec<Vec<u64>>, GridlockError> {
        self.max
            .iter()
            .zip(self.allocation.iter())
            .enumerate()
            .map(|(process, (max_row, alloc_row))| {
                max_row
                    .iter()
                    .zip(alloc_row.iter())
                    .enumerate()
                    .map(|(resource, (&max, &held))| {
                        max.checked_sub(held)
                            .ok_or(GridlockError::NegativeNeed { process, resource })
                    })
                    .collect()
            })
            .collect()
    }
}

/// Verdict of the safety checker: `order` is a witnessing execution order
/// when the state is safe, `None` otherwise
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafetyReport {
    pub safe: bool,
    pub order: Option<Vec<ProcessId>>,
}

/// Advisory output of victim selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VictimSuggestion {
    pub victim: ProcessId,
    pub reason: String,
}

/// Result of one deadlock scan, as consumed by the report generators
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    pub processes: usize,
    pub edges: usize,
    pub cycle: Option<Cycle>,
    pub suggestion: Option<VictimSuggestion>,
}

/// Result of one safety check, as consumed by the report generators
#[derive(Debug, Clone)]
pub struct ClearanceOutcome {
    pub processes: usize,
    pub resources: usize,
    pub report: SafetyReport,
}

/// One round of the iterative resolution loop: the cycle that was found
/// and the victim chosen to break it
#[derive(Debug, Clone)]
pub struct TowRound {
    pub cycle: Cycle,
    pub suggestion: VictimSuggestion,
}

/// Result of victim selection, possibly over several resolution rounds
#[derive(Debug, Clone)]
pub struct TowOutcome {
    pub processes: usize,
    pub rounds: Vec<TowRound>,
    pub cleared: bool,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_graph_rejects_out_of_range_neighbor() {
        let result = WaitForGraph::from_adjacency(vec![vec![1], vec![5]]);

        match result {
            Err(GridlockError::NeighborOutOfRange {
                line,
                neighbor,
                processes,
            }) => {
                assert_eq!(line, 2);
                assert_eq!(neighbor, 5);
                assert_eq!(processes, 2);
            }
            other => panic!("Expected NeighborOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn test_graph_accepts_self_loops_and_duplicates() {
        let graph = WaitForGraph::from_adjacency(vec![vec![0, 1, 1], vec![]]).unwrap();

        assert_eq!(graph.neighbors(0), &[0, 1, 1]);
        assert_eq!(graph.edge_count(), 3);
        assert!(graph.has_edge(0, 0));
    }

    #[test]
    fn test_release_drops_both_edge_directions() {
        let graph = WaitForGraph::from_adjacency(vec![vec![1], vec![2], vec![0, 1]]).unwrap();
        let released = graph.release(1);

        assert_eq!(released.neighbors(0), &[] as &[ProcessId]);
        assert_eq!(released.neighbors(1), &[] as &[ProcessId]);
        assert_eq!(released.neighbors(2), &[0]);
        // The original is untouched
        assert_eq!(graph.neighbors(0), &[1]);
    }

    #[test]
    fn test_cycle_display_and_participants() {
        let cycle = Cycle::new(vec![0, 1, 2, 0]);

        assert_eq!(cycle.to_string(), "P0 → P1 → P2 → P0");
        assert_eq!(cycle.participants(), &[0, 1, 2]);
        assert!(cycle.contains(2));
        assert!(!cycle.contains(3));
    }

    #[test]
    fn test_need_matrix() {
        let state = ResourceState::new(
            vec![3, 3, 2],
            vec![vec![7, 5, 3], vec![3, 2, 2]],
            vec![vec![0, 1, 0], vec![2, 0, 0]],
        )
        .unwrap();

        let need = state.need().unwrap();
        assert_eq!(need, vec![vec![7, 4, 3], vec![1, 2, 2]]);
    }

    #[test]
    fn test_need_negative_is_semantic_error() {
        let state = ResourceState::new(
            vec![1],
            vec![vec![2], vec![1]],
            vec![vec![0], vec![3]],
        )
        .unwrap();

        match state.need() {
            Err(GridlockError::NegativeNeed { process, resource }) => {
                assert_eq!(process, 1);
                assert_eq!(resource, 0);
            }
            other => panic!("Expected NegativeNeed, got {other:?}"),
        }
    }

    #[test]
    fn test_resource_state_shape_validation() {
        let result = ResourceState::new(vec![1, 1], vec![vec![1, 1]], vec![vec![1]]);

        assert!(matches!(result, Err(GridlockError::RowShape { .. })));

        let result = ResourceState::new(vec![1], vec![vec![1], vec![1]], vec![vec![1]]);
        assert!(matches!(
            result,
            Err(GridlockError::RowCount {
                expected: 2,
                actual: 1
            })
        ));
    }
}
