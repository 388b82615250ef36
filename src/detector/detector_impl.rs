use crate::core::{Cycle, ProcessId, WaitForGraph};

/// One suspended traversal position: the process being explored and the
/// index of the next neighbor to visit
struct Frame {
    node: ProcessId,
    next_neighbor: usize,
}

/// Find the first deadlock cycle in a wait-for graph, or `None` if the
/// snapshot is deadlock-free.
///
/// Total function: detection itself cannot fail once the graph has been
/// validated, and "no cycle" is an ordinary outcome. The input graph is
/// never mutated; all traversal state is local to the call.
pub fn detect_cycle(graph: &WaitForGraph) -> Option<Cycle> {
    let n = graph.process_count();
    let mut visited = vec![false; n];
    let mut on_stack = vec![false; n];
    let mut path: Vec<ProcessId> = Vec::new();
    let mut frames: Vec<Frame> = Vec::new();

    for root in 0..n {
        if visited[root] {
            continue;
        }

        visited[root] = true;
        on_stack[root] = true;
        path.push(root);
        frames.push(Frame {
            node: root,
            next_neighbor: 0,
        });

        while let Some(frame) = frames.last_mut() {
            let node = frame.node;
            let neighbors = graph.neighbors(node);

            if frame.next_neighbor < neighbors.len() {
                let neighbor = neighbors[frame.next_neighbor];
                frame.next_neighbor += 1;

                if !visited[neighbor] {
                    visited[neighbor] = true;
                    on_stack[neighbor] = true;
                    path.push(neighbor);
                    frames.push(Frame {
                        node: neighbor,
                        next_neighbor: 0,
                    });
                } else if on_stack[neighbor] {
                    // Back-edge to the active path: the cycle is the path
                    // suffix from the neighbor's occurrence through `node`,
                    // closed by repeating the neighbor.
                    let start = path
                        .iter()
                        .position(|&p| p == neighbor)
                        .unwrap_or_default();
                    let mut nodes = path[start..].to_vec();
                    nodes.push(neighbor);
                    return Some(Cycle::new(nodes));
                }
            } else {
                on_stack[node] = false;
                path.pop();
                frames.pop();
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn graph(edges: Vec<Vec<ProcessId>>) -> WaitForGraph {
        WaitForGraph::from_adjacency(edges).unwrap()
    }

    #[test]
    fn test_three_node_cycle() {
        let g = graph(vec![vec![1], vec![2], vec![0]]);

        let cycle = detect_cycle(&g).unwrap();
        assert_eq!(cycle.nodes(), &[0, 1, 2, 0]);
    }

    #[test]
    fn test_acyclic_chain() {
        let g = graph(vec![vec![1], vec![]]);

        assert_eq!(detect_cycle(&g), None);
    }

    #[test]
    fn test_empty_graph() {
        let g = WaitForGraph::new(0);

        assert_eq!(detect_cycle(&g), None);
    }

    #[test]
    fn test_self_loop_closes_as_pair() {
        let g = graph(vec![vec![], vec![1], vec![]]);

        let cycle = detect_cycle(&g).unwrap();
        assert_eq!(cycle.nodes(), &[1, 1]);
    }

    #[test]
    fn test_duplicate_edges_are_harmless() {
        let g = graph(vec![vec![1, 1], vec![0, 0]]);

        let cycle = detect_cycle(&g).unwrap();
        assert_eq!(cycle.nodes(), &[0, 1, 0]);
    }

    #[test]
    fn test_cross_edge_to_finished_node_is_not_a_cycle() {
        // Diamond: 0 → 1 → 3, 0 → 2 → 3. Node 3 is visited twice but
        // never while on the stack.
        let g = graph(vec![vec![1, 2], vec![3], vec![3], vec![]]);

        assert_eq!(detect_cycle(&g), None);
    }

    #[test]
    fn test_first_cycle_in_visitation_order_wins() {
        // Two disjoint cycles; the one reachable from the lowest root is
        // reported.
        let g = graph(vec![vec![1], vec![0], vec![3], vec![2]]);

        let cycle = detect_cycle(&g).unwrap();
        assert_eq!(cycle.nodes(), &[0, 1, 0]);
    }

    #[test]
    fn test_cycle_not_reachable_from_first_root() {
        // 0 → 1 is a dead end; the cycle lives in the second component.
        let g = graph(vec![vec![1], vec![], vec![3], vec![4], vec![2]]);

        let cycle = detect_cycle(&g).unwrap();
        assert_eq!(cycle.nodes(), &[2, 3, 4, 2]);
    }

    #[test]
    fn test_cycle_entered_partway_down_the_path() {
        // Path 0 → 1 → 2 → 3 → 1: the reported cycle starts at 1, not 0.
        let g = graph(vec![vec![1], vec![2], vec![3], vec![1]]);

        let cycle = detect_cycle(&g).unwrap();
        assert_eq!(cycle.nodes(), &[1, 2, 3, 1]);
    }

    #[test]
    fn test_every_consecutive_pair_is_a_real_edge() {
        let g = graph(vec![
            vec![3],
            vec![0],
            vec![1, 4],
            vec![2],
            vec![],
        ]);

        let cycle = detect_cycle(&g).unwrap();
        assert_eq!(*cycle.nodes().first().unwrap(), *cycle.nodes().last().unwrap());
        assert!(cycle.len() >= 2);
        for pair in cycle.nodes().windows(2) {
            assert!(g.has_edge(pair[0], pair[1]), "{} → {} is not an edge", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_deep_chain_does_not_overflow() {
        // A long dependency chain whose tail loops back to the head.
        let n = 100_000;
        let mut edges: Vec<Vec<ProcessId>> = (0..n).map(|i| vec![(i + 1) % n]).collect();
        edges[n - 1] = vec![0];
        let g = WaitForGraph::from_adjacency(edges).unwrap();

        let cycle = detect_cycle(&g).unwrap();
        assert_eq!(cycle.len(), n + 1);
        assert_eq!(*cycle.nodes().first().unwrap(), 0);
        assert_eq!(*cycle.nodes().last().unwrap(), 0);
    }
}
