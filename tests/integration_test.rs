//! Integration tests for gridlock using the library interface

use gridlock::advisor::suggest_victim;
use gridlock::banker::check_safety;
use gridlock::core::{Cycle, ResourceState, WaitForGraph};
use gridlock::detector::detect_cycle;
use gridlock::error::GridlockError;
use gridlock::parser::{parse_matrix, parse_vector, parse_wait_for};
use pretty_assertions::assert_eq;

fn lines(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

/// The classic textbook Banker's state: five processes, three resource
/// types, safe with [3, 3, 2] available.
fn textbook_state(available: Vec<u64>) -> ResourceState {
    ResourceState::new(
        available,
        vec![
            vec![7, 5, 3],
            vec![3, 2, 2],
            vec![9, 0, 2],
            vec![2, 2, 2],
            vec![4, 3, 3],
        ],
        vec![
            vec![0, 1, 0],
            vec![2, 0, 0],
            vec![3, 0, 2],
            vec![2, 1, 1],
            vec![0, 0, 2],
        ],
    )
    .unwrap()
}

#[test]
fn detects_three_process_cycle_end_to_end() {
    let graph = parse_wait_for(&lines(&["1", "2", "0"]), 3).unwrap();

    let cycle = detect_cycle(&graph).unwrap();
    assert_eq!(cycle.nodes(), &[0, 1, 2, 0]);
}

#[test]
fn reports_no_cycle_for_acyclic_snapshot() {
    let graph = parse_wait_for(&lines(&["1", ""]), 2).unwrap();

    assert_eq!(detect_cycle(&graph), None);
}

#[test]
fn detected_cycles_are_made_of_real_edges() {
    let snapshots = [
        vec![vec![1], vec![2], vec![0]],
        vec![vec![1, 2], vec![3], vec![3], vec![1]],
        vec![vec![0]],
        vec![vec![], vec![2, 3], vec![1], vec![]],
    ];

    for edges in snapshots {
        let graph = WaitForGraph::from_adjacency(edges).unwrap();
        if let Some(cycle) = detect_cycle(&graph) {
            assert!(cycle.len() >= 2);
            assert_eq!(cycle.nodes().first(), cycle.nodes().last());
            for pair in cycle.nodes().windows(2) {
                assert!(graph.has_edge(pair[0], pair[1]));
            }
        }
    }
}

#[test]
fn textbook_banker_state_is_safe_and_replayable() {
    let state = textbook_state(vec![3, 3, 2]);

    let report = check_safety(&state).unwrap();
    assert!(report.safe);

    // Replay the witnessing order: at every step the selected process's
    // whole need must fit in the free pool.
    let order = report.order.unwrap();
    let need = state.need().unwrap();
    let mut work = state.available().to_vec();
    for &i in &order {
        for (j, needed) in need[i].iter().enumerate() {
            assert!(*needed <= work[j]);
        }
        for (j, held) in state.allocation()[i].iter().enumerate() {
            work[j] += held;
        }
    }

    let mut sorted = order;
    sorted.sort_unstable();
    assert_eq!(sorted, vec![0, 1, 2, 3, 4]);
}

#[test]
fn starved_banker_state_is_unsafe() {
    let report = check_safety(&textbook_state(vec![0, 0, 0])).unwrap();

    assert!(!report.safe);
    assert_eq!(report.order, None);
}

#[test]
fn safety_check_is_deterministic() {
    let first = check_safety(&textbook_state(vec![3, 3, 2])).unwrap();
    let second = check_safety(&textbook_state(vec![3, 3, 2])).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.order, Some(vec![1, 3, 0, 2, 4]));
}

#[test]
fn victim_selection_prefers_lightest_holder() {
    let allocation = parse_matrix(&lines(&["4 0", "0 4", "1 0", "3 3"]), 4, 2).unwrap();
    let cycle = Cycle::new(vec![1, 2, 3, 1]);

    let suggestion = suggest_victim(&cycle, Some(&allocation));

    // Totals in the cycle: P1 holds 4, P2 holds 1, P3 holds 6.
    assert_eq!(suggestion.victim, 2);
    assert!(suggestion.reason.contains("fewest resources"));
    assert!(suggestion.reason.contains("(1 total)"));
}

#[test]
fn full_pipeline_parse_detect_advise_release() {
    let graph = parse_wait_for(&lines(&["1", "2", "0", ""]), 4).unwrap();

    let cycle = detect_cycle(&graph).expect("snapshot deadlocks");
    let suggestion = suggest_victim(&cycle, None);
    let released = graph.release(suggestion.victim);

    assert_eq!(detect_cycle(&released), None);
}

#[test]
fn vector_round_trips_through_its_own_rendering() {
    let vector = parse_vector("3 3 2", 3).unwrap();
    let rendered = vector
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(" ");

    assert_eq!(parse_vector(&rendered, 3).unwrap(), vector);
}

#[test]
fn parse_errors_name_the_offending_token() {
    let result = parse_wait_for(&lines(&["1", "0 banana"]), 2);

    match result {
        Err(GridlockError::ParseError { token, line }) => {
            assert_eq!(token, "banana");
            assert_eq!(line, 2);
        }
        other => panic!("Expected ParseError, got {other:?}"),
    }
}

#[test]
fn shape_errors_are_branchable_by_kind() {
    assert!(matches!(
        parse_vector("1 2", 3),
        Err(GridlockError::VectorShape { .. })
    ));
    assert!(matches!(
        parse_matrix(&lines(&["1 2 3"]), 1, 2),
        Err(GridlockError::RowShape { .. })
    ));
    assert!(matches!(
        parse_wait_for(&lines(&["7"]), 1),
        Err(GridlockError::NeighborOutOfRange { .. })
    ));
}

#[test]
fn negative_need_is_a_semantic_error() {
    let state = ResourceState::new(vec![1, 1], vec![vec![1, 1]], vec![vec![2, 0]]).unwrap();

    assert!(matches!(
        check_safety(&state),
        Err(GridlockError::NegativeNeed {
            process: 0,
            resource: 0
        })
    ));
}

#[test]
fn self_loop_is_a_valid_two_entry_cycle() {
    let graph = parse_wait_for(&lines(&["0"]), 1).unwrap();

    let cycle = detect_cycle(&graph).unwrap();
    assert_eq!(cycle.nodes(), &[0, 0]);

    let suggestion = suggest_victim(&cycle, None);
    assert_eq!(suggestion.victim, 0);
}

#[test]
fn zero_process_safety_check_is_trivially_safe() {
    let state = ResourceState::new(vec![5], vec![], vec![]).unwrap();

    let report = check_safety(&state).unwrap();
    assert!(report.safe);
    assert_eq!(report.order, Some(vec![]));
}
