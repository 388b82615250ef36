//! # Cycle Detection Module
//!
//! This module implements deadlock detection over a wait-for graph.
//!
//! ## Algorithm
//!
//! A depth-first traversal starts from every unvisited process in
//! ascending identifier order, tracking the current path and an on-stack
//! set. The first edge that reaches a process already on the stack proves
//! a deadlock; the reported cycle is the path suffix from that process
//! through the current one, closed by repeating it. Runs in O(n + E).
//!
//! The traversal is iterative (an explicit stack of frames rather than
//! recursion) so deep chains of waiting processes cannot exhaust the call
//! stack, but the reported cycle is identical to what the recursive
//! formulation would find: only the *first* cycle in visitation order is
//! returned, with neighbors taken in adjacency-list order. Any cycle is
//! sufficient evidence of deadlock, so no attempt is made to find the
//! shortest cycle or all of them.
//!
//! ## Example
//!
//! ```
//! use gridlock::core::WaitForGraph;
//! use gridlock::detector::detect_cycle;
//!
//! // P0 waits for P1, P1 waits for P2, P2 waits for P0
//! let graph = WaitForGraph::from_adjacency(vec![vec![1], vec![2], vec![0]]).unwrap();
//!
//! let cycle = detect_cycle(&graph).expect("this graph deadlocks");
//! assert_eq!(cycle.nodes(), &[0, 1, 2, 0]);
//! ```

mod detector_impl;

pub use detector_impl::*;
