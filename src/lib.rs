//! # Gridlock - Deadlock Analysis for Process/Resource Snapshots
//!
//! Gridlock analyzes snapshots of blocked processes and held resources.
//! It detects deadlock cycles in wait-for graphs, decides resource-state
//! safety with the Banker's Algorithm, and suggests which process to
//! terminate to break a detected jam.
//!
//! ## Main Components
//!
//! - **Parser**: Validates loosely-typed textual input into graph and
//!   matrix structures
//! - **Detector**: DFS-based cycle detection over the wait-for graph
//! - **Banker**: Banker's Algorithm safety checking with a witnessing
//!   execution order
//! - **Advisor**: Victim selection to break a detected cycle
//! - **Reports**: Human-readable and machine-readable reports
//!
//! Every analysis is a synchronous, pure computation over a caller-owned
//! snapshot: nothing is persisted, shared, or mutated across calls.
//!
//! ## Usage
//!
//! ### Example: Detecting and Resolving a Deadlock
//!
//! ```
//! use gridlock::advisor::suggest_victim;
//! use gridlock::detector::detect_cycle;
//! use gridlock::parser::parse_wait_for;
//!
//! # fn main() -> Result<(), gridlock::error::GridlockError> {
//! // One line per process: the processes it waits for.
//! let lines: Vec<String> = ["1", "2", "0"].iter().map(|s| s.to_string()).collect();
//! let graph = parse_wait_for(&lines, 3)?;
//!
//! // P0 → P1 → P2 → P0: a deadlock.
//! let cycle = detect_cycle(&graph).expect("this snapshot deadlocks");
//! assert_eq!(cycle.nodes(), &[0, 1, 2, 0]);
//!
//! // Pick a process to terminate. Without allocation data a fixed
//! // positional heuristic applies.
//! let suggestion = suggest_victim(&cycle, None);
//! assert_eq!(suggestion.victim, 2);
//!
//! // Removing the victim and re-scanning is the caller's job.
//! let released = graph.release(suggestion.victim);
//! assert!(detect_cycle(&released).is_none());
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Checking State Safety
//!
//! ```
//! use gridlock::banker::check_safety;
//! use gridlock::core::ResourceState;
//!
//! # fn main() -> Result<(), gridlock::error::GridlockError> {
//! let state = ResourceState::new(
//!     vec![3, 3, 2],
//!     vec![
//!         vec![7, 5, 3],
//!         vec![3, 2, 2],
//!         vec![9, 0, 2],
//!         vec![2, 2, 2],
//!         vec![4, 3, 3],
//!     ],
//!     vec![
//!         vec![0, 1, 0],
//!         vec![2, 0, 0],
//!         vec![3, 0, 2],
//!         vec![2, 1, 1],
//!         vec![0, 0, 2],
//!     ],
//! )?;
//!
//! let report = check_safety(&state)?;
//! assert!(report.safe);
//! // Deterministic: the lowest satisfiable index always runs first.
//! assert_eq!(report.order, Some(vec![1, 3, 0, 2, 4]));
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Rendering the Wait-For Graph
//!
//! ```
//! use gridlock::core::WaitForGraph;
//! use gridlock::detector::detect_cycle;
//! use gridlock::graph::{GraphRenderer, WaitGraphBuilder};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let snapshot = WaitForGraph::from_adjacency(vec![vec![1], vec![0], vec![]])?;
//! let cycle = detect_cycle(&snapshot);
//!
//! let mut builder = WaitGraphBuilder::new();
//! builder.build_from_snapshot(&snapshot);
//!
//! let renderer = GraphRenderer::new(true);
//! let mut output = Vec::new();
//! renderer.render_mermaid(builder.graph(), cycle.as_ref(), &mut output)?;
//!
//! let mermaid = String::from_utf8(output)?;
//! assert!(mermaid.starts_with("graph LR"));
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod utils;

// Public modules
pub mod advisor;
pub mod banker;
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod core;
pub mod detector;
pub mod error;
pub mod executors;
pub mod graph;
pub mod parser;
pub mod reports;
pub mod scenario;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    execute_command(cli.command)
}
