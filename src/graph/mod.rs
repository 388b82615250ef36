//! # Graph Construction and Rendering Module
//!
//! This module turns a validated wait-for snapshot into a
//! `petgraph::DiGraph` and renders it in several formats, optionally
//! highlighting a detected deadlock cycle.
//!
//! ## Components
//!
//! - **WaitGraphBuilder**: Constructs the petgraph representation from a
//!   [`WaitForGraph`](crate::core::WaitForGraph)
//! - **GraphRenderer**: Renders graphs as ASCII, Graphviz DOT, or Mermaid
//!
//! ## Example
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
//! renderer.render_dot(builder.graph(), cycle.as_ref(), &mut output)?;
//!
//! let dot = String::from_utf8(output)?;
//! assert!(dot.contains("digraph"));
//! # Ok(())
//! # }
//! ```

mod builder;
mod renderer;
mod types;

// Re-export main types and builders
pub use builder::WaitGraphBuilder;
pub use renderer::GraphRenderer;
pub use types::{ProcessNode, WaitEdge};
