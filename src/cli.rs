use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::common::{CommonArgs, FormatArgs};

#[derive(Parser)]
#[command(
    name = "gridlock",
    about = "🚦 Deadlock detection, avoidance, and resolution for process/resource snapshots",
    long_about = "gridlock analyzes snapshots of blocked processes and held resources. It finds \
                  deadlock cycles in wait-for graphs, checks resource states for safety with the \
                  Banker's Algorithm, and suggests which process to terminate to clear a jam.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan the intersection for traffic locked bumper-to-bumper
    ///
    /// Reads the wait-for graph from a scenario file and searches it for a
    /// deadlock cycle. A cycle means every process in it is blocked on
    /// another member of the cycle and none can ever proceed. With
    /// --resolve, also suggests which process to terminate.
    #[command(
        long_about = "Detect deadlock in a wait-for snapshot. The scenario's waits_for lines are \
                      parsed into a directed graph where an edge P → Q means process P is blocked \
                      on a resource held by Q. A depth-first traversal reports the first cycle it \
                      reaches, which is sufficient evidence of deadlock; absence of any cycle \
                      proves the snapshot deadlock-free."
    )]
    Scan {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        format: FormatArgs,

        /// Suggest a termination victim when a deadlock is found
        #[arg(long, env = "GRIDLOCK_RESOLVE")]
        resolve: bool,

        /// Exit with error code if a deadlock is found
        #[arg(long, env = "GRIDLOCK_ERROR_ON_DEADLOCK")]
        error_on_deadlock: bool,
    },

    /// Check whether the traffic controller can wave everyone through
    ///
    /// Runs the Banker's Algorithm over the scenario's available/max/
    /// allocation state. A safe state comes with a witnessing execution
    /// order; an unsafe state could deadlock under some future request
    /// pattern within the declared maxima.
    #[command(
        long_about = "Decide state safety with the Banker's Algorithm. The Need matrix is derived \
                      as Max - Allocation (a negative entry is rejected as a semantic error), \
                      then the simulation repeatedly completes the lowest-numbered process whose \
                      remaining need fits in the free pool, releasing its allocation. If all \
                      processes finish the state is safe and the completion order is reported; if \
                      a full scan grants nothing the state is unsafe."
    )]
    Clearance {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        format: FormatArgs,

        /// Exit with error code if the state is unsafe
        #[arg(long, env = "GRIDLOCK_ERROR_ON_UNSAFE")]
        error_on_unsafe: bool,
    },

    /// Pick which car to tow away to get traffic moving again
    ///
    /// Detects a deadlock cycle and suggests one process to terminate. If
    /// the scenario carries an allocation matrix, the process holding the
    /// fewest resource units is picked; otherwise a fixed positional
    /// heuristic applies. With --all, keeps towing until no cycle remains.
    #[command(
        long_about = "Suggest a termination victim for a detected deadlock. Victim selection is \
                      advisory: the snapshot itself is never modified. With --all, the executor \
                      drives the full resolution loop - remove the suggested victim from the \
                      graph, re-scan, and repeat until the snapshot is deadlock-free - reporting \
                      every round."
    )]
    Tow {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        format: FormatArgs,

        /// Keep selecting victims until no deadlock remains
        #[arg(long, env = "GRIDLOCK_TOW_ALL")]
        all: bool,
    },

    /// Sketch the wait-for graph for the incident report
    ///
    /// Renders the scenario's wait-for graph as ASCII art, a Graphviz DOT
    /// file, or a Mermaid diagram, highlighting any detected deadlock
    /// cycle.
    #[command(
        long_about = "Generate a visual representation of the wait-for graph in ASCII, Graphviz \
                      DOT, or Mermaid format. Processes on a detected deadlock cycle are \
                      highlighted so the jam is visible at a glance. Useful for documentation and \
                      for debugging scenarios too tangled to read as adjacency lists."
    )]
    Sketch {
        #[command(flatten)]
        common: CommonArgs,

        /// Graph format
        #[arg(
            short,
            long,
            value_enum,
            default_value = "ascii",
            env = "GRIDLOCK_GRAPH_FORMAT"
        )]
        format: GraphFormat,

        /// Output file (stdout if not specified)
        #[arg(short, long, env = "GRIDLOCK_OUTPUT")]
        output: Option<PathBuf>,

        /// Highlight the detected deadlock cycle in the graph
        #[arg(long, default_value = "true", env = "GRIDLOCK_HIGHLIGHT_CYCLE")]
        highlight_cycle: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum GraphFormat {
    Ascii,
    Mermaid,
    Dot,
}
