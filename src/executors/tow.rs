//! Tow command executor
//!
//! Victim selection itself is advisory and pure; the iterative resolution
//! loop (terminate the victim, re-scan, repeat) lives here, outside the
//! engine.

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::advisor::suggest_victim;
use crate::cli::OutputFormat;
use crate::config::TowConfig;
use crate::core::{TowOutcome, TowRound, WaitForGraph};
use crate::detector::detect_cycle;
use crate::executors::CommandExecutor;
use crate::reports::{HumanReportGenerator, JsonReportGenerator, ReportGenerator};
use crate::scenario::Scenario;

pub struct TowExecutor;

impl TowExecutor {
    /// Run victim selection, once or until the snapshot is deadlock-free.
    ///
    /// Each round detects a cycle, asks the advisor for a victim, and (in
    /// `all` mode) releases that victim before re-scanning. The loop is
    /// bounded by the process count: every round removes one process, so a
    /// snapshot of n processes resolves in at most n rounds.
    pub fn resolve(
        graph: &WaitForGraph,
        allocation: Option<&[Vec<u64>]>,
        all: bool,
    ) -> TowOutcome {
        let processes = graph.process_count();
        let mut current = graph.clone();
        let mut rounds = Vec::new();

        while let Some(cycle) = detect_cycle(&current) {
            let suggestion = suggest_victim(&cycle, allocation);
            let victim = suggestion.victim;
            rounds.push(TowRound { cycle, suggestion });
            current = current.release(victim);

            if !all || rounds.len() >= processes {
                break;
            }
        }

        let cleared = detect_cycle(&current).is_none();

        TowOutcome {
            processes,
            rounds,
            cleared,
        }
    }
}

impl CommandExecutor for TowExecutor {
    type Config = TowConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Selecting tow victims for '{}'...\n",
            style("🛻").cyan(),
            config.scenario.display()
        );

        let scenario = Scenario::parse_file(&config.scenario)
            .wrap_err("Failed to load scenario")?;
        let graph = scenario
            .wait_for_graph()
            .into_diagnostic()
            .wrap_err("Failed to build wait-for graph")?;
        let allocation = scenario
            .allocation_matrix()
            .into_diagnostic()
            .wrap_err("Failed to parse allocation matrix")?;

        let outcome = Self::resolve(&graph, allocation.as_deref(), config.all);

        let report_result = match config.format {
            OutputFormat::Human => HumanReportGenerator::new().generate_report(&outcome),
            OutputFormat::Json => JsonReportGenerator::new().generate_report(&outcome),
        };

        match report_result {
            Ok(report) => print!("{report}"),
            Err(e) => {
                return Err(e)
                    .into_diagnostic()
                    .wrap_err("Failed to generate report");
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_single_round_leaves_graph_alone() {
        let graph = WaitForGraph::from_adjacency(vec![vec![1], vec![0]]).unwrap();

        let outcome = TowExecutor::resolve(&graph, None, false);

        assert_eq!(outcome.rounds.len(), 1);
        // One round on a single two-process cycle already clears it.
        assert!(outcome.cleared);
    }

    #[test]
    fn test_loop_resolves_disjoint_cycles() {
        // Two independent cycles: 0 ↔ 1 and 2 ↔ 3.
        let graph =
            WaitForGraph::from_adjacency(vec![vec![1], vec![0], vec![3], vec![2]]).unwrap();

        let outcome = TowExecutor::resolve(&graph, None, true);

        assert_eq!(outcome.rounds.len(), 2);
        assert!(outcome.cleared);
    }

    #[test]
    fn test_no_deadlock_means_no_rounds() {
        let graph = WaitForGraph::from_adjacency(vec![vec![1], vec![]]).unwrap();

        let outcome = TowExecutor::resolve(&graph, None, true);

        assert!(outcome.rounds.is_empty());
        assert!(outcome.cleared);
    }

    #[test]
    fn test_allocation_guides_victim_choice() {
        let graph = WaitForGraph::from_adjacency(vec![vec![1], vec![2], vec![0]]).unwrap();
        let allocation = vec![vec![4], vec![1], vec![6]];

        let outcome = TowExecutor::resolve(&graph, Some(&allocation), false);

        assert_eq!(outcome.rounds[0].suggestion.victim, 1);
    }
}
