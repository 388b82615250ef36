//! Scan command executor

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::advisor::suggest_victim;
use crate::cli::OutputFormat;
use crate::config::ScanConfig;
use crate::core::ScanOutcome;
use crate::detector::detect_cycle;
use crate::executors::CommandExecutor;
use crate::reports::{HumanReportGenerator, JsonReportGenerator, ReportGenerator};
use crate::scenario::Scenario;

pub struct ScanExecutor;

impl CommandExecutor for ScanExecutor {
    type Config = ScanConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Scanning '{}' for deadlock...\n",
            style("🚦").cyan(),
            config.scenario.display()
        );

        let scenario = Scenario::parse_file(&config.scenario)
            .wrap_err("Failed to load scenario")?;
        let graph = scenario
            .wait_for_graph()
            .into_diagnostic()
            .wrap_err("Failed to build wait-for graph")?;

        let cycle = detect_cycle(&graph);

        let suggestion = match (&cycle, config.resolve) {
            (Some(cycle), true) => {
                let allocation = scenario
                    .allocation_matrix()
                    .into_diagnostic()
                    .wrap_err("Failed to parse allocation matrix")?;
                Some(suggest_victim(cycle, allocation.as_deref()))
            }
            _ => None,
        };

        let outcome = ScanOutcome {
            processes: graph.process_count(),
            edges: graph.edge_count(),
            cycle,
            suggestion,
        };

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

        // Exit with error code if a deadlock was found and requested
        if config.error_on_deadlock && outcome.cycle.is_some() {
            std::process::exit(1);
        }

        Ok(())
    }
}
