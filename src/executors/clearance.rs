//! Clearance command executor

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::banker::check_safety;
use crate::cli::OutputFormat;
use crate::config::ClearanceConfig;
use crate::core::ClearanceOutcome;
use crate::executors::CommandExecutor;
use crate::reports::{HumanReportGenerator, JsonReportGenerator, ReportGenerator};
use crate::scenario::Scenario;

pub struct ClearanceExecutor;

impl CommandExecutor for ClearanceExecutor {
    type Config = ClearanceConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Checking '{}' for state safety...\n",
            style("🚦").cyan(),
            config.scenario.display()
        );

        let scenario = Scenario::parse_file(&config.scenario)
            .wrap_err("Failed to load scenario")?;
        let state = scenario
            .resource_state()
            .into_diagnostic()
            .wrap_err("Failed to build resource state")?;

        let report = check_safety(&state)
            .into_diagnostic()
            .wrap_err("Failed to run safety check")?;

        let outcome = ClearanceOutcome {
            processes: state.process_count(),
            resources: state.resource_count(),
            report,
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

        // Exit with error code if the state is unsafe and requested
        if config.error_on_unsafe && !outcome.report.safe {
            std::process::exit(1);
        }

        Ok(())
    }
}
