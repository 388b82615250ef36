//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::ReportGenerator;
use crate::core::{ClearanceOutcome, ScanOutcome, TowOutcome};
use crate::error::GridlockError;
use crate::utils::string::pluralize;

pub struct HumanReportGenerator;

impl Default for HumanReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl HumanReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator<ScanOutcome> for HumanReportGenerator {
    fn generate_report(&self, outcome: &ScanOutcome) -> Result<String, GridlockError> {
        let mut output = String::new();

        match &outcome.cycle {
            None => {
                write!(
                    output,
                    "\n{} No deadlock detected! All {} processes can make progress.\n",
                    style("✅").green().bold(),
                    style(outcome.processes).bold()
                )?;
            }
            Some(cycle) => {
                write!(
                    output,
                    "\n{} Deadlock detected among {} of {} processes:\n\n",
                    style("❌").red().bold(),
                    style(cycle.participants().len()).red().bold(),
                    style(outcome.processes).bold()
                )?;
                writeln!(output, "  {} Cycle: {}", style("🔄").yellow(), style(cycle).bold())?;
                writeln!(
                    output,
                    "  {} Every process above is blocked waiting on the next; none can proceed.",
                    style("🚧").red()
                )?;

                if let Some(suggestion) = &outcome.suggestion {
                    writeln!(
                        output,
                        "\n  {} Suggested victim: {}",
                        style("🛻").cyan(),
                        style(format!("P{}", suggestion.victim)).bold()
                    )?;
                    writeln!(output, "    {}", style(&suggestion.reason).dim())?;
                }
            }
        }

        Ok(output)
    }
}

impl ReportGenerator<ClearanceOutcome> for HumanReportGenerator {
    fn generate_report(&self, outcome: &ClearanceOutcome) -> Result<String, GridlockError> {
        let mut output = String::new();

        if outcome.report.safe {
            write!(
                output,
                "\n{} State is SAFE: all {} processes can run to completion.\n",
                style("✅").green().bold(),
                style(outcome.processes).bold()
            )?;

            if let Some(order) = &outcome.report.order {
                let rendered: Vec<String> = order.iter().map(|p| format!("P{p}")).collect();
                writeln!(
                    output,
                    "  {} Safe execution order: {}",
                    style("🟢").green(),
                    style(rendered.join(" → ")).bold()
                )?;
            }
        } else {
            write!(
                output,
                "\n{} State is UNSAFE: no execution order guarantees completion.\n",
                style("❌").red().bold()
            )?;
            writeln!(
                output,
                "  {} Some future request pattern within the declared maxima can deadlock.",
                style("⚠️").yellow()
            )?;
        }

        Ok(output)
    }
}

impl ReportGenerator<TowOutcome> for HumanReportGenerator {
    fn generate_report(&self, outcome: &TowOutcome) -> Result<String, GridlockError> {
        let mut output = String::new();

        if outcome.rounds.is_empty() {
            write!(
                output,
                "\n{} Nothing to tow: the snapshot has no deadlock cycle.\n",
                style("✅").green().bold()
            )?;
            return Ok(output);
        }

        write!(
            output,
            "\n{} {} resolution {}:\n\n",
            style("🛻").cyan().bold(),
            style(outcome.rounds.len()).bold(),
            pluralize("round", outcome.rounds.len())
        )?;

        for (i, round) in outcome.rounds.iter().enumerate() {
            writeln!(output, "{} Round #{}", style("🔄").yellow(), i + 1)?;
            writeln!(output, "  Cycle: {}", style(&round.cycle).bold())?;
            writeln!(
                output,
                "  Victim: {}",
                style(format!("P{}", round.suggestion.victim)).red().bold()
            )?;
            writeln!(output, "  {}", style(&round.suggestion.reason).dim())?;
            writeln!(output)?;
        }

        if outcome.cleared {
            writeln!(
                output,
                "{} Traffic is moving again: no deadlock remains.",
                style("✅").green().bold()
            )?;
        }

        Ok(output)
    }
}
