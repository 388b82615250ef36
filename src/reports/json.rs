//! JSON format report generation

use serde_json::json;

use super::ReportGenerator;
use crate::core::{ClearanceOutcome, ScanOutcome, TowOutcome};
use crate::error::GridlockError;

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator<ScanOutcome> for JsonReportGenerator {
    fn generate_report(&self, outcome: &ScanOutcome) -> Result<String, GridlockError> {
        let report = json!({
            "processes": outcome.processes,
            "edges": outcome.edges,
            "deadlocked": outcome.cycle.is_some(),
            "cycle": outcome.cycle.as_ref().map(|c| c.nodes().to_vec()),
            "suggestion": outcome.suggestion.as_ref().map(|s| {
                json!({
                    "victim": s.victim,
                    "reason": s.reason,
                })
            }),
        });

        serde_json::to_string_pretty(&report).map_err(GridlockError::Json)
    }
}

impl ReportGenerator<ClearanceOutcome> for JsonReportGenerator {
    fn generate_report(&self, outcome: &ClearanceOutcome) -> Result<String, GridlockError> {
        let report = json!({
            "processes": outcome.processes,
            "resources": outcome.resources,
            "safe": outcome.report.safe,
            "order": outcome.report.order,
        });

        serde_json::to_string_pretty(&report).map_err(GridlockError::Json)
    }
}

impl ReportGenerator<TowOutcome> for JsonReportGenerator {
    fn generate_report(&self, outcome: &TowOutcome) -> Result<String, GridlockError> {
        let rounds: Vec<_> = outcome
            .rounds
            .iter()
            .map(|round| {
                json!({
                    "cycle": round.cycle.nodes().to_vec(),
                    "victim": round.suggestion.victim,
                    "reason": round.suggestion.reason,
                })
            })
            .collect();

        let report = json!({
            "processes": outcome.processes,
            "rounds": rounds,
            "cleared": outcome.cleared,
        });

        serde_json::to_string_pretty(&report).map_err(GridlockError::Json)
    }
}
