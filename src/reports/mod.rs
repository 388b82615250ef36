//! Report generation modules for different output formats
//!
//! This module contains report generators for various output formats:
//! - human: Human-readable console output
//! - json: JSON format for programmatic use

pub mod human;
pub mod json;

use crate::error::GridlockError;

/// Common trait for all report generators, generic over the analysis
/// outcome being reported
pub trait ReportGenerator<T> {
    /// Generate a report from an analysis outcome
    fn generate_report(&self, outcome: &T) -> Result<String, GridlockError>;
}

// Re-export for convenience
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
