//! Scan command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;

/// Configuration for the scan command
///
/// This struct contains all options for detecting and reporting deadlock
/// cycles in a wait-for snapshot.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Scenario file describing the wait-for snapshot
    pub scenario: PathBuf,
    /// Output format for the report
    pub format: OutputFormat,
    /// Whether to suggest a termination victim when a deadlock is found
    pub resolve: bool,
    /// Whether to exit with error code if a deadlock is found
    pub error_on_deadlock: bool,
}

impl ScanConfig {
    pub fn builder() -> ScanConfigBuilder {
        ScanConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct ScanConfigBuilder {
    scenario: Option<PathBuf>,
    format: Option<OutputFormat>,
    resolve: Option<bool>,
    error_on_deadlock: Option<bool>,
}

impl ScanConfigBuilder {
    pub fn new() -> Self {
        Self {
            scenario: None,
            format: None,
            resolve: None,
            error_on_deadlock: None,
        }
    }

    pub fn with_scenario(mut self, scenario: PathBuf) -> Self {
        self.scenario = Some(scenario);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_resolve(mut self, resolve: bool) -> Self {
        self.resolve = Some(resolve);
        self
    }

    pub fn with_error_on_deadlock(mut self, error_on_deadlock: bool) -> Self {
        self.error_on_deadlock = Some(error_on_deadlock);
        self
    }
}

impl crate::common::ConfigBuilder for ScanConfigBuilder {
    type Config = ScanConfig;

    fn build(self) -> Result<Self::Config, crate::error::GridlockError> {
        Ok(ScanConfig {
            scenario: self.scenario.ok_or_else(|| {
                crate::error::GridlockError::ConfigurationError {
                    message: "Missing required field: scenario".to_string(),
                }
            })?,
            format: self.format.ok_or_else(|| {
                crate::error::GridlockError::ConfigurationError {
                    message: "Missing required field: format".to_string(),
                }
            })?,
            resolve: self.resolve.ok_or_else(|| {
                crate::error::GridlockError::ConfigurationError {
                    message: "Missing required field: resolve".to_string(),
                }
            })?,
            error_on_deadlock: self.error_on_deadlock.ok_or_else(|| {
                crate::error::GridlockError::ConfigurationError {
                    message: "Missing required field: error_on_deadlock".to_string(),
                }
            })?,
        })
    }
}
