//! Clearance command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;

/// Configuration for the clearance command
#[derive(Debug, Clone)]
pub struct ClearanceConfig {
    /// Scenario file describing the resource state
    pub scenario: PathBuf,
    /// Output format for the report
    pub format: OutputFormat,
    /// Whether to exit with error code if the state is unsafe
    pub error_on_unsafe: bool,
}

impl ClearanceConfig {
    pub fn builder() -> ClearanceConfigBuilder {
        ClearanceConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct ClearanceConfigBuilder {
    scenario: Option<PathBuf>,
    format: Option<OutputFormat>,
    error_on_unsafe: Option<bool>,
}

impl ClearanceConfigBuilder {
    pub fn new() -> Self {
        Self {
            scenario: None,
            format: None,
            error_on_unsafe: None,
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

    pub fn with_error_on_unsafe(mut self, error_on_unsafe: bool) -> Self {
        self.error_on_unsafe = Some(error_on_unsafe);
        self
    }
}

impl crate::common::ConfigBuilder for ClearanceConfigBuilder {
    type Config = ClearanceConfig;

    fn build(self) -> Result<Self::Config, crate::error::GridlockError> {
        Ok(ClearanceConfig {
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
            error_on_unsafe: self.error_on_unsafe.ok_or_else(|| {
                crate::error::GridlockError::ConfigurationError {
                    message: "Missing required field: error_on_unsafe".to_string(),
                }
            })?,
        })
    }
}
