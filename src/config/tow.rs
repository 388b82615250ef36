//! Tow command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;

/// Configuration for the tow command
#[derive(Debug, Clone)]
pub struct TowConfig {
    /// Scenario file describing the wait-for snapshot
    pub scenario: PathBuf,
    /// Output format for the report
    pub format: OutputFormat,
    /// Whether to keep selecting victims until no deadlock remains
    pub all: bool,
}

impl TowConfig {
    pub fn builder() -> TowConfigBuilder {
        TowConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct TowConfigBuilder {
    scenario: Option<PathBuf>,
    format: Option<OutputFormat>,
    all: Option<bool>,
}

impl TowConfigBuilder {
    pub fn new() -> Self {
        Self {
            scenario: None,
            format: None,
            all: None,
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

    pub fn with_all(mut self, all: bool) -> Self {
        self.all = Some(all);
        self
    }
}

impl crate::common::ConfigBuilder for TowConfigBuilder {
    type Config = TowConfig;

    fn build(self) -> Result<Self::Config, crate::error::GridlockError> {
        Ok(TowConfig {
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
            all: self.all.ok_or_else(|| {
                crate::error::GridlockError::ConfigurationError {
                    message: "Missing required field: all".to_string(),
                }
            })?,
        })
    }
}
