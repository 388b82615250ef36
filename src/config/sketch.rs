//! Sketch command configuration

use std::path::PathBuf;

use crate::cli::GraphFormat;

/// Configuration for the sketch command
#[derive(Debug, Clone)]
pub struct SketchConfig {
    /// Scenario file describing the wait-for snapshot
    pub scenario: PathBuf,
    /// Graph output format
    pub format: GraphFormat,
    /// Output file, or stdout when not set
    pub output: Option<PathBuf>,
    /// Whether to highlight the detected deadlock cycle
    pub highlight_cycle: bool,
}

impl SketchConfig {
    pub fn builder() -> SketchConfigBuilder {
        SketchConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct SketchConfigBuilder {
    scenario: Option<PathBuf>,
    format: Option<GraphFormat>,
    output: Option<Option<PathBuf>>,
    highlight_cycle: Option<bool>,
}

impl SketchConfigBuilder {
    pub fn new() -> Self {
        Self {
            scenario: None,
            format: None,
            output: None,
            highlight_cycle: None,
        }
    }

    pub fn with_scenario(mut self, scenario: PathBuf) -> Self {
        self.scenario = Some(scenario);
        self
    }

    pub fn with_format(mut self, format: GraphFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_highlight_cycle(mut self, highlight_cycle: bool) -> Self {
        self.highlight_cycle = Some(highlight_cycle);
        self
    }
}

impl crate::common::ConfigBuilder for SketchConfigBuilder {
    type Config = SketchConfig;

    fn build(self) -> Result<Self::Config, crate::error::GridlockError> {
        Ok(SketchConfig {
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
            output: self.output.ok_or_else(|| {
                crate::error::GridlockError::ConfigurationError {
                    message: "Missing required field: output".to_string(),
                }
            })?,
            highlight_cycle: self.highlight_cycle.ok_or_else(|| {
                crate::error::GridlockError::ConfigurationError {
                    message: "Missing required field: highlight_cycle".to_string(),
                }
            })?,
        })
    }
}
