//! Scenario file loading
//!
//! A scenario is a TOML snapshot of process/resource state:
//!
//! ```toml
//! processes = 3
//! waits_for = ["1", "2", "0"]
//!
//! resources  = 3
//! available  = "3 3 2"
//! max        = ["7 5 3", "3 2 2", "9 0 2"]
//! allocation = ["0 1 0", "2 0 0", "3 0 2"]
//! ```
//!
//! Field values are raw text lines; the accessors below run them through
//! the engine parsers, so every line gets the same validation whether it
//! arrives from a file or straight from library callers.

use std::path::Path;

use miette::{IntoDiagnostic, NamedSource, Result, SourceSpan};
use serde::Deserialize;

use crate::core::{ResourceState, WaitForGraph};
use crate::error::GridlockError;
use crate::parser;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Scenario {
    /// Process count; defaults to the number of `waits_for` lines
    pub processes: Option<usize>,
    /// Resource-type count; required whenever resource data is present
    pub resources: Option<usize>,
    /// One line per process: the processes it waits for
    pub waits_for: Option<Vec<String>>,
    /// Available units per resource type
    pub available: Option<String>,
    /// Maximum need matrix, one line per process
    pub max: Option<Vec<String>>,
    /// Current allocation matrix, one line per process
    pub allocation: Option<Vec<String>>,
}

impl Scenario {
    pub fn parse_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| GridlockError::FileReadError {
                path: path.to_path_buf(),
                source: e,
            })
            .into_diagnostic()?;

        Self::parse_str(&content, &path.display().to_string()).into_diagnostic()
    }

    pub fn parse_str(content: &str, file: &str) -> Result<Self, GridlockError> {
        toml::from_str(content).map_err(|e| {
            // Try to extract span information from the error
            let span = e
                .span()
                .map(|span| SourceSpan::new(span.start.into(), span.end - span.start));

            GridlockError::ScenarioParseError(Box::new(crate::error::ScenarioParseError {
                file: file.to_string(),
                source_code: NamedSource::new(file.to_string(), content.to_string()),
                span,
                source: e,
            }))
        })
    }

    /// Declared or inferred process count
    pub fn process_count(&self) -> usize {
        self.processes.unwrap_or_else(|| {
            self.waits_for
                .as_ref()
                .map(Vec::len)
                .or_else(|| self.max.as_ref().map(Vec::len))
                .unwrap_or_default()
        })
    }

    /// Build the validated wait-for graph from the `waits_for` lines
    pub fn wait_for_graph(&self) -> Result<WaitForGraph, GridlockError> {
        let lines = self
            .waits_for
            .as_ref()
            .ok_or_else(|| GridlockError::ConfigurationError {
                message: "Scenario has no 'waits_for' section".to_string(),
            })?;

        parser::parse_wait_for(lines, self.process_count())
    }

    /// Build the validated resource state from `available`, `max` and
    /// `allocation`
    pub fn resource_state(&self) -> Result<ResourceState, GridlockError> {
        let resources = self.resource_count()?;
        let available_line =
            self.available
                .as_ref()
                .ok_or_else(|| GridlockError::ConfigurationError {
                    message: "Scenario has no 'available' vector".to_string(),
                })?;
        let max_lines = self
            .max
            .as_ref()
            .ok_or_else(|| GridlockError::ConfigurationError {
                message: "Scenario has no 'max' matrix".to_string(),
            })?;
        let allocation_lines =
            self.allocation
                .as_ref()
                .ok_or_else(|| GridlockError::ConfigurationError {
                    message: "Scenario has no 'allocation' matrix".to_string(),
                })?;

        let processes = self.processes.unwrap_or(max_lines.len());
        let available = parser::parse_vector(available_line, resources)?;
        let max = parser::parse_matrix(max_lines, processes, resources)?;
        let allocation = parser::parse_matrix(allocation_lines, processes, resources)?;

        ResourceState::new(available, max, allocation)
    }

    /// Parse the optional allocation matrix on its own, for victim
    /// selection alongside a wait-for graph
    pub fn allocation_matrix(&self) -> Result<Option<Vec<Vec<u64>>>, GridlockError> {
        let Some(lines) = self.allocation.as_ref() else {
            return Ok(None);
        };
        let resources = self.resource_count()?;

        parser::parse_matrix(lines, self.process_count(), resources).map(Some)
    }

    fn resource_count(&self) -> Result<usize, GridlockError> {
        self.resources
            .ok_or_else(|| GridlockError::ConfigurationError {
                message: "Scenario supplies resource data but no 'resources' count".to_string(),
            })
    }
}
