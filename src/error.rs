use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid TOML syntax in scenario '{file}'")]
#[diagnostic(
    code(gridlock::scenario_parse_error),
    help("Check the TOML syntax near the highlighted position")
)]
pub struct ScenarioParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("syntax error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: toml::de::Error,
}

#[derive(Error, Debug, Diagnostic)]
pub enum GridlockError {
    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(gridlock::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    ScenarioParseError(Box<ScenarioParseError>),

    #[error("Invalid token '{token}' on line {line}")]
    #[diagnostic(
        code(gridlock::parse_error),
        help("Every entry must be a non-negative integer separated by whitespace")
    )]
    ParseError { token: String, line: usize },

    #[error("Vector has {actual} entries, expected {expected}")]
    #[diagnostic(
        code(gridlock::shape_error),
        help("The vector must list exactly one value per resource type")
    )]
    VectorShape { expected: usize, actual: usize },

    #[error("Row {row} has {actual} values, expected {expected}")]
    #[diagnostic(
        code(gridlock::shape_error),
        help("Every matrix row must list exactly one value per resource type")
    )]
    RowShape {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Snapshot has {actual} rows, expected {expected}")]
    #[diagnostic(
        code(gridlock::shape_error),
        help("Supply exactly one line per process, or adjust the declared process count")
    )]
    RowCount { expected: usize, actual: usize },

    #[error("Line {line} waits for process {neighbor}, but only {processes} processes exist")]
    #[diagnostic(
        code(gridlock::shape_error),
        help("Process identifiers must lie in [0, n) for a snapshot of n processes")
    )]
    NeighborOutOfRange {
        line: usize,
        neighbor: usize,
        processes: usize,
    },

    #[error("Process {process} holds more of resource {resource} than its declared maximum")]
    #[diagnostic(
        code(gridlock::semantic_error),
        help("Allocation must never exceed the declared maximum need; fix the max or allocation matrix")
    )]
    NegativeNeed { process: usize, resource: usize },

    #[error("JSON serialization error")]
    #[diagnostic(
        code(gridlock::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(gridlock::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(gridlock::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(gridlock::config_error),
        help("Check your command arguments and scenario file")
    )]
    ConfigurationError { message: String },
}

#[cfg(test)]
mod tests {
    use std::io;

    use miette::NamedSource;

    use super::*;

    #[test]
    fn test_scenario_parse_error_display() {
        let source_code = "waits_for = not an array";
        let toml_err = toml::from_str::<toml::Value>(source_code).unwrap_err();

        let error = ScenarioParseError {
            file: "jam.toml".to_string(),
            source_code: NamedSource::new("jam.toml", source_code.to_string()),
            span: Some((12, 3).into()),
            source: toml_err,
        };

        let error_str = error.to_string();
        assert_eq!(error_str, "Invalid TOML syntax in scenario 'jam.toml'");
    }

    #[test]
    fn test_file_read_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error = GridlockError::FileReadError {
            path: PathBuf::from("/tmp/missing.toml"),
            source: io_err,
        };

        let error_str = error.to_string();
        assert_eq!(error_str, "Failed to read file '/tmp/missing.toml'");
    }

    #[test]
    fn test_parse_error_names_token_and_line() {
        let error = GridlockError::ParseError {
            token: "two".to_string(),
            line: 3,
        };

        assert_eq!(error.to_string(), "Invalid token 'two' on line 3");
    }

    #[test]
    fn test_shape_errors_state_expected_vs_actual() {
        let vector = GridlockError::VectorShape {
            expected: 3,
            actual: 2,
        };
        assert_eq!(vector.to_string(), "Vector has 2 entries, expected 3");

        let row = GridlockError::RowShape {
            row: 2,
            expected: 3,
            actual: 5,
        };
        assert_eq!(row.to_string(), "Row 2 has 5 values, expected 3");
    }

    #[test]
    fn test_negative_need_identifies_cell() {
        let error = GridlockError::NegativeNeed {
            process: 1,
            resource: 2,
        };

        assert_eq!(
            error.to_string(),
            "Process 1 holds more of resource 2 than its declared maximum"
        );
    }

    #[test]
    fn test_error_codes() {
        use miette::Diagnostic;

        let error = GridlockError::NeighborOutOfRange {
            line: 1,
            neighbor: 9,
            processes: 4,
        };

        assert!(error.code().is_some());
        assert!(error.help().is_some());
    }

    #[test]
    fn test_error_conversion_from_io() {
        let io_err = io::Error::other("some io error");
        let gridlock_err: GridlockError = io_err.into();

        match gridlock_err {
            GridlockError::Io(_) => {}
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_error_conversion_from_json() {
        let json_str = "{invalid json}";
        let json_err = serde_json::from_str::<serde_json::Value>(json_str).unwrap_err();
        let gridlock_err: GridlockError = json_err.into();

        match gridlock_err {
            GridlockError::Json(_) => {}
            _ => panic!("Expected Json variant"),
        }
    }
}
