//! # Input Parsing Module
//!
//! Turns loosely-typed textual input (one line per process, whitespace
//! separated integers) into the validated graph and matrix types the
//! analysis engine runs on. Malformed shapes are rejected here, before
//! they can reach the algorithms:
//!
//! - a non-numeric token is a [`GridlockError::ParseError`] naming the
//!   token and its 1-based line
//! - a vector or matrix row of the wrong arity is a shape error stating
//!   expected vs actual counts
//! - a wait-for neighbor outside `[0, n)` is a shape error naming the line
//!
//! Empty lines are meaningful, not errors: an empty wait-for line means
//! the process waits for nothing, and an empty matrix row reads as a row
//! of zeros. Parsing is pure and never mutates caller-owned input.

use crate::core::WaitForGraph;
use crate::error::GridlockError;

/// Split one line into non-negative integers, reporting the offending
/// token and 1-based line number on failure
fn parse_line(line: &str, line_number: usize) -> Result<Vec<u64>, GridlockError> {
    line.split_whitespace()
        .map(|token| {
            token.parse::<u64>().map_err(|_| GridlockError::ParseError {
                token: token.to_string(),
                line: line_number,
            })
        })
        .collect()
}

/// Parse a wait-for specification: line `i` lists the processes that
/// process `i` is waiting for.
///
/// `processes` fixes `n` for the snapshot; the number of lines must agree
/// with it, and every referenced identifier must lie in `[0, n)`.
pub fn parse_wait_for(lines: &[String], processes: usize) -> Result<WaitForGraph, GridlockError> {
    if lines.len() != processes {
        return Err(GridlockError::RowCount {
            expected: processes,
            actual: lines.len(),
        });
    }

    let mut edges = Vec::with_capacity(processes);
    for (index, line) in lines.iter().enumerate() {
        let neighbors = parse_line(line, index + 1)?;
        edges.push(
            neighbors
                .into_iter()
                .map(|neighbor| neighbor as usize)
                .collect(),
        );
    }

    WaitForGraph::from_adjacency(edges)
}

/// Parse a resource vector of exactly `expected` entries
pub fn parse_vector(line: &str, expected: usize) -> Result<Vec<u64>, GridlockError> {
    let values = parse_line(line, 1)?;
    if values.len() != expected {
        return Err(GridlockError::VectorShape {
            expected,
            actual: values.len(),
        });
    }
    Ok(values)
}

/// Parse an n×m matrix row-by-row.
///
/// An empty row reads as a row of zeros; so do missing trailing rows. A
/// non-empty row of the wrong arity is a row-indexed shape error.
pub fn parse_matrix(
    lines: &[String],
    processes: usize,
    resources: usize,
) -> Result<Vec<Vec<u64>>, GridlockError> {
    let empty = String::new();
    let mut matrix = Vec::with_capacity(processes);

    for row in 0..processes {
        let line = lines.get(row).unwrap_or(&empty);
        let values = parse_line(line, row + 1)?;

        if values.is_empty() {
            matrix.push(vec![0; resources]);
        } else if values.len() != resources {
            return Err(GridlockError::RowShape {
                row: row + 1,
                expected: resources,
                actual: values.len(),
            });
        } else {
            matrix.push(values);
        }
    }

    Ok(matrix)
}
