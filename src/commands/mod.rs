//! Command implementations for the gridlock CLI
//!
//! This module contains the implementations for each CLI command:
//! - scan: Scan the intersection for traffic locked bumper-to-bumper
//! - clearance: Check whether the traffic controller can wave everyone
//!   through
//! - tow: Pick which car to tow away to get traffic moving again
//! - sketch: Sketch the wait-for graph for the incident report

pub mod clearance;
pub mod scan;
pub mod sketch;
pub mod tow;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Scan { .. } => scan::execute_scan_command(command),
        Commands::Clearance { .. } => clearance::execute_clearance_command(command),
        Commands::Tow { .. } => tow::execute_tow_command(command),
        Commands::Sketch { .. } => sketch::execute_sketch_command(command),
    }
}
