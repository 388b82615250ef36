//! # Configuration Module
//!
//! This module provides configuration structures for all gridlock
//! commands. Each command has its own config module with builder patterns
//! for easy construction.
//!
//! ## Command Configurations
//!
//! - **ScanConfig**: Configuration for the `scan` command to detect
//!   deadlock cycles
//! - **ClearanceConfig**: Configuration for the `clearance` command to
//!   check state safety
//! - **TowConfig**: Configuration for the `tow` command to select
//!   termination victims
//! - **SketchConfig**: Configuration for the `sketch` command to render
//!   the wait-for graph

pub mod clearance;
pub mod scan;
pub mod sketch;
pub mod tow;

pub use clearance::ClearanceConfig;
pub use scan::ScanConfig;
pub use sketch::SketchConfig;
pub use tow::TowConfig;
