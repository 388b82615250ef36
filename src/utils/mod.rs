//! Small shared utilities

pub mod string;
