//! # Resolution Advisory Module
//!
//! Once a deadlock cycle has been detected, something has to give: one
//! process in the cycle is picked for termination so the others can make
//! progress. This module chooses that victim and explains the choice.
//!
//! Two policies:
//!
//! - with allocation data, the process holding the fewest total resource
//!   units among the cycle's participants is picked (cheapest to kill),
//!   ties broken by first occurrence in cycle order
//! - without allocation data, a fixed positional heuristic picks the
//!   second-to-last entry of the cycle (the predecessor of the closing
//!   repetition), falling back to the first entry for two-entry cycles
//!
//! The selection is advisory only: nothing is mutated, and actually
//! terminating the victim and re-scanning is the caller's job (the `tow`
//! executor drives that loop).

mod advisor_impl;

pub use advisor_impl::*;
