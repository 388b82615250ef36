//! # Safety Checking Module (Banker's Algorithm)
//!
//! Decides whether a resource allocation state is *safe*: whether some
//! ordering of process completions is guaranteed not to deadlock, no
//! matter how requests arrive within the declared maxima. A safe verdict
//! comes with a witnessing execution order.
//!
//! ## Algorithm
//!
//! The classic Banker's simulation: derive `Need = Max - Allocation`,
//! start `Work` at the available vector, then repeatedly grant the lowest
//! numbered unfinished process whose entire need fits in `Work`, release
//! its allocation back into `Work`, and restart the scan from the top.
//! A full scan that grants nothing declares the state unsafe. Worst case
//! O(n² · m).
//!
//! The lowest-index-first selection is deliberate and load-bearing: it
//! makes the reported order deterministic for identical inputs.
//!
//! ## Example
//!
//! ```
//! use gridlock::banker::check_safety;
//! use gridlock::core::ResourceState;
//!
//! let state = ResourceState::new(
//!     vec![3, 3, 2],
//!     vec![vec![7, 5, 3], vec![3, 2, 2], vec![9, 0, 2], vec![2, 2, 2], vec![4, 3, 3]],
//!     vec![vec![0, 1, 0], vec![2, 0, 0], vec![3, 0, 2], vec![2, 1, 1], vec![0, 0, 2]],
//! )
//! .unwrap();
//!
//! let report = check_safety(&state).unwrap();
//! assert!(report.safe);
//! assert_eq!(report.order, Some(vec![1, 3, 0, 2, 4]));
//! ```

mod banker_impl;

pub use banker_impl::*;
