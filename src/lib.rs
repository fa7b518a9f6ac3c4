// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search for Egyptian fraction expansions.
//!
//! An Egyptian fraction expansion writes a positive rational `n/d` as a sum
//! of distinct unit fractions `1/t1 + 1/t2 + ... + 1/tk` with
//! `t1 < t2 < ... < tk`. All arithmetic is exact over arbitrary-precision
//! integers, so targets and denominators may be arbitrarily large.
//!
//! # Architecture
//!
//! - [`rational`]: exact fractions, gcd reduction, ceiling division
//! - [`bound`]: first admissible denominator and the branch-and-bound cutoff
//! - [`seed`]: Engel and greedy expansions, one answer each
//! - [`engine`]: exhaustive search over all expansions of at most `k` terms
//! - [`cancel`]: cooperative cancellation, deadline, and frame budget
//! - [`state`] and [`context`]: per-query buffer, solutions, and counters
//! - [`query`] and [`report`]: validated queries and their results
//!
//! # Search Algorithm
//!
//! For a remainder `n1/d1` with `k` terms left after previous denominator
//! `pd`, candidates start at `max(pd + 1, ceil(d1/n1))` and continue while
//! `k * d1 > n1 * t`. Each candidate `t` leaves `(n1 t - d1) / (d1 t)`, which is
//! expanded one level deeper. A remainder that reduces to `1/m` with
//! `m > pd` completes an expansion.
//!
//! # Example
//!
//! ```
//! use egyptian_search::engine::expansions;
//! use egyptian_search::rational::Fraction;
//!
//! let found = expansions(&Fraction::new(2u32, 3u32).unwrap(), 3);
//! assert_eq!(found.len(), 2);
//! assert_eq!(found[1].to_string(), "[3, 4, 12]");
//! ```

pub mod bound;
pub mod cancel;
pub mod context;
pub mod engine;
pub mod error;
pub mod query;
pub mod rational;
pub mod report;
pub mod seed;
pub mod state;

// Re-export commonly used types
pub use cancel::{CancellationToken, StopCondition, StopReason};
pub use context::SearchContext;
pub use engine::{SearchEngine, SearchOutcome};
pub use error::{EgyptianError, Result};
pub use query::{Query, SearchConfig};
pub use rational::Fraction;
pub use report::QueryReport;
pub use state::TermSequence;
