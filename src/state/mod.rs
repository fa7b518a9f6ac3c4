// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-query mutable state: the working term buffer, the solutions found so
//! far, and search counters. Nothing here outlives a single query.

pub mod solutions;
pub mod statistics;
pub mod terms;

pub use solutions::SolutionSet;
pub use statistics::{Counters, Statistics};
pub use terms::{TermBuffer, TermSequence};
