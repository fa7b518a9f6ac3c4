// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context: everything one exhaustive search owns.
//!
//! ```text
//! SearchContext {
//!     max_terms: usize,         // term budget of the root frame
//!     terms: TermBuffer,        // working slots, one per depth reached
//!     solutions: SolutionSet,   // completed expansions, discovery order
//!     statistics: Statistics,   // counters
//!     stop: StopCondition,      // polled at safe points
//! }
//! ```
//!
//! A context is created per query and handed to the engine by mutable
//! reference, so independent queries can run on independent contexts.

use crate::cancel::StopCondition;
use crate::state::{SolutionSet, Statistics, TermBuffer};

#[derive(Debug)]
pub struct SearchContext {
    max_terms: usize,
    /// Working buffer, grown as the search descends.
    pub terms: TermBuffer,
    /// Expansions recorded so far.
    pub solutions: SolutionSet,
    /// Engine counters.
    pub statistics: Statistics,
    /// Cancellation, deadline, and frame budget.
    pub stop: StopCondition,
}

impl SearchContext {
    /// A context for expansions of at most `max_terms` terms that never stops
    /// early.
    pub fn new(max_terms: usize) -> Self {
        Self::with_stop(max_terms, StopCondition::default())
    }

    pub fn with_stop(max_terms: usize, stop: StopCondition) -> Self {
        Self {
            max_terms,
            terms: TermBuffer::new(),
            solutions: SolutionSet::new(),
            statistics: Statistics::new(),
            stop,
        }
    }

    /// Most terms an expansion may have.
    pub fn max_terms(&self) -> usize {
        self.max_terms
    }
}
