// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-query results and their text rendering.
//!
//! A complete query renders as
//!
//! ```text
//!   4/17:  [5, 30, 510]  Engel
//!   4/17:  [5, 29, 1233, 3039345]  Greedy
//!   4/17: [[6, 17, 102], [5, 34, 170], [6, 15, 510], [5, 30, 510]] in 196 us
//! ```
//!
//! with exhaustive results sorted by the sum of their denominators. An
//! interrupted query lists the working buffer and the first few solutions in
//! discovery order instead.

use std::fmt;
use std::time::Duration;

use num_bigint::BigUint;

use crate::engine::SearchOutcome;
use crate::rational::Fraction;
use crate::seed::Seeds;
use crate::state::terms::write_list;
use crate::state::{SolutionSet, Statistics, TermBuffer, TermSequence};

/// `[[a, b], [c, d, e], ...]`
pub struct Listing<'a>(pub &'a [TermSequence]);

impl fmt::Display for Listing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, self.0)
    }
}

/// Everything one query produced.
#[derive(Debug, Clone)]
pub struct QueryReport {
    pub target: Fraction,
    /// Engel and greedy expansions, when enabled.
    pub seeds: Option<Seeds>,
    /// Exhaustive results in discovery order.
    pub solutions: SolutionSet,
    /// Working buffer as the search left it.
    pub partial: TermBuffer,
    pub statistics: Statistics,
    pub outcome: SearchOutcome,
    pub elapsed: Duration,
    /// Solutions listed after an interruption.
    pub display_limit: usize,
}

impl QueryReport {
    pub fn is_complete(&self) -> bool {
        self.outcome.is_exhausted()
    }

    /// Exhaustive results ordered by denominator sum.
    pub fn sorted(&self) -> Vec<TermSequence> {
        self.solutions.sorted_by_sum()
    }

    /// Buffer slots on the path being explored when the search stopped.
    ///
    /// Empty for a complete search.
    pub fn live_prefix(&self) -> &[BigUint] {
        match self.outcome {
            SearchOutcome::Exhausted => &[],
            SearchOutcome::Interrupted { live_depth, .. } => &self.partial.slots()[..live_depth],
        }
    }

    /// `  n/d` with the numerator right-aligned to three columns.
    fn label(&self) -> String {
        format!("{:>3}/{}", self.target.numer(), self.target.denom())
    }
}

impl fmt::Display for QueryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.label();
        if let Some(seeds) = &self.seeds {
            let marker = if seeds.complete { "" } else { " (interrupted)" };
            writeln!(f, "{}:  {}  Engel{}", label, seeds.engel, marker)?;
            writeln!(f, "{}:  {}  Greedy{}", label, seeds.greedy, marker)?;
        }
        match self.outcome {
            SearchOutcome::Exhausted => write!(
                f,
                "{}: {} in {} us",
                label,
                Listing(&self.sorted()),
                self.elapsed.as_micros()
            ),
            SearchOutcome::Interrupted { reason, .. } => write!(
                f,
                "\n{} - terms={}, #sols={}: {}... \n",
                reason,
                self.partial,
                self.solutions.len(),
                Listing(self.solutions.preview(self.display_limit))
            ),
        }
    }
}
