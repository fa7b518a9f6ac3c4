// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Single-answer expansions computed before the exhaustive search.
//!
//! Both algorithms are deterministic, produce one strictly increasing
//! sequence each, and share no state with the search engine. They give an
//! immediate answer and a baseline to compare the exhaustive results with.
//! Neither caps the number of terms; both stop early when the query's
//! cancellation token fires.

pub mod engel;
pub mod greedy;

pub use engel::{engel, engel_series, engel_series_until, engel_until};
pub use greedy::{greedy, greedy_until};

use crate::cancel::CancellationToken;
use crate::rational::Fraction;
use crate::state::TermSequence;

/// Both seed expansions of one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seeds {
    pub engel: TermSequence,
    pub greedy: TermSequence,
    /// False when cancellation cut either expansion short.
    pub complete: bool,
}

impl Seeds {
    pub fn compute(target: &Fraction) -> Self {
        Self::compute_until(target, &CancellationToken::new())
    }

    /// Engel then greedy, stopping as soon as `token` is cancelled. A greedy
    /// expansion is not started after the Engel one was cut short.
    pub fn compute_until(target: &Fraction, token: &CancellationToken) -> Self {
        let (engel, engel_complete) = engel_until(target, token);
        let (greedy, greedy_complete) = if engel_complete {
            greedy_until(target, token)
        } else {
            (TermSequence::new(Vec::new()), false)
        };
        Self {
            engel,
            greedy,
            complete: engel_complete && greedy_complete,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeds_agree_on_two_fifths() {
        let target = Fraction::new(2u32, 5u32).unwrap();
        let seeds = Seeds::compute(&target);
        assert_eq!(seeds.engel, seeds.greedy);
        assert!(seeds.engel.expands(&target));
    }

    #[test]
    fn test_cancelled_seeds_are_incomplete() {
        let token = CancellationToken::new();
        token.cancel();
        let seeds = Seeds::compute_until(&Fraction::new(5u32, 121u32).unwrap(), &token);
        assert!(!seeds.complete);
        assert!(seeds.engel.is_empty());
        assert!(seeds.greedy.is_empty());
    }
}
