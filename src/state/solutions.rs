// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Accumulator for completed expansions.

use crate::state::terms::TermSequence;

/// Expansions found by one search, in discovery order.
///
/// The set only grows. Sequences are copied in from the working buffer, so
/// later changes to the buffer never reach recorded solutions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolutionSet {
    found: Vec<TermSequence>,
}

impl SolutionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, solution: TermSequence) {
        self.found.push(solution);
    }

    pub fn len(&self) -> usize {
        self.found.len()
    }

    pub fn is_empty(&self) -> bool {
        self.found.is_empty()
    }

    /// Solutions in the order the search found them.
    pub fn discovered(&self) -> &[TermSequence] {
        &self.found
    }

    /// At most `limit` solutions, in discovery order.
    pub fn preview(&self, limit: usize) -> &[TermSequence] {
        &self.found[..limit.min(self.found.len())]
    }

    /// All solutions ordered by the sum of their denominators.
    ///
    /// The sort is stable: equal sums keep discovery order.
    pub fn sorted_by_sum(&self) -> Vec<TermSequence> {
        let mut keyed: Vec<_> = self.found.iter().map(|s| (s.sum(), s)).collect();
        keyed.sort_by(|a, b| a.0.cmp(&b.0));
        keyed.into_iter().map(|(_, s)| s.clone()).collect()
    }

    pub fn into_vec(self) -> Vec<TermSequence> {
        self.found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;

    fn seq(terms: &[u64]) -> TermSequence {
        terms.iter().map(|&t| BigUint::from(t)).collect()
    }

    #[test]
    fn test_sorted_by_sum() {
        let mut set = SolutionSet::new();
        set.push(seq(&[4, 7, 140]));
        set.push(seq(&[3, 15]));
        set.push(seq(&[5, 6, 30]));
        set.push(seq(&[4, 12, 15]));
        set.push(seq(&[4, 10, 20]));

        let sorted = set.sorted_by_sum();
        assert_eq!(
            sorted,
            vec![
                seq(&[3, 15]),
                seq(&[4, 12, 15]),
                seq(&[4, 10, 20]),
                seq(&[5, 6, 30]),
                seq(&[4, 7, 140]),
            ]
        );
        // discovery order untouched
        assert_eq!(set.discovered()[0], seq(&[4, 7, 140]));
    }

    #[test]
    fn test_equal_sums_keep_discovery_order() {
        let mut set = SolutionSet::new();
        set.push(seq(&[4, 6]));
        set.push(seq(&[1, 9]));
        set.push(seq(&[2, 3]));
        assert_eq!(
            set.sorted_by_sum(),
            vec![seq(&[2, 3]), seq(&[4, 6]), seq(&[1, 9])]
        );
    }

    #[test]
    fn test_preview_truncates() {
        let mut set = SolutionSet::new();
        for t in 2..20u64 {
            set.push(seq(&[t]));
        }
        assert_eq!(set.preview(9).len(), 9);
        assert_eq!(set.preview(100).len(), 18);
        assert_eq!(set.preview(9)[0], seq(&[2]));
    }
}
