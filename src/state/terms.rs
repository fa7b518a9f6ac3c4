// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Term sequences and the working buffer they are copied from.

use std::fmt;

use num_bigint::BigUint;
use num_traits::Zero;

use crate::rational::Fraction;

/// An ordered list of denominators `t1 < t2 < ... < tk`.
///
/// Produced by the seed expanders and by the exhaustive search. Once built it
/// is never modified.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TermSequence(Vec<BigUint>);

impl TermSequence {
    pub fn new(terms: Vec<BigUint>) -> Self {
        Self(terms)
    }

    pub fn terms(&self) -> &[BigUint] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of the denominators; the presentation sort key.
    pub fn sum(&self) -> BigUint {
        self.0.iter().sum()
    }

    pub fn is_strictly_increasing(&self) -> bool {
        self.0.windows(2).all(|w| w[0] < w[1])
    }

    /// True when every term is positive, terms strictly increase, and the
    /// unit fractions sum exactly to `target`.
    pub fn expands(&self, target: &Fraction) -> bool {
        if self.0.iter().any(|t| t.is_zero()) || !self.is_strictly_increasing() {
            return false;
        }
        match Fraction::sum_of_units(self.0.iter()) {
            Ok(sum) => sum == target.to_ratio(),
            Err(_) => false,
        }
    }
}

impl From<Vec<BigUint>> for TermSequence {
    fn from(terms: Vec<BigUint>) -> Self {
        Self(terms)
    }
}

impl FromIterator<BigUint> for TermSequence {
    fn from_iter<I: IntoIterator<Item = BigUint>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for TermSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, &self.0)
    }
}

/// Write `[a, b, c]` using each item's `Display`.
pub(crate) fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    write!(f, "[")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    write!(f, "]")
}

/// Working buffer for the exhaustive search.
///
/// Slot `i` holds the denominator chosen at depth `i`. A frame at depth `i`
/// writes only slot `i`, so slots beyond the active depth keep whatever an
/// earlier branch left there until they are overwritten. The buffer grows
/// only as deep as the search actually goes.
#[derive(Debug, Clone, Default)]
pub struct TermBuffer {
    slots: Vec<BigUint>,
}

impl TermBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deepest slot written so far, plus one.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Write the denominator for `depth`.
    ///
    /// A frame is only entered below a written slot, so `depth` never skips
    /// past the end.
    pub fn set(&mut self, depth: usize, t: &BigUint) {
        assert!(depth <= self.slots.len(), "slot {} written before its parent", depth);
        if depth == self.slots.len() {
            self.slots.push(t.clone());
        } else {
            self.slots[depth].clone_from(t);
        }
    }

    /// All slots, including stale ones past the active depth.
    pub fn slots(&self) -> &[BigUint] {
        &self.slots
    }

    /// Copy out slots `0..depth` followed by `last`.
    pub fn snapshot_with(&self, depth: usize, last: BigUint) -> TermSequence {
        let mut terms = Vec::with_capacity(depth + 1);
        terms.extend_from_slice(&self.slots[..depth]);
        terms.push(last);
        TermSequence(terms)
    }
}

impl fmt::Display for TermBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, &self.slots)
    }
}
