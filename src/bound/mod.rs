// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Bounds on the next candidate denominator.
//!
//! At a level with remaining fraction `n1/d1` (lowest terms), `k` terms still
//! available, and previous denominator `pd`:
//!
//! - the first candidate is `max(pd + 1, ceil(d1 / n1))`: `1/t` may not exceed
//!   the remainder and must be strictly smaller than `1/pd`;
//! - candidates stay admissible while `k * d1 > n1 * t`, i.e. while `k` unit
//!   fractions no larger than `1/t` could still reach `n1/d1`.
//!
//! Both are integer comparisons so they stay exact at any magnitude.

use num_bigint::BigUint;

use crate::rational::{ceil_div, Fraction};

/// Smallest denominator that could start a valid completion of `remaining`.
///
/// `previous` is the denominator chosen one level up, or zero at the root.
pub fn lower_bound(remaining: &Fraction, previous: &BigUint) -> BigUint {
    debug_assert!(!remaining.is_zero(), "lower bound of an empty remainder");
    let above_previous = previous + 1u32;
    let fits = ceil_div(remaining.denom(), remaining.numer());
    above_previous.max(fits)
}

/// Branch-and-bound cutoff: can `budget` terms each at most `1/t` still sum
/// to at least `remaining`?
pub fn admits(budget: usize, remaining: &Fraction, t: &BigUint) -> bool {
    BigUint::from(budget) * remaining.denom() > remaining.numer() * t
}
