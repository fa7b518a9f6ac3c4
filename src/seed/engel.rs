// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Engel expansion.
//!
//! With `u1 = n/d`, each step takes `a_k = ceil(1/u_k)` and continues with
//! `u_{k+1} = u_k * a_k - 1` until `u` reaches zero. The denominators of the
//! expansion are the running products `a_1`, `a_1 a_2`, `a_1 a_2 a_3`, ...
//!
//! Only the numerator of `u` changes: `(un, ud) -> (un * a - ud, ud)`, and
//! `un` strictly decreases, so the loop terminates. There is no cap on the
//! number of terms, but the `_until` variants stop early once a
//! [`CancellationToken`] is cancelled.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::cancel::CancellationToken;
use crate::rational::{ceil_div, Fraction};
use crate::state::TermSequence;

/// The Engel series `a_1, a_2, ...` of `target`.
pub fn engel_series(target: &Fraction) -> Vec<BigUint> {
    engel_series_until(target, &CancellationToken::new()).0
}

/// The Engel series of `target`, checking `token` before each term.
///
/// Returns the terms computed so far and whether the series is complete.
pub fn engel_series_until(target: &Fraction, token: &CancellationToken) -> (Vec<BigUint>, bool) {
    let mut un = target.numer().clone();
    let ud = target.denom();
    let mut series = Vec::new();
    while !un.is_zero() {
        if token.is_cancelled() {
            return (series, false);
        }
        let a = ceil_div(ud, &un);
        un = &un * &a - ud;
        series.push(a);
    }
    (series, true)
}

/// The Engel expansion of `target`: cumulative products of its series.
pub fn engel(target: &Fraction) -> TermSequence {
    engel_until(target, &CancellationToken::new()).0
}

/// [`engel`], stopping early once `token` is cancelled.
pub fn engel_until(target: &Fraction, token: &CancellationToken) -> (TermSequence, bool) {
    let (series, complete) = engel_series_until(target, token);
    let mut product = BigUint::one();
    let terms: TermSequence = series
        .into_iter()
        .map(|a| {
            product *= a;
            product.clone()
        })
        .collect();
    (terms, complete)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(v: u64) -> BigUint {
        BigUint::from(v)
    }

    #[test]
    fn test_series() {
        let series = engel_series(&Fraction::new(4u32, 17u32).unwrap());
        assert_eq!(series, vec![big(5), big(6), big(17)]);
    }

    #[test]
    fn test_expansion_is_cumulative_product() {
        let terms = engel(&Fraction::new(4u32, 17u32).unwrap());
        assert_eq!(terms.terms(), &[big(5), big(30), big(510)]);
    }

    #[test]
    fn test_unit_and_whole() {
        assert_eq!(engel(&Fraction::new(1u32, 7u32).unwrap()).terms(), &[big(7)]);
        assert_eq!(engel(&Fraction::new(5u32, 5u32).unwrap()).terms(), &[big(1)]);
        assert_eq!(engel(&Fraction::new(6u32, 5u32).unwrap()).terms(), &[big(1), big(5)]);
    }

    #[test]
    fn test_zero_has_no_terms() {
        assert!(engel(&Fraction::zero()).is_empty());
    }

    #[test]
    fn test_cancelled_before_first_term() {
        let token = CancellationToken::new();
        token.cancel();
        let (terms, complete) = engel_until(&Fraction::new(4u32, 17u32).unwrap(), &token);
        assert!(terms.is_empty());
        assert!(!complete);
    }
}
