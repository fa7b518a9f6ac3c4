// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Greedy (Fibonacci-Sylvester) expansion.
//!
//! Repeatedly subtract the largest unit fraction not exceeding the remainder,
//! `1 / ceil(ud/un)`, and reduce. The numerator strictly decreases so the
//! loop terminates, but denominators can grow doubly exponentially, so
//! [`greedy_until`] checks a [`CancellationToken`] before each term.

use num_bigint::BigUint;

use crate::cancel::CancellationToken;
use crate::rational::{ceil_div, Fraction};
use crate::state::TermSequence;

/// The greedy expansion of `target`.
pub fn greedy(target: &Fraction) -> TermSequence {
    greedy_until(target, &CancellationToken::new()).0
}

/// [`greedy`], stopping early once `token` is cancelled.
///
/// Returns the terms computed so far and whether the expansion is complete.
pub fn greedy_until(target: &Fraction, token: &CancellationToken) -> (TermSequence, bool) {
    let mut remaining = target.reduced();
    let mut terms: Vec<BigUint> = Vec::new();
    while !remaining.is_zero() {
        if token.is_cancelled() {
            return (TermSequence::new(terms), false);
        }
        let t = ceil_div(remaining.denom(), remaining.numer());
        remaining = match remaining.sub_unit(&t) {
            Some(rest) => rest.reduced(),
            None => unreachable!("1/ceil(d/n) never exceeds n/d"),
        };
        terms.push(t);
    }
    (TermSequence::new(terms), true)
}
