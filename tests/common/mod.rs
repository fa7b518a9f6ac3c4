// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::collections::BTreeSet;

use num_bigint::BigUint;
use num_integer::Integer;
use egyptian_search::{Fraction, TermSequence};

pub fn frac(n: u64, d: u64) -> Fraction {
    Fraction::new(n, d).unwrap()
}

pub fn seq(terms: &[u64]) -> TermSequence {
    terms.iter().map(|&t| BigUint::from(t)).collect()
}

pub fn seqs(lists: &[&[u64]]) -> Vec<TermSequence> {
    lists.iter().map(|terms| seq(terms)).collect()
}

/// Panic unless every solution is a valid expansion of `target` with at most
/// `max_terms` terms.
pub fn assert_all_expand(target: &Fraction, max_terms: usize, solutions: &[TermSequence]) {
    for solution in solutions {
        assert!(
            solution.len() <= max_terms,
            "{} has more than {} terms",
            solution,
            max_terms
        );
        assert!(solution.expands(target), "{} does not sum to {}", solution, target);
    }
}

/// `n/d` in lowest terms as machine integers.
fn lowest(n: u128, d: u128) -> (u128, u128) {
    let g = n.gcd(&d);
    (n / g, d / g)
}

/// Brute-force enumeration of what the exhaustive search should report for
/// `n/d` with at most three terms and the first two denominators below
/// `limit`.
///
/// Mirrors the search's reporting rule: once a remainder reduces to `1/m`
/// with `m` above the last denominator, that branch ends with `m` and is not
/// split further.
pub fn brute_force(n: u64, d: u64, max_terms: usize, limit: u64) -> BTreeSet<Vec<u64>> {
    assert!((1..=3).contains(&max_terms));
    let (n, d) = lowest(n as u128, d as u128);
    let mut found = BTreeSet::new();
    if n == 1 {
        found.insert(vec![d as u64]);
        return found;
    }
    if max_terms == 1 {
        return found;
    }
    for a in 1..limit as u128 {
        // n/d - 1/a
        if n * a <= d {
            continue;
        }
        let (rn, rd) = lowest(n * a - d, d * a);
        if rn == 1 && rd > a {
            found.insert(vec![a as u64, rd as u64]);
            continue;
        }
        if max_terms < 3 {
            continue;
        }
        for b in a + 1..limit as u128 {
            // rn/rd - 1/b
            if rn * b <= rd {
                continue;
            }
            let (sn, sd) = lowest(rn * b - rd, rd * b);
            if sn == 1 && sd > b {
                found.insert(vec![a as u64, b as u64, sd as u64]);
            }
        }
    }
    found
}

/// Solutions as plain integer vectors, for comparison with [`brute_force`].
pub fn as_u64_set(solutions: &[TermSequence]) -> BTreeSet<Vec<u64>> {
    use num_traits::ToPrimitive;
    solutions
        .iter()
        .map(|s| s.terms().iter().map(|t| t.to_u64().unwrap()).collect())
        .collect()
}
