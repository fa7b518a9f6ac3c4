// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exact non-negative rationals over arbitrary-precision integers.
//!
//! Every value in the search can outgrow machine words (the greedy expansion
//! of 5/121 already reaches 25 digits), so numerators and denominators are
//! [`BigUint`] throughout. A [`Fraction`] is never mutated: each operation
//! derives a new value.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;
use num_integer::Integer;
use num_rational::Ratio;
use num_traits::{One, Zero};

use crate::error::{EgyptianError, Result};

/// Reduced rational used to compare values and sum expansions.
pub type BigRatio = Ratio<BigUint>;

/// Greatest common divisor, with `gcd(0, b) == b`.
pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    a.gcd(b)
}

/// Divide `n` and `d` by their gcd.
///
/// Fails with [`EgyptianError::DivisionByZero`] when `d` is zero.
pub fn reduce(n: &BigUint, d: &BigUint) -> Result<(BigUint, BigUint)> {
    if d.is_zero() {
        return Err(EgyptianError::DivisionByZero);
    }
    let g = gcd(n, d);
    Ok((n / &g, d / &g))
}

/// `ceil(a / b)` by floor division plus correction. `b` must be positive.
pub fn ceil_div(a: &BigUint, b: &BigUint) -> BigUint {
    assert!(!b.is_zero(), "ceil_div by zero");
    let mut q = a / b;
    if &q * b < *a {
        q += 1u32;
    }
    q
}

/// A non-negative fraction `numer / denom` with `denom > 0`.
///
/// Not necessarily in lowest terms; call [`Fraction::reduced`] where that
/// matters. Equality compares values, so `2/4 == 1/2`.
#[derive(Debug, Clone)]
pub struct Fraction {
    numer: BigUint,
    denom: BigUint,
}

impl Fraction {
    /// Build `numer / denom`, rejecting a zero denominator.
    pub fn new(numer: impl Into<BigUint>, denom: impl Into<BigUint>) -> Result<Self> {
        let denom = denom.into();
        if denom.is_zero() {
            return Err(EgyptianError::DivisionByZero);
        }
        Ok(Self {
            numer: numer.into(),
            denom,
        })
    }

    /// The unit fraction `1 / t`.
    pub fn unit(t: impl Into<BigUint>) -> Result<Self> {
        Self::new(BigUint::one(), t)
    }

    pub fn zero() -> Self {
        Self {
            numer: BigUint::zero(),
            denom: BigUint::one(),
        }
    }

    pub fn numer(&self) -> &BigUint {
        &self.numer
    }

    pub fn denom(&self) -> &BigUint {
        &self.denom
    }

    /// The same value in lowest terms.
    pub fn reduced(&self) -> Self {
        let g = gcd(&self.numer, &self.denom);
        if g.is_one() {
            return self.clone();
        }
        Self {
            numer: &self.numer / &g,
            denom: &self.denom / &g,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }

    /// True when the numerator is exactly one. Only meaningful once reduced.
    pub fn is_unit(&self) -> bool {
        self.numer.is_one()
    }

    /// `self - 1/t = (n*t - d) / (d*t)`, left unreduced.
    ///
    /// Returns `None` when the difference would be negative.
    pub fn sub_unit(&self, t: &BigUint) -> Option<Self> {
        debug_assert!(!t.is_zero());
        let nt = &self.numer * t;
        if nt < self.denom {
            return None;
        }
        Some(Self {
            numer: nt - &self.denom,
            denom: &self.denom * t,
        })
    }

    /// The value as a reduced [`BigRatio`].
    pub fn to_ratio(&self) -> BigRatio {
        BigRatio::new(self.numer.clone(), self.denom.clone())
    }

    /// Exact sum of the unit fractions `1/t` for each `t` in `terms`.
    ///
    /// Fails with [`EgyptianError::DivisionByZero`] on a zero term.
    pub fn sum_of_units<'a, I>(terms: I) -> Result<BigRatio>
    where
        I: IntoIterator<Item = &'a BigUint>,
    {
        terms.into_iter().try_fold(BigRatio::zero(), |acc, t| {
            if t.is_zero() {
                return Err(EgyptianError::DivisionByZero);
            }
            Ok(acc + BigRatio::new(BigUint::one(), t.clone()))
        })
    }
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        self.to_ratio() == other.to_ratio()
    }
}

impl Eq for Fraction {}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numer, self.denom)
    }
}

impl FromStr for Fraction {
    type Err = EgyptianError;

    /// Accepts `n/d` or a bare integer `n`.
    fn from_str(s: &str) -> Result<Self> {
        let parse = |part: &str| {
            part.trim()
                .parse::<BigUint>()
                .map_err(|_| EgyptianError::Parse {
                    input: s.to_string(),
                })
        };
        match s.split_once('/') {
            Some((n, d)) => Self::new(parse(n)?, parse(d)?),
            None => Self::new(parse(s)?, BigUint::one()),
        }
    }
}
