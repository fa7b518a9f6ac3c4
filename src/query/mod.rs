// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Queries: validated input, configuration, and the per-query pipeline.
//!
//! A query is one `(n, d, max_terms)` triple. Running it computes the seed
//! expansions, then the exhaustive search, and packages everything into a
//! [`QueryReport`]. Nothing is shared between queries except the
//! cancellation token.

use std::time::{Duration, Instant};

use num_bigint::{BigInt, BigUint};
use num_traits::{ToPrimitive, Zero};
use tracing::info;

use crate::cancel::{CancellationToken, StopCondition};
use crate::context::SearchContext;
use crate::engine::SearchEngine;
use crate::error::{EgyptianError, Result};
use crate::rational::Fraction;
use crate::report::QueryReport;
use crate::seed::Seeds;

/// Number of solutions shown after an interruption.
pub const DEFAULT_DISPLAY_LIMIT: usize = 9;

/// A validated query: positive `numerator / denominator` and `max_terms > 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    target: Fraction,
    max_terms: usize,
}

impl Query {
    /// Validate raw, possibly negative input.
    pub fn new(numerator: &BigInt, denominator: &BigInt, max_terms: i64) -> Result<Self> {
        let numer = positive(numerator, "numerator")?;
        let denom = positive(denominator, "denominator")?;
        Ok(Self {
            target: Fraction::new(numer, denom)?,
            max_terms: term_budget(max_terms)?,
        })
    }

    pub fn target(&self) -> &Fraction {
        &self.target
    }

    pub fn max_terms(&self) -> usize {
        self.max_terms
    }

    /// One query per numerator in `lo..=hi`, all over `denominator`.
    ///
    /// The range is validated up front; queries are built one at a time as
    /// the batch is iterated.
    pub fn batch(
        lo: &BigInt,
        hi: &BigInt,
        denominator: &BigInt,
        max_terms: i64,
    ) -> Result<Batch> {
        if hi < lo {
            return Err(EgyptianError::invalid(format!(
                "numerator range {}..={} is empty",
                lo, hi
            )));
        }
        let next = positive(lo, "numerator")?;
        let last = positive(hi, "numerator")?;
        let denom = positive(denominator, "denominator")?;
        Ok(Batch {
            next,
            last,
            denom,
            max_terms: term_budget(max_terms)?,
        })
    }
}

/// Lazy sequence of queries over a numerator range. See [`Query::batch`].
#[derive(Debug, Clone)]
pub struct Batch {
    next: BigUint,
    last: BigUint,
    denom: BigUint,
    max_terms: usize,
}

impl Batch {
    /// True once every numerator has been handed out.
    pub fn is_finished(&self) -> bool {
        self.next > self.last
    }
}

impl Iterator for Batch {
    type Item = Query;

    fn next(&mut self) -> Option<Query> {
        if self.is_finished() {
            return None;
        }
        let numer = self.next.clone();
        self.next += 1u32;
        Some(Query {
            target: Fraction::new(numer, self.denom.clone()).ok()?,
            max_terms: self.max_terms,
        })
    }
}

fn term_budget(max_terms: i64) -> Result<usize> {
    if max_terms <= 0 {
        return Err(EgyptianError::invalid(format!(
            "term count must be positive, got {}",
            max_terms
        )));
    }
    max_terms
        .to_usize()
        .ok_or_else(|| EgyptianError::invalid(format!("term count {} is too large", max_terms)))
}

fn positive(value: &BigInt, what: &str) -> Result<BigUint> {
    match value.to_biguint() {
        Some(v) if !v.is_zero() => Ok(v),
        _ => Err(EgyptianError::invalid(format!(
            "{} must be positive, got {}",
            what, value
        ))),
    }
}

/// Knobs shared by every query in a run.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Solutions listed after an interruption.
    pub display_limit: usize,

    /// Per-query wall-clock limit.
    pub timeout: Option<Duration>,

    /// Per-query frame budget.
    pub max_frames: Option<u64>,

    /// Whether to compute the Engel and greedy expansions first.
    pub seeds: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            display_limit: DEFAULT_DISPLAY_LIMIT,
            timeout: None,
            max_frames: None,
            seeds: true,
        }
    }
}

impl SearchConfig {
    fn stop_condition(&self, token: &CancellationToken) -> StopCondition {
        let mut stop = StopCondition::new(token.clone());
        if let Some(timeout) = self.timeout {
            stop = stop.with_timeout(timeout);
        }
        if let Some(max_frames) = self.max_frames {
            stop = stop.with_max_frames(max_frames);
        }
        stop
    }
}

/// Run one query: seeds first, then the exhaustive search.
pub fn run(query: &Query, config: &SearchConfig, token: &CancellationToken) -> QueryReport {
    let started = Instant::now();

    let seeds = config
        .seeds
        .then(|| Seeds::compute_until(query.target(), token));

    let mut ctx = SearchContext::with_stop(query.max_terms(), config.stop_condition(token));
    let outcome = SearchEngine::new(query.target().clone()).search(&mut ctx);
    let elapsed = started.elapsed();

    info!(
        fraction = %query.target(),
        max_terms = query.max_terms(),
        solutions = ctx.solutions.len(),
        elapsed_us = elapsed.as_micros() as u64,
        "query finished"
    );

    QueryReport {
        target: query.target().clone(),
        seeds,
        solutions: ctx.solutions,
        partial: ctx.terms,
        statistics: ctx.statistics,
        outcome,
        elapsed,
        display_limit: config.display_limit,
    }
}
