// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exhaustive branch-and-bound search for Egyptian fraction expansions.
//!
//! Finds every expansion `n/d = 1/t1 + ... + 1/tj` with `t1 < ... < tj` and
//! `j <= max_terms`.
//!
//! # Architecture
//!
//! The engine keeps an explicit stack of frames instead of recursing. Each
//! frame tracks:
//! - The remaining fraction, in lowest terms
//! - The remaining term budget
//! - Its depth, which is also its slot in the [`TermBuffer`](crate::state::TermBuffer)
//! - The next candidate denominator
//!
//! Entering a frame:
//! 1. Reduce the remaining fraction
//! 2. If it is `1/m` with `m` above the previous denominator: record the
//!    buffer prefix plus `m` as a solution; the frame ends there
//! 3. Otherwise start the candidate at [`lower_bound`]
//!
//! Each step of the top frame:
//! 1. Poll the stop condition
//! 2. If [`admits`] fails: pop the frame (cutoff)
//! 3. Write the candidate `t` to the frame's slot and advance it
//! 4. If `remaining - 1/t` is positive, enter a child frame for it
//!
//! Solutions are therefore discovered depth first, with increasing `t` at
//! every level.
//!
//! # Example
//!
//! ```
//! use egyptian_search::context::SearchContext;
//! use egyptian_search::engine::{SearchEngine, SearchOutcome};
//! use egyptian_search::rational::Fraction;
//!
//! let mut ctx = SearchContext::new(3);
//! let engine = SearchEngine::new(Fraction::new(2u32, 3u32).unwrap());
//! assert_eq!(engine.search(&mut ctx), SearchOutcome::Exhausted);
//!
//! let found: Vec<String> = ctx.solutions.discovered().iter().map(|s| s.to_string()).collect();
//! assert_eq!(found, ["[2, 6]", "[3, 4, 12]"]);
//! ```

use num_bigint::BigUint;
use num_traits::Zero;
use tracing::{debug, trace};

use crate::bound::{admits, lower_bound};
use crate::cancel::StopReason;
use crate::context::SearchContext;
use crate::rational::Fraction;
use crate::state::Counters;

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Every branch was explored.
    Exhausted,

    /// A stop condition fired.
    ///
    /// Buffer slots `0..live_depth` hold the path being explored when the
    /// search stopped; later slots may be stale.
    Interrupted { reason: StopReason, live_depth: usize },
}

impl SearchOutcome {
    pub fn is_exhausted(&self) -> bool {
        matches!(self, SearchOutcome::Exhausted)
    }
}

/// One level of the search.
#[derive(Debug)]
struct Frame {
    /// Fraction still to be expanded, in lowest terms.
    remaining: Fraction,

    /// Terms still available, including this level's.
    budget: usize,

    /// Buffer slot this frame writes.
    depth: usize,

    /// Next candidate denominator.
    next: BigUint,
}

/// Exhaustive search for one target fraction.
pub struct SearchEngine {
    target: Fraction,

    stack: Vec<Frame>,
}

impl SearchEngine {
    pub fn new(target: Fraction) -> Self {
        Self {
            target,
            stack: Vec::new(),
        }
    }

    /// Run the search to completion or until `ctx.stop` fires.
    ///
    /// Solutions are appended to `ctx.solutions`; the term budget is
    /// `ctx.max_terms()`. On interruption everything recorded so far
    /// stays in the context.
    ///
    /// # Panics
    ///
    /// Panics if the target is zero; expansions exist only for positive
    /// fractions and queries reject zero numerators before searching.
    pub fn search(mut self, ctx: &mut SearchContext) -> SearchOutcome {
        self.stack.clear();

        debug!(fraction = %self.target, max_terms = ctx.max_terms(), "search started");

        let root = self.target.clone();
        let budget = ctx.max_terms();
        let outcome = match self.enter(ctx, root, budget, 0, &BigUint::zero()) {
            Some(reason) => SearchOutcome::Interrupted {
                reason,
                live_depth: 0,
            },
            None => self.run(ctx),
        };

        debug!(
            fraction = %self.target,
            solutions = ctx.solutions.len(),
            ?outcome,
            statistics = %ctx.statistics,
            "search finished"
        );
        outcome
    }

    fn run(&mut self, ctx: &mut SearchContext) -> SearchOutcome {
        loop {
            let Some(frame) = self.stack.last_mut() else {
                return SearchOutcome::Exhausted;
            };

            if let Some(reason) = ctx.stop.check(ctx.statistics.get(Counters::Frames)) {
                return SearchOutcome::Interrupted {
                    reason,
                    live_depth: frame.depth,
                };
            }

            if !admits(frame.budget, &frame.remaining, &frame.next) {
                ctx.statistics.increment_counter(Counters::Cutoffs);
                self.stack.pop();
                continue;
            }

            let t = frame.next.clone();
            frame.next += 1u32;
            ctx.terms.set(frame.depth, &t);
            ctx.statistics.increment_counter(Counters::Candidates);

            // A zero remainder only arises for a unit fraction, which was
            // recorded on entry instead of being pushed.
            let child = match frame.remaining.sub_unit(&t) {
                Some(rest) if !rest.is_zero() => Some((rest, frame.budget - 1, frame.depth + 1)),
                _ => None,
            };

            if let Some((rest, budget, depth)) = child {
                if let Some(reason) = self.enter(ctx, rest, budget, depth, &t) {
                    return SearchOutcome::Interrupted {
                        reason,
                        live_depth: depth,
                    };
                }
            }
        }
    }

    /// Enter a frame at `depth`. Either records a unit-fraction leaf or pushes
    /// the frame. Returns the stop reason if the search must unwind instead.
    fn enter(
        &mut self,
        ctx: &mut SearchContext,
        remaining: Fraction,
        budget: usize,
        depth: usize,
        previous: &BigUint,
    ) -> Option<StopReason> {
        if let Some(reason) = ctx.stop.check(ctx.statistics.get(Counters::Frames)) {
            return Some(reason);
        }
        ctx.statistics.increment_counter(Counters::Frames);

        let remaining = remaining.reduced();
        assert!(!remaining.is_zero(), "entered a frame with nothing left to expand");

        if remaining.is_unit() && remaining.denom() > previous {
            let solution = ctx.terms.snapshot_with(depth, remaining.denom().clone());
            debug_assert!(solution.is_strictly_increasing());
            trace!(%solution, "solution");
            ctx.solutions.push(solution);
            ctx.statistics.increment_counter(Counters::Solutions);
            return None;
        }

        let next = lower_bound(&remaining, previous);
        self.stack.push(Frame {
            remaining,
            budget,
            depth,
            next,
        });
        None
    }
}

/// Convenience wrapper: search `target` with a fresh context of `max_terms`
/// slots and no stop condition. Returns the solutions in discovery order.
pub fn expansions(target: &Fraction, max_terms: usize) -> Vec<crate::state::TermSequence> {
    let mut ctx = SearchContext::new(max_terms);
    SearchEngine::new(target.clone()).search(&mut ctx);
    ctx.solutions.into_vec()
}
