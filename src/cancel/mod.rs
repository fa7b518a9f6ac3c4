// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Cooperative cancellation.
//!
//! An operator interrupt never touches search state directly. The signal
//! handler only sets a flag on a [`CancellationToken`]; the engine polls a
//! [`StopCondition`] at each loop head and frame entry and unwinds from there,
//! so arithmetic and buffer writes always complete.
//!
//! A wall-clock deadline and a frame budget are checked at the same points.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Shared flag that requests a search to stop.
///
/// Clones share the flag, so one clone can live in a signal handler while
/// another is polled by the engine.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    flag: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Route Ctrl-C (SIGINT) to `token`.
///
/// Can be installed once per process.
pub fn install_interrupt_handler(token: &CancellationToken) -> Result<(), ctrlc::Error> {
    let token = token.clone();
    ctrlc::set_handler(move || token.cancel())
}

/// Why a search stopped before exhausting its space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The cancellation token was triggered.
    Interrupt,
    /// The wall-clock deadline passed.
    Deadline,
    /// The frame budget was used up.
    FrameBudget,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::Interrupt => write!(f, "Interrupted"),
            StopReason::Deadline => write!(f, "Timed out"),
            StopReason::FrameBudget => write!(f, "Frame budget exhausted"),
        }
    }
}

/// Everything the engine polls at a safe point.
#[derive(Debug, Clone, Default)]
pub struct StopCondition {
    token: CancellationToken,
    deadline: Option<Instant>,
    max_frames: Option<u64>,
}

impl StopCondition {
    pub fn new(token: CancellationToken) -> Self {
        Self {
            token,
            deadline: None,
            max_frames: None,
        }
    }

    /// Stop once `timeout` has elapsed from now.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.deadline = Some(Instant::now() + timeout);
        self
    }

    /// Stop after `max_frames` frames have been entered.
    pub fn with_max_frames(mut self, max_frames: u64) -> Self {
        self.max_frames = Some(max_frames);
        self
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// Check all triggers, given the number of frames entered so far.
    pub fn check(&self, frames: u64) -> Option<StopReason> {
        if self.token.is_cancelled() {
            return Some(StopReason::Interrupt);
        }
        if matches!(self.max_frames, Some(max) if frames >= max) {
            return Some(StopReason::FrameBudget);
        }
        if matches!(self.deadline, Some(deadline) if Instant::now() >= deadline) {
            return Some(StopReason::Deadline);
        }
        None
    }
}
