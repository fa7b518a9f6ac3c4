// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for queries and rational arithmetic.
//!
//! Cancellation is not an error: an interrupted search returns normally with
//! [`crate::engine::SearchOutcome::Interrupted`].

use thiserror::Error;

/// Errors surfaced to the caller before any search runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EgyptianError {
    /// A fraction was built or reduced with a zero denominator.
    #[error("division by zero")]
    DivisionByZero,

    /// The query was rejected during validation.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// Text could not be read as an integer or fraction.
    #[error("cannot parse {input:?} as a non-negative integer or fraction")]
    Parse { input: String },
}

impl EgyptianError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        EgyptianError::InvalidInput {
            reason: reason.into(),
        }
    }
}

/// Result type for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, EgyptianError>;
