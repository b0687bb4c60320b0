// Copyright 2026 the Pullix authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the Pullix lazy sequence library.
//!
//! This crate defines the root [`SeqError`] type shared by every Pullix
//! operation, with specific variants for the distinct failure classes of the
//! pull contract, allowing library users to handle each class appropriately.
//!
//! # Examples
//!
//! ```
//! use pullix_error::{Result, SeqError};
//!
//! fn pull_next() -> Result<i32> {
//!     // A cursor that has run out of elements
//!     Err(SeqError::exhausted())
//! }
//!
//! assert!(pull_next().unwrap_err().is_exhausted());
//! ```

/// Root error type for all Pullix operations.
///
/// The variants mirror the failure classes of the pull contract:
/// exhaustion, contract violations, construction-time bounds errors,
/// unsupported mutation, and failures raised by user-supplied generators.
#[derive(Debug, thiserror::Error)]
pub enum SeqError {
    /// A cursor was pulled past its final element.
    ///
    /// Also returned by terminal reductions (`first`, `last`, `reduce`,
    /// `min`, `max`) applied to an empty sequence without a default.
    /// Callers are expected to check `has_next` before consuming in normal
    /// operation; this variant is distinct from a contract violation.
    #[error("Cursor exhausted: no further elements")]
    Exhausted,

    /// A library contract was violated by the caller.
    ///
    /// Examples: iterating a single-use grouped or windowed sub-sequence a
    /// second time, or consuming a staged value that was never produced.
    /// These are programming errors and are never retried.
    #[error("Invalid state: {message}")]
    InvalidState {
        /// Description of the violated contract
        message: String,
    },

    /// Construction parameters referenced elements outside the source.
    ///
    /// Raised eagerly at construction time (slice bounds, character ranges);
    /// ranges are never silently clamped.
    #[error("Range [{start}, {end}) out of bounds for length {len}")]
    OutOfRange {
        /// Inclusive start of the requested range
        start: usize,
        /// Exclusive end of the requested range
        end: usize,
        /// Length of the underlying source
        len: usize,
    },

    /// An optional capability was invoked on a cursor that lacks it.
    ///
    /// The per-element removal capability fails this way on every read-only
    /// or derived (sorted, replayed, windowed) sequence.
    #[error("Unsupported operation: {operation}")]
    Unsupported {
        /// Name of the unsupported operation
        operation: String,
    },

    /// A user-supplied generator signalled failure.
    ///
    /// Wraps the error carried by a `GenStep::Fail` so it can be propagated
    /// through the cursor's own error channel instead of a panic.
    #[error("Generator error: {0}")]
    User(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SeqError {
    /// Create an exhaustion error.
    #[must_use]
    pub const fn exhausted() -> Self {
        Self::Exhausted
    }

    /// Create an invalid-state error with the given message.
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState {
            message: message.into(),
        }
    }

    /// Create a bounds error for the half-open range `[start, end)` over a
    /// source of length `len`.
    #[must_use]
    pub const fn out_of_range(start: usize, end: usize, len: usize) -> Self {
        Self::OutOfRange { start, end, len }
    }

    /// Create an unsupported-operation error.
    pub fn unsupported(operation: impl Into<String>) -> Self {
        Self::Unsupported {
            operation: operation.into(),
        }
    }

    /// Wrap a user error raised by a generator step.
    pub fn user(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::User(Box::new(error))
    }

    /// Wrap a plain message as a user error.
    pub fn user_message(message: impl Into<String>) -> Self {
        Self::User(message.into().into())
    }

    /// Check whether this error is plain exhaustion.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted)
    }

    /// Check whether this error is a contract violation.
    #[must_use]
    pub const fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState { .. })
    }

    /// Check whether this error reports an unsupported capability.
    #[must_use]
    pub const fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported { .. })
    }

    /// Check whether this error is a construction-time bounds error.
    #[must_use]
    pub const fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}

/// Specialized `Result` type for Pullix operations.
///
/// # Examples
///
/// ```
/// use pullix_error::Result;
///
/// fn count_elements() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, SeqError>;
