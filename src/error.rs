//! Unified error types for hashtag-report.
//!
//! This module provides a single [`ReportError`] enum that covers every way a
//! report or export request can fail. Store failures keep their own
//! [`StoreError`](crate::store::StoreError) type and are wrapped unchanged.
//!
//! # Error Handling Philosophy
//!
//! - **Formatting** errors (bad timestamps, non-integer counters) abort the
//!   whole request; no partial report is ever returned
//! - **Store** errors are surfaced as-is, with no retry inside the engine
//! - **Per-field encoding** problems during CSV export never reach this type;
//!   the exporter degrades the field to an empty cell instead

use std::io;

use thiserror::Error;

use crate::store::StoreError;

/// A specialized [`Result`] type for hashtag-report operations.
///
/// # Example
///
/// ```rust
/// use hashtag_report::error::Result;
/// use hashtag_report::core::format_timestamp;
///
/// fn render(raw: &str) -> Result<String> {
///     format_timestamp(raw, true)
/// }
/// # assert!(render("20160301120000").is_ok());
/// ```
pub type Result<T> = std::result::Result<T, ReportError>;

/// The error type for all report and export operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReportError {
    /// A timestamp did not match the fixed `YYYYMMDDHHMMSS` pattern.
    #[error("Invalid timestamp '{input}'. Expected format: {expected}")]
    InvalidTimestamp {
        /// The raw timestamp string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// A statistics counter could not be represented as an integer.
    #[error("Counter '{field}' is not a representable integer: {value}")]
    InvalidCounter {
        /// Name of the counter (e.g. "bytes")
        field: &'static str,
        /// Rendered offending value
        value: String,
    },

    /// The store collaborator failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// An I/O error occurred while writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-store")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A single value that cannot be written as text-safe output.
///
/// Only produced on the export and escaping paths; callers degrade the
/// affected value instead of propagating this error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot encode value: {reason}")]
pub struct EncodingError {
    /// Why the value was rejected
    pub reason: &'static str,
}

impl EncodingError {
    pub(crate) fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ReportError {
    /// Creates an invalid timestamp error.
    pub fn invalid_timestamp(input: impl Into<String>) -> Self {
        ReportError::InvalidTimestamp {
            input: input.into(),
            expected: "YYYYMMDDHHMMSS",
        }
    }

    /// Creates an invalid counter error.
    pub fn invalid_counter(field: &'static str, value: impl ToString) -> Self {
        ReportError::InvalidCounter {
            field,
            value: value.to_string(),
        }
    }

    /// Returns `true` if this is a formatting error (timestamp or counter).
    pub fn is_format(&self) -> bool {
        matches!(
            self,
            ReportError::InvalidTimestamp { .. } | ReportError::InvalidCounter { .. }
        )
    }

    /// Returns `true` if this error came from the store collaborator.
    pub fn is_store(&self) -> bool {
        matches!(self, ReportError::Store(_))
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ReportError::Io(_))
    }
}
