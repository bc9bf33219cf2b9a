//! Error types for the taguchi-doe library.
//!
//! This module provides typed error handling using the `thiserror` crate,
//! with specific variants for structural input violations, degenerate
//! numeric input, and unbalanced designs.

use thiserror::Error;

/// The main error type for the taguchi-doe library.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // ============ Structural Errors ============
    /// Input shapes disagree (responses vs runs, factors vs columns, ...).
    #[error("shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch {
        /// Expected shape description.
        expected: String,
        /// Actual shape description.
        actual: String,
    },

    /// A column index is out of bounds for the array.
    #[error("column {index} is out of bounds for an array with {size} factors")]
    ColumnOutOfBounds {
        /// The invalid column index.
        index: usize,
        /// The number of factor columns in the array.
        size: usize,
    },

    /// An array matrix violates the well-formedness contract.
    #[error("invalid array: {message}")]
    InvalidArray {
        /// Description of what is invalid.
        message: String,
    },

    // ============ Numeric Errors ============
    /// A response value cannot be pushed through the log-of-square
    /// S/N transform (zero or non-finite).
    #[error("degenerate response {value} at run {run}: S/N transform requires a finite non-zero response")]
    DegenerateResponse {
        /// 0-based run index of the offending response.
        run: usize,
        /// The offending response value.
        value: f64,
    },

    /// A factor's observed level count does not divide the run count,
    /// so the per-level replication assumed by the ANOVA step is undefined.
    #[error("unbalanced design: factor {factor} has {levels} observed levels, which does not divide {runs} runs")]
    UnbalancedDesign {
        /// 0-based factor column index.
        factor: usize,
        /// Number of distinct levels observed in that column.
        levels: usize,
        /// Number of runs in the array.
        runs: usize,
    },
}

/// A specialized `Result` type for taguchi-doe operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// Create a new `ShapeMismatch` error.
    #[must_use]
    pub fn shape_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::ShapeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create a new `InvalidArray` error.
    #[must_use]
    pub fn invalid_array(message: impl Into<String>) -> Self {
        Self::InvalidArray {
            message: message.into(),
        }
    }
}
