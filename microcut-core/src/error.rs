// ============================================================================
// microcut-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Custom Error Types for microcut-core
//
// This module defines the error type used throughout the library. Planning
// failures are input errors and are never retried.
//
// KEY COMPONENTS:
// - CoreError: Enum of all error conditions
// - CoreResult: Result alias used by every fallible function

// ---- External crate imports ----
use thiserror::Error;

// ---- Standard library imports ----
use std::io;

/// Errors produced by microcut-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A duration constraint is non-positive, non-finite, or `min >= max`.
    #[error("Invalid constraint: {0}")]
    InvalidConstraint(String),

    /// An input interval is empty, reversed, non-finite, or not contiguous
    /// with its predecessor.
    #[error("Invalid interval: {0}")]
    InvalidInterval(String),

    /// Detector output could not be parsed.
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// A produced plan does not exactly partition the span it was built for.
    #[error("Segments cover {actual_start:.3}s-{actual_end:.3}s, expected {expected_start:.3}s-{expected_end:.3}s")]
    CoverageMismatch {
        expected_start: f64,
        expected_end: f64,
        actual_start: f64,
        actual_end: f64,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Path error: {0}")]
    PathError(String),

    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

/// Result type for microcut-core operations.
pub type CoreResult<T> = Result<T, CoreError>;
