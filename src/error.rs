//! Error types for relational operations

use thiserror::Error;

/// Result type for relational operations
pub type Result<T> = std::result::Result<T, RelationalError>;

/// Errors that can occur when vector lengths are only known at runtime
///
/// Fixed-size vectors never produce these: their size mismatches are
/// rejected by the type checker.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RelationalError {
    /// Size mismatch between operands
    #[error("Size mismatch: expected {expected}, got {actual}")]
    SizeMismatch {
        /// Expected size
        expected: usize,
        /// Actual size
        actual: usize,
    },
}
