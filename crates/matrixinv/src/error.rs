//! Error types for matrixinv

use thiserror::Error;

/// Errors that can occur while caching or computing a matrix inverse
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixInvError {
    /// Matrix does not have as many rows as columns
    #[error("Matrix is not square: got ({nrows}, {ncols})")]
    NotSquare { nrows: usize, ncols: usize },

    /// Nested row input whose rows differ in length
    #[error("Ragged input: row {row} has {actual} elements, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Matrix has no inverse
    #[error("Singular matrix encountered during inversion")]
    SingularMatrix,

    /// Invalid argument
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// NaN values encountered
    #[error("NaN values encountered in {matrix}")]
    NaNEncountered { matrix: String },
}

/// Result type for matrixinv operations
pub type Result<T> = std::result::Result<T, MatrixInvError>;
