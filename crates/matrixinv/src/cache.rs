//! Square matrix holder with a memoized inverse

use crate::error::{MatrixInvError, Result};
use crate::scalar::Scalar;
use crate::util::{from_vec2d, Matrix};

/// A square matrix together with its (optionally) cached inverse
///
/// The cached inverse, when present, always belongs to the current matrix.
/// It is dropped whenever [`MatrixCache::set_matrix`] stores a matrix that
/// differs element-wise from the current one, and kept otherwise.
#[derive(Debug, Clone)]
pub struct MatrixCache<T: Scalar> {
    /// Current matrix, always square
    matrix: Matrix<T>,
    /// Inverse of `matrix`, if it has been computed
    cached_inverse: Option<Matrix<T>>,
}

impl<T: Scalar> MatrixCache<T> {
    /// Create a cache holding `matrix` with no inverse stored yet
    ///
    /// Fails with [`MatrixInvError::NotSquare`] if `matrix` is not square.
    pub fn new(matrix: Matrix<T>) -> Result<Self> {
        check_square(&matrix)?;
        Ok(Self {
            matrix,
            cached_inverse: None,
        })
    }

    /// Create a cache from nested rows
    pub fn from_vec2d(rows: Vec<Vec<T>>) -> Result<Self> {
        Self::new(from_vec2d(rows)?)
    }

    /// Current matrix
    pub fn matrix(&self) -> &Matrix<T> {
        &self.matrix
    }

    /// Replace the matrix
    ///
    /// A non-square `matrix` is rejected and the cache keeps its previous
    /// matrix and inverse. Storing a matrix equal to the current one leaves
    /// the cached inverse in place; any other matrix discards it.
    pub fn set_matrix(&mut self, matrix: Matrix<T>) -> Result<()> {
        check_square(&matrix)?;

        if matrix == self.matrix {
            tracing::trace!(dim = self.dim(), "matrix unchanged, keeping cached inverse");
            return Ok(());
        }

        self.matrix = matrix;
        self.cached_inverse = None;
        Ok(())
    }

    /// Cached inverse, if one is stored
    pub fn cached_inverse(&self) -> Option<&Matrix<T>> {
        self.cached_inverse.as_ref()
    }

    /// Store `inverse` as the inverse of the current matrix
    ///
    /// No check is made that `inverse` actually inverts the matrix.
    pub fn set_cached_inverse(&mut self, inverse: Matrix<T>) {
        self.cached_inverse = Some(inverse);
    }

    /// Whether an inverse is stored
    pub fn is_cached(&self) -> bool {
        self.cached_inverse.is_some()
    }

    /// Number of rows (equal to the number of columns)
    pub fn dim(&self) -> usize {
        self.matrix.nrows()
    }

    /// Consume the cache and return its matrix
    pub fn into_matrix(self) -> Matrix<T> {
        self.matrix
    }
}

fn check_square<T: Clone>(matrix: &Matrix<T>) -> Result<()> {
    if matrix.is_square() {
        return Ok(());
    }
    tracing::warn!(
        nrows = matrix.nrows(),
        ncols = matrix.ncols(),
        "rejecting non-square matrix"
    );
    Err(MatrixInvError::NotSquare {
        nrows: matrix.nrows(),
        ncols: matrix.ncols(),
    })
}
