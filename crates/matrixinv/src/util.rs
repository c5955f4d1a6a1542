//! Dense matrix storage and helpers

use num_traits::{One, Zero};
use std::ops::{Index, IndexMut};

use crate::error::{MatrixInvError, Result};
use crate::scalar::Scalar;

/// Simple 2D matrix backed by Vec (row-major)
///
/// Equality is element-wise, so two matrices compare equal exactly when they
/// have the same shape and every entry matches.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    nrows: usize,
    ncols: usize,
}

impl<T: Clone> Matrix<T> {
    /// Create a new matrix from dimensions and initial value
    pub fn from_elem(nrows: usize, ncols: usize, elem: T) -> Self {
        Self {
            data: vec![elem; nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Number of rows
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// `(nrows, ncols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Whether the row count equals the column count
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Row-major view of the elements
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get a row as a slice
    pub fn row(&self, i: usize) -> &[T] {
        let start = i * self.ncols;
        &self.data[start..start + self.ncols]
    }
}

impl<T: Clone + Zero> Matrix<T> {
    /// Create a zeros matrix
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self::from_elem(nrows, ncols, T::zero())
    }
}

impl<T> Index<[usize; 2]> for Matrix<T> {
    type Output = T;

    fn index(&self, idx: [usize; 2]) -> &Self::Output {
        &self.data[idx[0] * self.ncols + idx[1]]
    }
}

impl<T> IndexMut<[usize; 2]> for Matrix<T> {
    fn index_mut(&mut self, idx: [usize; 2]) -> &mut Self::Output {
        &mut self.data[idx[0] * self.ncols + idx[1]]
    }
}

/// Create a zeros matrix with given dimensions
pub fn zeros<T: Clone + Zero>(nrows: usize, ncols: usize) -> Matrix<T> {
    Matrix::zeros(nrows, ncols)
}

/// Create an identity matrix
pub fn eye<T: Clone + Zero + One>(n: usize) -> Matrix<T> {
    let mut m = zeros(n, n);
    for i in 0..n {
        m[[i, i]] = T::one();
    }
    m
}

/// Create a matrix from a 2D vector (row-major)
///
/// Every row must have the same length as the first one. An empty outer
/// vector gives a 0x0 matrix.
pub fn from_vec2d<T: Clone>(data: Vec<Vec<T>>) -> Result<Matrix<T>> {
    let nrows = data.len();
    let ncols = data.first().map_or(0, Vec::len);

    let mut flat = Vec::with_capacity(nrows * ncols);
    for (i, row) in data.into_iter().enumerate() {
        if row.len() != ncols {
            return Err(MatrixInvError::RaggedRows {
                row: i,
                expected: ncols,
                actual: row.len(),
            });
        }
        flat.extend(row);
    }

    Ok(Matrix {
        data: flat,
        nrows,
        ncols,
    })
}

/// Transpose the matrix
pub fn transpose<T: Clone + Zero>(m: &Matrix<T>) -> Matrix<T> {
    let mut result = zeros(m.ncols, m.nrows);
    for i in 0..m.nrows {
        for j in 0..m.ncols {
            result[[j, i]] = m[[i, j]].clone();
        }
    }
    result
}

/// Matrix multiplication: A * B
///
/// # Panics
///
/// Panics if `a.ncols() != b.nrows()`.
pub fn mat_mul<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Matrix<T> {
    let m = a.nrows;
    let k = a.ncols;
    let n = b.ncols;
    assert_eq!(b.nrows, k);

    let mut result = zeros(m, n);
    for i in 0..m {
        for j in 0..n {
            let mut sum = T::zero();
            for l in 0..k {
                sum = sum + a[[i, l]] * b[[l, j]];
            }
            result[[i, j]] = sum;
        }
    }
    result
}

/// Largest element magnitude
pub fn max_abs<T: Scalar>(m: &Matrix<T>) -> f64 {
    m.data.iter().map(|&x| x.abs_val()).fold(0.0, f64::max)
}

/// Largest element-wise distance `|a_ij - b_ij|` between two same-shape matrices
///
/// # Panics
///
/// Panics if the shapes differ.
pub fn max_abs_diff<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> f64 {
    assert_eq!(a.shape(), b.shape());
    a.data
        .iter()
        .zip(b.data.iter())
        .map(|(&x, &y)| (x - y).abs_val())
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_basic() {
        let mut m = zeros::<f64>(3, 3);
        m[[0, 0]] = 1.0;
        m[[1, 1]] = 2.0;
        m[[2, 2]] = 3.0;

        assert_eq!(m[[0, 0]], 1.0);
        assert_eq!(m[[1, 1]], 2.0);
        assert_eq!(m[[2, 2]], 3.0);
        assert!(m.is_square());
    }

    #[test]
    fn test_from_vec2d_ragged() {
        let err = from_vec2d(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(
            err,
            MatrixInvError::RaggedRows {
                row: 1,
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_from_vec2d_empty() {
        let m = from_vec2d::<f64>(Vec::new()).unwrap();
        assert_eq!(m.shape(), (0, 0));
        assert!(m.is_square());
    }

    #[test]
    fn test_matrix_transpose() {
        let m = from_vec2d(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        let mt = transpose(&m);

        assert_eq!(mt.shape(), (3, 2));
        assert!(!m.is_square());
        assert_eq!(mt[[0, 0]], 1.0);
        assert_eq!(mt[[0, 1]], 4.0);
        assert_eq!(mt[[2, 0]], 3.0);
    }

    #[test]
    fn test_mat_mul() {
        let a = from_vec2d(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let b = from_vec2d(vec![vec![5.0, 6.0], vec![7.0, 8.0]]).unwrap();
        let c = mat_mul(&a, &b);

        assert_eq!(c.row(0), &[19.0, 22.0]);
        assert_eq!(c.row(1), &[43.0, 50.0]);
    }

    #[test]
    fn test_elementwise_equality() {
        let a = from_vec2d(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let mut b = a.clone();
        assert_eq!(a, b);

        b[[1, 0]] = 3.5;
        assert_ne!(a, b);
        assert_eq!(max_abs_diff(&a, &b), 0.5);
        assert_eq!(max_abs(&a), 4.0);
    }

    #[test]
    #[should_panic]
    fn test_mat_mul_shape_mismatch_panics() {
        let a = zeros::<f64>(2, 3);
        let b = zeros::<f64>(2, 3);
        mat_mul(&a, &b);
    }

    #[test]
    #[should_panic]
    fn test_max_abs_diff_shape_mismatch_panics() {
        max_abs_diff(&zeros::<f64>(2, 2), &zeros::<f64>(3, 3));
    }
}
