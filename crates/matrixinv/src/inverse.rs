//! Dense matrix inversion
//!
//! The cache treats inversion as an external routine behind the [`Inverter`]
//! trait. [`GaussJordan`] is the routine used by default.

use crate::error::{MatrixInvError, Result};
use crate::scalar::Scalar;
use crate::util::{eye, max_abs, Matrix};

/// Options for matrix inversion
#[derive(Debug, Clone, PartialEq)]
pub struct InverseOptions {
    /// A pivot whose magnitude is at most this value is treated as zero
    pub abs_tol: f64,
    /// A pivot whose magnitude is at most `rel_tol * max|a_ij|` is treated as zero
    pub rel_tol: f64,
}

impl Default for InverseOptions {
    fn default() -> Self {
        Self {
            abs_tol: 0.0,
            rel_tol: 1e-14,
        }
    }
}

impl InverseOptions {
    /// Reject negative or NaN tolerances
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("abs_tol", self.abs_tol), ("rel_tol", self.rel_tol)] {
            if value.is_nan() || value < 0.0 {
                return Err(MatrixInvError::InvalidArgument {
                    message: format!("{name} must be a non-negative number, got {value}"),
                });
            }
        }
        Ok(())
    }
}

/// A routine that computes the inverse of a square matrix
pub trait Inverter<T: Scalar> {
    /// Invert `a`, failing with [`MatrixInvError::SingularMatrix`] if it has no inverse
    fn invert(&self, a: &Matrix<T>, options: &InverseOptions) -> Result<Matrix<T>>;
}

impl<T, F> Inverter<T> for F
where
    T: Scalar,
    F: Fn(&Matrix<T>, &InverseOptions) -> Result<Matrix<T>>,
{
    fn invert(&self, a: &Matrix<T>, options: &InverseOptions) -> Result<Matrix<T>> {
        self(a, options)
    }
}

/// Gauss-Jordan elimination with partial pivoting on `[A | I]`
#[derive(Debug, Clone, Copy, Default)]
pub struct GaussJordan;

impl<T: Scalar> Inverter<T> for GaussJordan {
    fn invert(&self, a: &Matrix<T>, options: &InverseOptions) -> Result<Matrix<T>> {
        gauss_jordan_inverse(a, options)
    }
}

/// Invert a square matrix with the default routine
pub fn invert<T: Scalar>(a: &Matrix<T>, options: Option<InverseOptions>) -> Result<Matrix<T>> {
    let opts = options.unwrap_or_default();
    GaussJordan.invert(a, &opts)
}

#[allow(clippy::needless_range_loop)]
fn gauss_jordan_inverse<T: Scalar>(a: &Matrix<T>, options: &InverseOptions) -> Result<Matrix<T>> {
    options.validate()?;

    if !a.is_square() {
        return Err(MatrixInvError::NotSquare {
            nrows: a.nrows(),
            ncols: a.ncols(),
        });
    }
    if a.as_slice().iter().any(|&x| x.is_nan()) {
        return Err(MatrixInvError::NaNEncountered {
            matrix: "input matrix".to_string(),
        });
    }

    let n = a.nrows();
    let threshold = options.abs_tol.max(options.rel_tol * max_abs(a));

    let mut lhs = a.clone();
    let mut rhs: Matrix<T> = eye(n);

    for k in 0..n {
        // Find pivot
        let mut max_idx = k;
        let mut max_val = lhs[[k, k]].abs_val();
        for i in (k + 1)..n {
            let val = lhs[[i, k]].abs_val();
            if val > max_val {
                max_val = val;
                max_idx = i;
            }
        }

        // An all-zero matrix has threshold 0, so compare with `<=` to still catch it
        if max_val <= threshold {
            return Err(MatrixInvError::SingularMatrix);
        }

        if max_idx != k {
            for j in 0..n {
                let tmp = lhs[[k, j]];
                lhs[[k, j]] = lhs[[max_idx, j]];
                lhs[[max_idx, j]] = tmp;

                let tmp = rhs[[k, j]];
                rhs[[k, j]] = rhs[[max_idx, j]];
                rhs[[max_idx, j]] = tmp;
            }
        }

        let pivot = lhs[[k, k]];
        for j in 0..n {
            lhs[[k, j]] = lhs[[k, j]] / pivot;
            rhs[[k, j]] = rhs[[k, j]] / pivot;
        }

        for i in 0..n {
            if i == k {
                continue;
            }
            let factor = lhs[[i, k]];
            if factor == T::zero() {
                continue;
            }
            for j in 0..n {
                lhs[[i, j]] = lhs[[i, j]] - factor * lhs[[k, j]];
                rhs[[i, j]] = rhs[[i, j]] - factor * rhs[[k, j]];
            }
        }
    }

    Ok(rhs)
}
