//! Memoized inverse of a dense square matrix
//!
//! This crate provides:
//! - `MatrixCache`: a square matrix together with its cached inverse
//! - `solve` / `cached_inv`: return the inverse, computing it only on a cache miss
//! - `Inverter` and `GaussJordan`: the inversion routine the cache delegates to
//!
//! # Example
//!
//! ```
//! use matrixinv::{cached_inv, from_vec2d, MatrixCache};
//!
//! let mut cache = MatrixCache::from_vec2d(vec![
//!     vec![4.0, 7.0],
//!     vec![2.0, 6.0],
//! ]).unwrap();
//!
//! // First call computes and stores the inverse, the second one reuses it
//! let inv = cached_inv(&mut cache, None).unwrap();
//! assert_eq!(cached_inv(&mut cache, None).unwrap(), inv);
//!
//! // Replacing the matrix with a different one drops the cached inverse
//! cache.set_matrix(from_vec2d(vec![vec![1.0, 0.0], vec![0.0, 2.0]]).unwrap()).unwrap();
//! assert!(cache.cached_inverse().is_none());
//! ```

pub mod cache;
pub mod error;
pub mod inverse;
pub mod scalar;
pub mod solve;
pub mod util;

// Re-export main types
pub use cache::MatrixCache;
pub use error::{MatrixInvError, Result};
pub use inverse::{invert, GaussJordan, InverseOptions, Inverter};
pub use scalar::Scalar;
pub use solve::{cached_inv, solve, solve_with_status, CacheStatus};
pub use util::{eye, from_vec2d, Matrix};
