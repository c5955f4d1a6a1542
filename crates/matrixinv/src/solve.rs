//! Inverse lookup through a [`MatrixCache`]

use crate::cache::MatrixCache;
use crate::error::Result;
use crate::inverse::{GaussJordan, InverseOptions, Inverter};
use crate::scalar::Scalar;
use crate::util::Matrix;

/// Where the inverse returned by [`solve_with_status`] came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    /// Served from the cached inverse
    Hit,
    /// Computed by the inverter and stored in the cache
    Miss,
}

/// Return the inverse of the cached matrix, computing and storing it on a miss
///
/// `options` are handed to `inverter` unchanged. If the inverter fails, the
/// error is returned as is and nothing is stored, so the next call tries again.
pub fn solve<T, I>(
    cache: &mut MatrixCache<T>,
    inverter: &I,
    options: &InverseOptions,
) -> Result<Matrix<T>>
where
    T: Scalar,
    I: Inverter<T> + ?Sized,
{
    solve_with_status(cache, inverter, options).map(|(inverse, _)| inverse)
}

/// Like [`solve`], also reporting whether the cache was hit
pub fn solve_with_status<T, I>(
    cache: &mut MatrixCache<T>,
    inverter: &I,
    options: &InverseOptions,
) -> Result<(Matrix<T>, CacheStatus)>
where
    T: Scalar,
    I: Inverter<T> + ?Sized,
{
    if let Some(inverse) = cache.cached_inverse() {
        tracing::debug!(dim = cache.dim(), "serving cached inverse");
        return Ok((inverse.clone(), CacheStatus::Hit));
    }

    tracing::trace!(dim = cache.dim(), "computing inverse");
    let inverse = inverter.invert(cache.matrix(), options)?;
    cache.set_cached_inverse(inverse.clone());
    Ok((inverse, CacheStatus::Miss))
}

/// [`solve`] with the [`GaussJordan`] routine
pub fn cached_inv<T: Scalar>(
    cache: &mut MatrixCache<T>,
    options: Option<InverseOptions>,
) -> Result<Matrix<T>> {
    let opts = options.unwrap_or_default();
    solve(cache, &GaussJordan, &opts)
}
