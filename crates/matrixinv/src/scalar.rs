//! Scalar trait for the element types a cached matrix may hold.

use num_complex::{Complex32, Complex64};
use num_traits::{Float, One, Zero};

/// Element type of a [`Matrix`](crate::Matrix) that can be inverted.
///
/// Pivots are ranked and compared against tolerances by [`Scalar::abs_val`],
/// which must not square its argument: squaring underflows for magnitudes
/// below roughly `1e-162`.
pub trait Scalar:
    Clone
    + Copy
    + PartialEq
    + Zero
    + One
    + std::ops::Add<Output = Self>
    + std::ops::Sub<Output = Self>
    + std::ops::Mul<Output = Self>
    + std::ops::Div<Output = Self>
    + std::ops::Neg<Output = Self>
    + std::fmt::Debug
    + Default
    + Send
    + Sync
    + 'static
{
    /// Magnitude as f64 (modulus for complex values).
    fn abs_val(self) -> f64;

    /// Whether any component is NaN.
    fn is_nan(self) -> bool;
}

impl Scalar for f64 {
    #[inline]
    fn abs_val(self) -> f64 {
        Float::abs(self)
    }

    #[inline]
    fn is_nan(self) -> bool {
        Float::is_nan(self)
    }
}

impl Scalar for f32 {
    #[inline]
    fn abs_val(self) -> f64 {
        Float::abs(self) as f64
    }

    #[inline]
    fn is_nan(self) -> bool {
        Float::is_nan(self)
    }
}

// `norm` is hypot-based, so tiny moduli survive.
impl Scalar for Complex64 {
    #[inline]
    fn abs_val(self) -> f64 {
        self.norm()
    }

    #[inline]
    fn is_nan(self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }
}

impl Scalar for Complex32 {
    #[inline]
    fn abs_val(self) -> f64 {
        self.norm() as f64
    }

    #[inline]
    fn is_nan(self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abs_val_real() {
        assert_eq!(Scalar::abs_val(-3.0f64), 3.0);
        assert_eq!(Scalar::abs_val(-2.0f32), 2.0);
    }

    #[test]
    fn test_abs_val_complex() {
        let z = Complex64::new(3.0, 4.0);
        assert!((z.abs_val() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_abs_val_tiny_does_not_underflow() {
        assert_eq!(Scalar::abs_val(-1e-170f64), 1e-170);

        let z = Complex64::new(0.0, 1e-170);
        assert!(z.abs_val() > 0.0);
        assert!((z.abs_val() / 1e-170 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_is_nan() {
        assert!(Scalar::is_nan(f64::NAN));
        assert!(!Scalar::is_nan(1.0f64));
        assert!(Scalar::is_nan(Complex32::new(0.0, f32::NAN)));
    }
}
