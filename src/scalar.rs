//! Scalar type bounds for the layout kernels.

use num_complex::Complex;
use num_traits::Zero;
use std::ops::{Add, Neg};

/// Shared trait bounds for element types moved by the layout kernels.
///
/// The kernels rearrange values rather than computing with them; the only
/// arithmetic they need is the accumulation in gather/scatter (`Add`) and
/// the sign flip of the antisymmetric relations (`Neg`). [`Scalar::conj`]
/// is the complex conjugate, an identity for real types, which is what
/// collapses the Hermitian relations onto their symmetric counterparts for
/// real matrices.
pub trait Scalar:
    Copy + Send + Sync + Add<Output = Self> + Neg<Output = Self> + Zero + PartialEq + 'static
{
    /// Complex conjugate; identity for real types.
    fn conj(self) -> Self;
}

macro_rules! impl_scalar_real {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                #[inline(always)]
                fn conj(self) -> Self {
                    self
                }
            }
        )*
    };
}

impl_scalar_real!(f32, f64, i8, i16, i32, i64, i128, isize);

impl<T> Scalar for Complex<T>
where
    T: num_traits::Num + Neg<Output = T> + Copy + Send + Sync + 'static,
{
    #[inline(always)]
    fn conj(self) -> Self {
        Complex::conj(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    fn assert_scalar<T: Scalar>() {}

    #[test]
    fn test_standard_types() {
        assert_scalar::<f32>();
        assert_scalar::<f64>();
        assert_scalar::<i32>();
        assert_scalar::<i64>();
        assert_scalar::<Complex64>();
    }

    #[test]
    fn test_conj_real() {
        assert_eq!(3.5f64.conj(), 3.5);
        assert_eq!((-2i32).conj(), -2);
    }

    #[test]
    fn test_conj_complex() {
        let z = Complex64::new(3.0, 4.0);
        assert_eq!(Scalar::conj(z), Complex64::new(3.0, -4.0));
    }
}
