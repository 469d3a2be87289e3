//! Tolerance-aware comparison.
//!
//! `==` and the `is_*` predicates compare exactly. Callers holding floating
//! data that went through `sin`/`cos` or division opt in to a tolerance
//! here, through the `approx` traits or the `*_eps` predicates.

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::traits::{FloatScalar, Scalar};
use crate::Matrix;

impl<T, const R: usize, const C: usize> AbsDiffEq for Matrix<T, R, C>
where
    T: Scalar + AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    #[inline]
    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, const R: usize, const C: usize> RelativeEq for Matrix<T, R, C>
where
    T: Scalar + RelativeEq,
    T::Epsilon: Copy,
{
    #[inline]
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    #[inline]
    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T, const R: usize, const C: usize> UlpsEq for Matrix<T, R, C>
where
    T: Scalar + UlpsEq,
    T::Epsilon: Copy,
{
    #[inline]
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    #[inline]
    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

impl<T, const R: usize, const C: usize> Matrix<T, R, C>
where
    T: FloatScalar + AbsDiffEq<Epsilon = T>,
{
    /// `A · Aᵀ ≈ I`, every entry within `eps`. `false` for non-square shapes.
    ///
    /// ```
    /// use fixmat::Matrix;
    /// let r = Matrix::create_rot_x(0.7_f64) * Matrix::create_rot_z(-1.3);
    /// assert!(r.is_orthogonal_eps(1e-12));
    /// ```
    pub fn is_orthogonal_eps(&self, eps: T) -> bool {
        R == C && (*self * self.transpose()).abs_diff_eq(&Matrix::<T, R, R>::eye(), eps)
    }

    /// `A ≈ Aᵀ`, every entry within `eps`. `false` for non-square shapes.
    pub fn is_symmetric_eps(&self, eps: T) -> bool {
        if R != C {
            return false;
        }
        for i in 0..R {
            for j in (i + 1)..C {
                if !self[(i, j)].abs_diff_eq(&self[(j, i)], eps) {
                    return false;
                }
            }
        }
        true
    }
}
