use crate::traits::Scalar;
use crate::Matrix;

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Sum of the leading-diagonal elements, `min(R, C)` of them.
    pub fn trace(&self) -> T {
        let mut sum = T::zero();
        for i in 0..R.min(C) {
            sum = sum + self[(i, i)];
        }
        sum
    }

    /// `A == Aᵀ`. Always `false` for non-square shapes.
    pub fn is_symmetric(&self) -> bool {
        if R != C {
            return false;
        }
        for i in 0..R {
            for j in (i + 1)..C {
                if self[(i, j)] != self[(j, i)] {
                    return false;
                }
            }
        }
        true
    }

    /// Every off-diagonal element is exactly zero.
    pub fn is_diagonal(&self) -> bool {
        self.all_zero_where(|i, j| i != j)
    }

    /// Every element strictly above the diagonal is exactly zero.
    pub fn is_lower_triangular(&self) -> bool {
        self.all_zero_where(|i, j| i < j)
    }

    /// Every element strictly below the diagonal is exactly zero.
    pub fn is_upper_triangular(&self) -> bool {
        self.all_zero_where(|i, j| i > j)
    }

    /// `A · Aᵀ == I`, compared exactly.
    ///
    /// Only square matrices can be orthogonal; rotation matrices built from
    /// `sin`/`cos` usually miss by rounding, see
    /// [`is_orthogonal_eps`](Self::is_orthogonal_eps) for those.
    pub fn is_orthogonal(&self) -> bool {
        R == C && *self * self.transpose() == Matrix::<T, R, R>::eye()
    }

    /// Square with a non-zero determinant.
    pub fn is_invertible(&self) -> bool {
        matches!(self.determinant(), Ok(d) if d != T::zero())
    }

    fn all_zero_where(&self, mask: impl Fn(usize, usize) -> bool) -> bool {
        for i in 0..R {
            for j in 0..C {
                if mask(i, j) && self[(i, j)] != T::zero() {
                    return false;
                }
            }
        }
        true
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// Extract the diagonal as a column vector.
    pub fn diag(&self) -> Matrix<T, N, 1> {
        let mut v = Matrix::zeros();
        for i in 0..N {
            v[(i, 0)] = self[(i, i)];
        }
        v
    }

    /// Create a diagonal matrix from a column vector.
    pub fn from_diag(v: &Matrix<T, N, 1>) -> Self {
        let mut m = Self::zeros();
        for i in 0..N {
            m[(i, i)] = v[(i, 0)];
        }
        m
    }
}
