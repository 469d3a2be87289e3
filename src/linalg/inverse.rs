use log::{debug, trace};

use crate::linalg::determinant::cofactor_det;
use crate::linalg::minor::MinorBuf;
use crate::linalg::{ensure_square, MatrixError};
use crate::traits::Scalar;
use crate::Matrix;

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Inverse of a square, non-singular matrix.
    ///
    /// The first matching case wins:
    /// 1. orthogonal input: the transpose is returned as is,
    /// 2. 3×3: closed-form adjugate over the determinant,
    /// 3. 2×2: `[[d, -b], [-c, a]] / det`,
    /// 4. otherwise: transposed cofactor matrix over the determinant.
    ///
    /// Singularity is an exact `det == 0` test. Integer element types divide
    /// with truncation, so only unimodular integer matrices invert exactly.
    ///
    /// ```
    /// use fixmat::{Matrix, MatrixError};
    ///
    /// let a = Matrix::new([[4.0, 7.0], [2.0, 6.0]]);
    /// let inv = a.inverse().unwrap();
    /// assert_eq!(inv, Matrix::new([[0.6, -0.7], [-0.2, 0.4]]));
    ///
    /// let s = Matrix::new([[1.0, 2.0], [2.0, 4.0]]);
    /// assert_eq!(s.inverse(), Err(MatrixError::SingularMatrix));
    /// ```
    pub fn inverse(&self) -> Result<Self, MatrixError> {
        if let Err(e) = ensure_square(R, C) {
            debug!("inverse rejected: {e}");
            return Err(e);
        }
        let a = MinorBuf::<T, R>::from_ref(self)?;
        let det = cofactor_det(&a);
        if det == T::zero() {
            debug!("inverse rejected: {}", MatrixError::SingularMatrix);
            return Err(MatrixError::SingularMatrix);
        }

        if self.is_orthogonal() {
            trace!("inverse of orthogonal {}x{}: transpose", R, C);
            return Ok(self.transposed_square());
        }

        let v = |i: usize, j: usize| self[(i, j)];
        let mut out = Self::zeros();
        match R {
            3 => {
                trace!("inverse 3x3: closed-form adjugate");
                out[(0, 0)] = v(1, 1) * v(2, 2) - v(1, 2) * v(2, 1);
                out[(1, 0)] = v(1, 2) * v(2, 0) - v(1, 0) * v(2, 2);
                out[(2, 0)] = v(1, 0) * v(2, 1) - v(1, 1) * v(2, 0);
                out[(0, 1)] = v(0, 2) * v(2, 1) - v(0, 1) * v(2, 2);
                out[(1, 1)] = v(0, 0) * v(2, 2) - v(0, 2) * v(2, 0);
                out[(2, 1)] = v(0, 1) * v(2, 0) - v(0, 0) * v(2, 1);
                out[(0, 2)] = v(0, 1) * v(1, 2) - v(0, 2) * v(1, 1);
                out[(1, 2)] = v(0, 2) * v(1, 0) - v(0, 0) * v(1, 2);
                out[(2, 2)] = v(0, 0) * v(1, 1) - v(0, 1) * v(1, 0);
                Ok(out / det)
            }
            2 => {
                trace!("inverse 2x2: closed form");
                out[(0, 0)] = v(1, 1);
                out[(1, 0)] = T::zero() - v(1, 0);
                out[(0, 1)] = T::zero() - v(0, 1);
                out[(1, 1)] = v(0, 0);
                Ok(out / det)
            }
            _ => {
                trace!("inverse {}x{}: cofactor expansion", R, C);
                for row in 0..R {
                    for col in 0..C {
                        let minor = cofactor_det(&a.without(row, col));
                        let cof = if (row + col) % 2 == 0 {
                            minor
                        } else {
                            T::zero() - minor
                        };
                        // Transposed placement turns the cofactor matrix into the adjugate.
                        out[(col, row)] = cof / det;
                    }
                }
                Ok(out)
            }
        }
    }

    /// Adjugate: the transpose of the cofactor matrix.
    ///
    /// Satisfies `A · adj(A) = det(A) · I` for every square `A`, singular or not.
    ///
    /// ```
    /// use fixmat::Matrix;
    /// let a = Matrix::new([[1, 2], [3, 4]]);
    /// assert_eq!(a.adjugate(), Ok(Matrix::new([[4, -2], [-3, 1]])));
    /// ```
    pub fn adjugate(&self) -> Result<Self, MatrixError> {
        let a = MinorBuf::<T, R>::from_ref(self)?;
        let mut out = Self::zeros();
        for row in 0..R {
            for col in 0..C {
                let minor = cofactor_det(&a.without(row, col));
                out[(col, row)] = if (row + col) % 2 == 0 {
                    minor
                } else {
                    T::zero() - minor
                };
            }
        }
        Ok(out)
    }

    /// Transpose that keeps the `R×C` type; callers guarantee `R == C`.
    fn transposed_square(&self) -> Self {
        let mut out = Self::zeros();
        for i in 0..R {
            for j in 0..C {
                out[(i, j)] = self[(j, i)];
            }
        }
        out
    }
}
