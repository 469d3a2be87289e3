use crate::linalg::minor::MinorBuf;
use crate::linalg::{ensure_square, MatrixError};
use crate::traits::{check_bounds, MatrixRef, Scalar};
use crate::Matrix;

/// Determinant of the logical `n×n` block of `a`.
///
/// 2×2 and 3×3 use the closed forms. Larger sizes expand along the first
/// column: `Σ (-1)^r · a[r][0] · det(minor(r, 0))`. The expansion is
/// exponential in `n` and only meant for the small sizes this crate targets.
/// By convention the 0×0 determinant is one.
pub fn cofactor_det<T: Scalar, const CAP: usize>(a: &MinorBuf<T, CAP>) -> T {
    let v = |i: usize, j: usize| *a.get(i, j);
    match a.len() {
        0 => T::one(),
        1 => v(0, 0),
        2 => v(0, 0) * v(1, 1) - v(0, 1) * v(1, 0),
        3 => {
            v(0, 0) * v(1, 1) * v(2, 2)
                + v(0, 1) * v(1, 2) * v(2, 0)
                + v(0, 2) * v(1, 0) * v(2, 1)
                - v(0, 2) * v(1, 1) * v(2, 0)
                - v(0, 0) * v(1, 2) * v(2, 1)
                - v(0, 1) * v(1, 0) * v(2, 2)
        }
        n => {
            let mut det = T::zero();
            for r in 0..n {
                let lead = v(r, 0);
                if lead == T::zero() {
                    continue;
                }
                let term = lead * cofactor_det(&a.without(r, 0));
                det = if r % 2 == 0 { det + term } else { det - term };
            }
            det
        }
    }
}

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Determinant (square matrices only).
    ///
    /// ```
    /// use fixmat::Matrix;
    /// let m = Matrix::new([[6.0, 1.0, 1.0], [4.0, -2.0, 5.0], [2.0, 8.0, 7.0]]);
    /// assert_eq!(m.determinant(), Ok(-306.0));
    /// ```
    pub fn determinant(&self) -> Result<T, MatrixError> {
        let a = MinorBuf::<T, R>::from_ref(self)?;
        Ok(cofactor_det(&a))
    }

    /// Determinant of the minor obtained by deleting `row` and `col`.
    pub fn minor_determinant(&self, row: usize, col: usize) -> Result<T, MatrixError> {
        ensure_square(R, C)?;
        check_bounds(row, col, R, C)?;
        let a = MinorBuf::<T, R>::from_ref(self)?;
        Ok(cofactor_det(&a.without(row, col)))
    }

    /// Signed minor: `(-1)^(row+col) · minor_determinant(row, col)`.
    pub fn cofactor(&self, row: usize, col: usize) -> Result<T, MatrixError> {
        let m = self.minor_determinant(row, col)?;
        Ok(if (row + col) % 2 == 0 { m } else { T::zero() - m })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn det_2x2() {
        let m = Matrix::new([[3.0_f64, 8.0], [4.0, 6.0]]);
        assert_eq!(m.determinant(), Ok(-14.0));
    }

    #[test]
    fn det_3x3() {
        let m = Matrix::new([[6.0_f64, 1.0, 1.0], [4.0, -2.0, 5.0], [2.0, 8.0, 7.0]]);
        assert_eq!(m.determinant(), Ok(-306.0));
    }

    #[test]
    fn det_identity() {
        let id3: Matrix<f64, 3, 3> = Matrix::eye();
        assert_eq!(id3.determinant(), Ok(1.0));

        let id4: Matrix<f64, 4, 4> = Matrix::eye();
        assert_eq!(id4.determinant(), Ok(1.0));

        let id6: Matrix<i64, 6, 6> = Matrix::eye();
        assert_eq!(id6.determinant(), Ok(1));
    }

    #[test]
    fn det_zero_row() {
        let m = Matrix::new([[1.0, 2.0, 3.0], [0.0, 0.0, 0.0], [7.0, 8.0, 9.0]]);
        assert_eq!(m.determinant(), Ok(0.0));

        let m4 = Matrix::new([
            [1, 2, 3, 4],
            [5, 6, 7, 8],
            [0, 0, 0, 0],
            [2, 7, 1, 8],
        ]);
        assert_eq!(m4.determinant(), Ok(0));
    }

    #[test]
    fn det_4x4_cofactor_expansion() {
        let m = Matrix::new([
            [1, 0, 2, -1],
            [3, 0, 0, 5],
            [2, 1, 4, -3],
            [1, 0, 5, 0],
        ]);
        assert_eq!(m.determinant(), Ok(30));
    }

    #[test]
    fn det_4x4_leading_zero_column_entry() {
        // First-column zeros are skipped, the remaining signs still alternate by row.
        let m = Matrix::new([
            [0, 1, 0, 0],
            [1, 0, 0, 0],
            [0, 0, 0, 1],
            [0, 0, 1, 0],
        ]);
        assert_eq!(m.determinant(), Ok(1));
    }

    #[test]
    fn det_5x5_upper_triangular() {
        let m = Matrix::new([
            [2, 9, 9, 9, 9],
            [0, 3, 9, 9, 9],
            [0, 0, 1, 9, 9],
            [0, 0, 0, -1, 9],
            [0, 0, 0, 0, 4],
        ]);
        assert_eq!(m.determinant(), Ok(-24));
    }

    #[test]
    fn det_1x1() {
        assert_eq!(Matrix::new([[-7]]).determinant(), Ok(-7));
    }

    #[test]
    fn det_not_square() {
        let m = Matrix::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        assert_eq!(
            m.determinant(),
            Err(MatrixError::NotSquare { rows: 2, cols: 3 })
        );
    }

    #[test]
    fn det_singular() {
        let m = Matrix::new([[1.0_f64, 2.0], [2.0, 4.0]]);
        assert_eq!(m.determinant(), Ok(0.0));
    }

    #[test]
    fn minors_and_cofactors() {
        let m = Matrix::new([[1, 2, 3], [0, 4, 5], [1, 0, 6]]);
        assert_eq!(m.minor_determinant(0, 0), Ok(24));
        assert_eq!(m.minor_determinant(0, 1), Ok(-5));
        assert_eq!(m.cofactor(0, 1), Ok(5));
        assert_eq!(m.cofactor(1, 1), Ok(3));
        assert_eq!(
            m.cofactor(3, 0),
            Err(MatrixError::IndexOutOfRange { row: 3, col: 0 })
        );

        let wide: Matrix<i32, 2, 3> = Matrix::zeros();
        assert_eq!(
            wide.cofactor(0, 0),
            Err(MatrixError::NotSquare { rows: 2, cols: 3 })
        );
    }
}
