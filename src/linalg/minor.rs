use core::ops::Index;

use crate::linalg::{ensure_square, MatrixError};
use crate::traits::{MatrixMut, MatrixRef, Scalar};

/// Square work buffer with a fixed capacity and a smaller logical size.
///
/// Cofactor expansion needs `(n-1)×(n-1)` minors of an `n×n` matrix, which
/// cannot be named as a const-generic type on stable Rust. Instead every
/// minor lives in a `CAP×CAP` array on the stack and only its leading
/// `len×len` block is addressable.
///
/// ```
/// use fixmat::{Matrix, MinorBuf, MatrixRef};
///
/// let m = Matrix::new([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
/// let full = MinorBuf::<i32, 3>::from_ref(&m).unwrap();
/// let minor = full.without(1, 0);
/// assert_eq!(minor.nrows(), 2);
/// assert_eq!(minor[(0, 0)], 2);
/// assert_eq!(minor[(1, 1)], 9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinorBuf<T, const CAP: usize> {
    data: [[T; CAP]; CAP],
    len: usize,
}

impl<T: Scalar, const CAP: usize> MinorBuf<T, CAP> {
    /// Copy a square matrix into a buffer of capacity `CAP`.
    pub fn from_ref(a: &impl MatrixRef<T>) -> Result<Self, MatrixError> {
        let n = a.nrows();
        ensure_square(n, a.ncols())?;
        if n > CAP {
            return Err(MatrixError::DimensionMismatch {
                expected: (CAP, CAP),
                found: (n, n),
            });
        }
        let mut data = [[T::zero(); CAP]; CAP];
        for (i, row) in data.iter_mut().enumerate().take(n) {
            for (j, x) in row.iter_mut().enumerate().take(n) {
                *x = *a.get(i, j);
            }
        }
        Ok(Self { data, len: n })
    }

    /// Logical dimension.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The minor obtained by deleting `row` and `col`.
    ///
    /// Remaining indices are compacted: entries after the deleted row move
    /// up by one, entries after the deleted column move left by one.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside the logical shape.
    pub fn without(&self, row: usize, col: usize) -> Self {
        if let Err(e) = crate::traits::check_bounds(row, col, self.len, self.len) {
            panic!("{e}");
        }
        let mut data = [[T::zero(); CAP]; CAP];
        let mut dst_i = 0;
        for i in (0..self.len).filter(|&i| i != row) {
            let mut dst_j = 0;
            for j in (0..self.len).filter(|&j| j != col) {
                data[dst_i][dst_j] = self.data[i][j];
                dst_j += 1;
            }
            dst_i += 1;
        }
        Self {
            data,
            len: self.len - 1,
        }
    }
}

impl<T, const CAP: usize> MatrixRef<T> for MinorBuf<T, CAP> {
    #[inline]
    fn nrows(&self) -> usize {
        self.len
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.len
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> &T {
        if let Err(e) = crate::traits::check_bounds(row, col, self.len, self.len) {
            panic!("{e}");
        }
        &self.data[row][col]
    }
}

impl<T, const CAP: usize> MatrixMut<T> for MinorBuf<T, CAP> {
    #[inline]
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        if let Err(e) = crate::traits::check_bounds(row, col, self.len, self.len) {
            panic!("{e}");
        }
        &mut self.data[row][col]
    }
}

impl<T, const CAP: usize> Index<(usize, usize)> for MinorBuf<T, CAP> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        self.get(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Matrix;

    fn sample() -> Matrix<i32, 4, 4> {
        Matrix::new([
            [1, 2, 3, 4],
            [5, 6, 7, 8],
            [9, 10, 11, 12],
            [13, 14, 15, 16],
        ])
    }

    #[test]
    fn from_ref_copies_square() {
        let buf = MinorBuf::<i32, 4>::from_ref(&sample()).unwrap();
        assert_eq!(buf.len(), 4);
        assert_eq!(buf[(3, 2)], 15);
    }

    #[test]
    fn from_ref_rejects_non_square() {
        let m: Matrix<i32, 2, 3> = Matrix::zeros();
        assert_eq!(
            MinorBuf::<i32, 3>::from_ref(&m),
            Err(MatrixError::NotSquare { rows: 2, cols: 3 })
        );
    }

    #[test]
    fn from_ref_rejects_over_capacity() {
        assert!(matches!(
            MinorBuf::<i32, 3>::from_ref(&sample()),
            Err(MatrixError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn without_interior_row_and_col() {
        let buf = MinorBuf::<i32, 4>::from_ref(&sample()).unwrap();
        let m = buf.without(1, 2);
        assert_eq!(m.len(), 3);
        // rows 0, 2, 3 and cols 0, 1, 3
        assert_eq!(m[(0, 0)], 1);
        assert_eq!(m[(0, 2)], 4);
        assert_eq!(m[(1, 1)], 10);
        assert_eq!(m[(2, 2)], 16);
    }

    #[test]
    fn without_last_row_and_col() {
        let buf = MinorBuf::<i32, 4>::from_ref(&sample()).unwrap();
        let m = buf.without(3, 3);
        assert_eq!(m[(2, 2)], 11);
        assert_eq!(m[(0, 0)], 1);
    }

    #[test]
    fn repeated_minors_shrink_to_empty() {
        let buf = MinorBuf::<i32, 4>::from_ref(&sample()).unwrap();
        let m = buf.without(0, 0).without(0, 0).without(0, 0);
        assert_eq!(m.len(), 1);
        assert_eq!(m[(0, 0)], 16);
        assert!(m.without(0, 0).is_empty());
    }

    #[test]
    #[should_panic(expected = "index out of range")]
    fn logical_bounds_enforced() {
        let buf = MinorBuf::<i32, 4>::from_ref(&sample()).unwrap();
        let m = buf.without(0, 0);
        // Still inside the backing array, but outside the 3×3 minor.
        let _ = m[(3, 0)];
    }
}
