pub mod aliases;
mod ops;
mod rotation;
mod square;
mod tolerance;
mod util;
pub mod vector;

use core::ops::{Index, IndexMut};

use crate::linalg::MatrixError;
use crate::traits::{check_bounds, MatrixMut, MatrixRef, Scalar};

/// Fixed-size matrix with `R` rows and `C` columns.
///
/// Storage is row-major: `data[row][col]`, i.e. element `(row, col)` sits at
/// flat offset `C * row + col`. Stack-allocated, no-std compatible, never
/// resized.
///
/// # Examples
///
/// ```
/// use fixmat::Matrix;
///
/// let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
/// assert_eq!(a[(0, 1)], 2.0);
/// assert_eq!(a.nrows(), 2);
/// assert_eq!(a.ncols(), 2);
///
/// let b: Matrix<f64, 3, 3> = Matrix::eye();
/// assert_eq!(b[(0, 0)], 1.0);
/// assert_eq!(b[(0, 1)], 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix<T, const R: usize, const C: usize> {
    pub(crate) data: [[T; C]; R],
}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Create a matrix from a row-major 2D array.
    ///
    /// The input is `[[row0], [row1], ...]` (R arrays of C elements each).
    #[inline]
    pub const fn new(rows: [[T; C]; R]) -> Self {
        Self { data: rows }
    }

    /// Number of rows.
    #[inline]
    pub const fn nrows(&self) -> usize {
        R
    }

    /// Number of columns.
    #[inline]
    pub const fn ncols(&self) -> usize {
        C
    }

    /// `true` when `R == C`.
    #[inline]
    pub const fn is_square(&self) -> bool {
        R == C
    }

    /// Bounds-checked element access.
    ///
    /// ```
    /// use fixmat::{Matrix, MatrixError};
    /// let m = Matrix::new([[1, 2], [3, 4]]);
    /// assert_eq!(m.get(1, 0), Ok(&3));
    /// assert_eq!(m.get(2, 0), Err(MatrixError::IndexOutOfRange { row: 2, col: 0 }));
    /// ```
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Result<&T, MatrixError> {
        check_bounds(row, col, R, C)?;
        Ok(&self.data[row][col])
    }

    /// Bounds-checked mutable element access.
    #[inline]
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T, MatrixError> {
        check_bounds(row, col, R, C)?;
        Ok(&mut self.data[row][col])
    }

    /// Flat row-major view of the elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.data.as_flattened()
    }
}

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Create a matrix filled with zeros.
    pub fn zeros() -> Self {
        Self {
            data: [[T::zero(); C]; R],
        }
    }

    /// Create a matrix with ones on the leading diagonal and zeros elsewhere.
    ///
    /// Defined for every shape: the diagonal runs over `min(R, C)` entries.
    pub fn eye() -> Self {
        let mut m = Self::zeros();
        m.set_eye();
        m
    }

    /// Create a matrix with every element set to `value`.
    pub fn from_scalar(value: T) -> Self {
        Self {
            data: [[value; C]; R],
        }
    }

    /// Set every element to zero.
    pub fn zero(&mut self) {
        self.fill(T::zero());
    }

    /// Overwrite `self` with the leading-diagonal identity.
    pub fn set_eye(&mut self) {
        self.zero();
        for i in 0..R.min(C) {
            self.data[i][i] = T::one();
        }
    }

    /// Broadcast `value` to every element.
    pub fn fill(&mut self, value: T) {
        for row in self.data.iter_mut() {
            for x in row.iter_mut() {
                *x = value;
            }
        }
    }

    /// View a 1×1 matrix as its single element.
    ///
    /// ```
    /// use fixmat::{Matrix, MatrixError};
    /// let dot = Matrix::new([[1.0, 2.0]]) * Matrix::new([[3.0], [4.0]]);
    /// assert_eq!(dot.to_scalar(), Ok(11.0));
    ///
    /// let m = Matrix::new([[1.0, 2.0]]);
    /// assert!(matches!(m.to_scalar(), Err(MatrixError::DimensionMismatch { .. })));
    /// ```
    pub fn to_scalar(&self) -> Result<T, MatrixError> {
        if R == 1 && C == 1 {
            Ok(self.data[0][0])
        } else {
            Err(MatrixError::DimensionMismatch {
                expected: (1, 1),
                found: (R, C),
            })
        }
    }
}

impl<T: Scalar, const R: usize, const C: usize> Default for Matrix<T, R, C> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T, const R: usize, const C: usize> MatrixRef<T> for Matrix<T, R, C> {
    #[inline]
    fn nrows(&self) -> usize {
        R
    }

    #[inline]
    fn ncols(&self) -> usize {
        C
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> &T {
        &self[(row, col)]
    }
}

impl<T, const R: usize, const C: usize> MatrixMut<T> for Matrix<T, R, C> {
    #[inline]
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self[(row, col)]
    }
}

// Index by (row, col) tuple
impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        match Matrix::get(self, row, col) {
            Ok(x) => x,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        match Matrix::get_mut(self, row, col) {
            Ok(x) => x,
            Err(e) => panic!("{e}"),
        }
    }
}

pub use aliases::*;
