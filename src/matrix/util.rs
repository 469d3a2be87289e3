use core::fmt::{self, Write as _};

use crate::linalg::MatrixError;
use crate::matrix::vector::{RowVector, Vector};
use crate::traits::{check_bounds, MatrixMut, Scalar};
use crate::Matrix;

// ── Constructors ────────────────────────────────────────────────────

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// ```
    /// use fixmat::Matrix;
    /// let m: Matrix<i32, 2, 3> = Matrix::from_fn(|i, j| (3 * i + j) as i32);
    /// assert_eq!(m, Matrix::new([[0, 1, 2], [3, 4, 5]]));
    /// ```
    pub fn from_fn(f: impl Fn(usize, usize) -> T) -> Self {
        Self {
            data: core::array::from_fn(|i| core::array::from_fn(|j| f(i, j))),
        }
    }

    /// Apply a function to every element, producing a new matrix.
    ///
    /// ```
    /// use fixmat::Matrix;
    /// let m = Matrix::new([[1.0_f64, 4.0], [9.0, 16.0]]);
    /// let r = m.map(|x: f64| x.sqrt());
    /// assert_eq!(r[(0, 0)], 1.0);
    /// assert_eq!(r[(1, 1)], 4.0);
    /// ```
    pub fn map<U>(&self, f: impl Fn(T) -> U) -> Matrix<U, R, C>
    where
        T: Copy,
    {
        Matrix {
            data: self.data.map(|row| row.map(&f)),
        }
    }

    /// Swap two columns in place.
    ///
    /// ```
    /// use fixmat::Matrix;
    /// let mut m = Matrix::new([[1, 2], [3, 4]]);
    /// m.swap_cols(0, 1).unwrap();
    /// assert_eq!(m, Matrix::new([[2, 1], [4, 3]]));
    /// ```
    pub fn swap_cols(&mut self, a: usize, b: usize) -> Result<(), MatrixError> {
        check_bounds(0, a.max(b), R.max(1), C)?;
        if a != b {
            for row in self.data.iter_mut() {
                row.swap(a, b);
            }
        }
        Ok(())
    }
}

impl<T: Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Swap two rows in place.
    ///
    /// Both indices are checked before anything moves.
    ///
    /// ```
    /// use fixmat::{Matrix, MatrixError};
    /// let mut m = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
    /// m.swap_rows(0, 1).unwrap();
    /// assert_eq!(m, Matrix::new([[3.0, 4.0], [1.0, 2.0]]));
    /// assert_eq!(m.swap_rows(0, 2), Err(MatrixError::IndexOutOfRange { row: 2, col: 0 }));
    /// ```
    pub fn swap_rows(&mut self, a: usize, b: usize) -> Result<(), MatrixError> {
        check_bounds(a.max(b), 0, R, C.max(1))?;
        MatrixMut::swap_rows(self, a, b);
        Ok(())
    }
}

// ── Aggregation ─────────────────────────────────────────────────────

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Sum of all elements.
    ///
    /// ```
    /// use fixmat::Matrix;
    /// let m = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
    /// assert_eq!(m.sum(), 10.0);
    /// ```
    pub fn sum(&self) -> T {
        self.as_slice().iter().fold(T::zero(), |s, &x| s + x)
    }
}

// ── Row / Column access ─────────────────────────────────────────────

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Extract row `i` as a 1×C row vector.
    ///
    /// ```
    /// use fixmat::Matrix;
    /// let m = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
    /// let r = m.row(0).unwrap();
    /// assert_eq!(r, Matrix::new([[1.0, 2.0]]));
    /// ```
    pub fn row(&self, i: usize) -> Result<RowVector<T, C>, MatrixError> {
        check_bounds(i, 0, R, C.max(1))?;
        Ok(Matrix::new([self.data[i]]))
    }

    /// Overwrite row `i`.
    pub fn set_row(&mut self, i: usize, v: &RowVector<T, C>) -> Result<(), MatrixError> {
        check_bounds(i, 0, R, C.max(1))?;
        self.data[i] = v.data[0];
        Ok(())
    }

    /// Extract column `j` as an R×1 column vector.
    ///
    /// ```
    /// use fixmat::Matrix;
    /// let m = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
    /// let c = m.col(1).unwrap();
    /// assert_eq!(c[0], 2.0);
    /// assert_eq!(c[1], 4.0);
    /// ```
    pub fn col(&self, j: usize) -> Result<Vector<T, R>, MatrixError> {
        check_bounds(0, j, R.max(1), C)?;
        Ok(Matrix::from_fn(|i, _| self.data[i][j]))
    }

    /// Overwrite column `j`.
    pub fn set_col(&mut self, j: usize, v: &Vector<T, R>) -> Result<(), MatrixError> {
        check_bounds(0, j, R.max(1), C)?;
        for i in 0..R {
            self.data[i][j] = v[i];
        }
        Ok(())
    }
}

// ── Display ─────────────────────────────────────────────────────────

impl<T: fmt::Display, const R: usize, const C: usize> fmt::Display for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Find max width per column for alignment
        let mut widths = [0usize; C];
        for row in self.data.iter() {
            for (w, x) in widths.iter_mut().zip(row.iter()) {
                *w = (*w).max(WriteCounting::count(|wc| write!(wc, "{x}")));
            }
        }

        for (i, row) in self.data.iter().enumerate() {
            write!(f, "│")?;
            for (j, x) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, "  ")?;
                }
                write!(f, "{:>width$}", x, width = widths[j])?;
            }
            write!(f, "│")?;
            if i + 1 < R {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Helper to count characters written, without allocating.
struct WriteCounting {
    count: usize,
}

impl WriteCounting {
    fn count(f: impl FnOnce(&mut Self) -> fmt::Result) -> usize {
        let mut wc = WriteCounting { count: 0 };
        let _ = f(&mut wc);
        wc.count
    }
}

impl fmt::Write for WriteCounting {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.count += s.chars().count();
        Ok(())
    }
}
