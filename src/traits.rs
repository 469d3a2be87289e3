use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

use crate::linalg::MatrixError;

/// Trait for types that can be used as matrix elements.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, all integer types, and `Complex<T>` when the
/// `complex` feature is enabled.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for floating-point matrix elements.
///
/// Required by operations that need `sin`/`cos` or an ordering on
/// magnitudes (rotation builders, tolerance comparisons).
pub trait FloatScalar: Scalar + Float {}

impl<T: Scalar + Float> FloatScalar for T {}

/// Read-only access to a matrix-like type.
///
/// Lets the determinant and elimination routines operate on both
/// [`Matrix`](crate::Matrix) and the fixed-capacity minor buffers they
/// build internally.
pub trait MatrixRef<T> {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;

    /// Element at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics with the [`MatrixError::IndexOutOfRange`] message when the
    /// position is outside the logical shape.
    fn get(&self, row: usize, col: usize) -> &T;

    /// Bounds-checked element access.
    fn try_get(&self, row: usize, col: usize) -> Result<&T, MatrixError> {
        check_bounds(row, col, self.nrows(), self.ncols())?;
        Ok(self.get(row, col))
    }
}

/// Mutable access to a matrix-like type.
///
/// Extends `MatrixRef` with mutable element access, enabling the in-place
/// elimination routines to work generically.
pub trait MatrixMut<T>: MatrixRef<T> {
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T;

    /// Exchange rows `a` and `b` through a single temporary element.
    fn swap_rows(&mut self, a: usize, b: usize)
    where
        T: Copy,
    {
        if a == b {
            return;
        }
        for j in 0..self.ncols() {
            let tmp = *self.get(a, j);
            *self.get_mut(a, j) = *self.get(b, j);
            *self.get_mut(b, j) = tmp;
        }
    }
}

#[inline]
pub(crate) fn check_bounds(
    row: usize,
    col: usize,
    nrows: usize,
    ncols: usize,
) -> Result<(), MatrixError> {
    if row < nrows && col < ncols {
        Ok(())
    } else {
        Err(MatrixError::IndexOutOfRange { row, col })
    }
}
