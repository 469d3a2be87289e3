//! Determinant, inversion and row elimination for fixed-size matrices.
//!
//! Everything here uses direct formulas (closed forms up to 3×3, cofactor
//! expansion above) and exact comparisons against zero. That is fine for
//! the small, often integer-valued matrices the crate targets; it is not a
//! numerically robust solver.

pub(crate) mod determinant;
pub(crate) mod gauss;
pub(crate) mod inverse;
pub(crate) mod minor;

pub use determinant::cofactor_det;
pub use gauss::{gauss_elimination_in_place, rank_eps_of, rank_of, sort_for_gauss_in_place};
pub use minor::MinorBuf;

/// Errors from matrix construction, access and linear algebra.
///
/// All of these are contract violations reported synchronously by the call
/// that detects them; none leave the operand partially modified.
///
/// ```
/// use fixmat::{Matrix, MatrixError};
///
/// let singular = Matrix::new([[1.0_f64, 2.0], [2.0, 4.0]]);
/// assert_eq!(singular.inverse().unwrap_err(), MatrixError::SingularMatrix);
///
/// let wide = Matrix::new([[1.0_f64, 2.0, 3.0], [4.0, 5.0, 6.0]]);
/// assert_eq!(wide.determinant().unwrap_err(), MatrixError::NotSquare { rows: 2, cols: 3 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// Element access outside the declared shape.
    IndexOutOfRange { row: usize, col: usize },
    /// Square-only operation invoked on a non-square shape.
    NotSquare { rows: usize, cols: usize },
    /// Inversion of a matrix whose determinant is exactly zero.
    SingularMatrix,
    /// Shape does not fit the operation (scalar view, 3-D rotation).
    DimensionMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
}

impl core::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatrixError::IndexOutOfRange { row, col } => {
                write!(f, "index out of range: row {row}, col {col}")
            }
            MatrixError::NotSquare { rows, cols } => {
                write!(f, "matrix must be square, got {rows}x{cols}")
            }
            MatrixError::SingularMatrix => write!(f, "matrix is singular (determinant is 0)"),
            MatrixError::DimensionMismatch { expected, found } => write!(
                f,
                "dimension mismatch: expected {}x{}, got {}x{}",
                expected.0, expected.1, found.0, found.1
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MatrixError {}

#[inline]
pub(crate) fn ensure_square(rows: usize, cols: usize) -> Result<(), MatrixError> {
    if rows == cols {
        Ok(())
    } else {
        Err(MatrixError::NotSquare { rows, cols })
    }
}
