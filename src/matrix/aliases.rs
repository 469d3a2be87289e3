//! Shorthand for the shapes this crate's algorithms are tuned for.
//!
//! Square sizes 2 through 6 cover the closed-form determinant and inverse
//! paths (2×2, 3×3) and the cofactor path above them. The rectangular
//! pairs are the usual 3-D transform and projection shapes. Any other
//! shape is spelled `Matrix<T, R, C>` directly.

use crate::Matrix;

pub type Matrix2<T> = Matrix<T, 2, 2>;
pub type Matrix3<T> = Matrix<T, 3, 3>;
pub type Matrix4<T> = Matrix<T, 4, 4>;
pub type Matrix5<T> = Matrix<T, 5, 5>;
pub type Matrix6<T> = Matrix<T, 6, 6>;

/// Projection from 3-D onto a plane.
pub type Matrix2x3<T> = Matrix<T, 2, 3>;
/// Embedding of a plane in 3-D.
pub type Matrix3x2<T> = Matrix<T, 3, 2>;
/// Affine transform `[R | t]` in 3-D.
pub type Matrix3x4<T> = Matrix<T, 3, 4>;
pub type Matrix4x3<T> = Matrix<T, 4, 3>;
