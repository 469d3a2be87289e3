//! # fixmat
//!
//! Fixed-dimension dense matrices with compile-time shapes, no-std
//! compatible. Determinant, inverse, rank and Gauss elimination for small
//! matrices, plus classification predicates and 3-D rotation builders.
//!
//! ## Quick start
//!
//! ```
//! use fixmat::{Matrix, Vector3};
//!
//! let a = Matrix::new([
//!     [2.0_f64, 1.0],
//!     [1.0, 1.0],
//! ]);
//! assert_eq!(a.determinant(), Ok(1.0));
//!
//! let a_inv = a.inverse().unwrap();
//! assert_eq!(a_inv, Matrix::new([[1.0, -1.0], [-1.0, 2.0]]));
//! assert_eq!(a * a_inv, Matrix::eye());
//!
//! let r = Matrix::create_rot_z(core::f64::consts::FRAC_PI_2);
//! let y = r * Vector3::from_xyz(1.0, 0.0, 0.0);
//! assert!((y[1] - 1.0).abs() < 1e-15);
//! ```
//!
//! ## Modules
//!
//! - [`matrix`]: `Matrix<T, R, C>` with const-generic dimensions.
//!   Stack-allocated `[[T; C]; R]` row-major storage. Arithmetic operators,
//!   checked and panicking indexing, classification predicates, rotation
//!   builders and `approx` comparisons. [`Vector<T, N>`] and
//!   [`RowVector<T, N>`] are aliases for N×1 and 1×N matrices.
//!
//! - [`linalg`]: [`MatrixError`], cofactor-expansion determinants over a
//!   fixed-capacity [`MinorBuf`], inversion (orthogonal shortcut, closed
//!   forms for 2×2 / 3×3, adjugate otherwise), Gauss elimination and rank.
//!   The elimination routines are free functions over
//!   `&mut impl MatrixMut<T>`; `Matrix` wraps them as methods.
//!
//! - [`traits`]: Element trait hierarchy:
//!   - [`Scalar`]: all matrix elements (`Copy + PartialEq + Debug + Zero + One + Num`)
//!   - [`FloatScalar`]: real floats (`Scalar + Float`), used by rotations
//!     and tolerance comparisons
//!   - [`MatrixRef`] / [`MatrixMut`]: generic read/write access for algorithms
//!
//! ## Logging
//!
//! Rejections (singular or non-square inversion, a rotation requested on a
//! non-3×3 shape) are reported through the [`log`] facade at `debug`, and
//! the inversion path taken at `trace`. Install any `log` backend to see
//! them; without one they compile to no-ops.
//!
//! ## Cargo features
//!
//! | Feature   | Default  | Description |
//! |-----------|----------|-------------|
//! | `std`     | yes      | `std::error::Error` for `MatrixError`, hardware FPU via system libm |
//! | `complex` | no       | `Complex<f32>` / `Complex<f64>` elements via `num-complex` |
//! | `all`     | no       | `std` + `complex` |
//!
//! `num-traits` is always built with its `libm` feature, so float methods
//! such as `sin_cos` and `abs` stay available in `no_std` builds. There is
//! no separate `libm` feature to enable.

#![cfg_attr(not(any(feature = "std", test)), no_std)]

pub mod linalg;
pub mod matrix;
pub mod traits;

pub use linalg::{MatrixError, MinorBuf};
pub use matrix::aliases::{
    Matrix2, Matrix2x3, Matrix3, Matrix3x2, Matrix3x4, Matrix4, Matrix4x3, Matrix5, Matrix6,
};
pub use matrix::vector::{RowVector, Vector, Vector2, Vector3, Vector4};
pub use matrix::Matrix;
pub use traits::{FloatScalar, MatrixMut, MatrixRef, Scalar};

#[cfg(feature = "complex")]
pub use num_complex::Complex;
