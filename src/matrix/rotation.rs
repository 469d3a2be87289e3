use log::debug;

use crate::linalg::MatrixError;
use crate::traits::FloatScalar;
use crate::Matrix;

// Row layouts shared by the setters and the `create_rot_*` factories.

fn about_x<T: FloatScalar>(angle: T) -> [[T; 3]; 3] {
    let (s, c) = angle.sin_cos();
    let (o, z) = (T::one(), T::zero());
    [[o, z, z], [z, c, -s], [z, s, c]]
}

fn about_y<T: FloatScalar>(angle: T) -> [[T; 3]; 3] {
    let (s, c) = angle.sin_cos();
    let (o, z) = (T::one(), T::zero());
    [[c, z, s], [z, o, z], [-s, z, c]]
}

fn about_z<T: FloatScalar>(angle: T) -> [[T; 3]; 3] {
    let (s, c) = angle.sin_cos();
    let (o, z) = (T::one(), T::zero());
    [[c, -s, z], [s, c, z], [z, z, o]]
}

/// Right-handed elementary rotations about the coordinate axes.
///
/// The `rot*` setters are available on every shape so generic code can
/// call them; anything but 3×3 is rejected with
/// [`MatrixError::DimensionMismatch`] before `self` is touched.
impl<T: FloatScalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Overwrite `self` with the rotation by `angle` radians about X.
    ///
    /// ```
    /// use fixmat::Matrix;
    /// let mut m: Matrix<f64, 3, 3> = Matrix::zeros();
    /// m.rotx(0.0).unwrap();
    /// assert_eq!(m, Matrix::eye());
    ///
    /// let mut not_3x3: Matrix<f64, 2, 2> = Matrix::zeros();
    /// assert!(not_3x3.rotx(0.5).is_err());
    /// ```
    pub fn rotx(&mut self, angle: T) -> Result<(), MatrixError> {
        self.set_rotation("rotx", about_x(angle))
    }

    /// Overwrite `self` with the rotation by `angle` radians about Y.
    pub fn roty(&mut self, angle: T) -> Result<(), MatrixError> {
        self.set_rotation("roty", about_y(angle))
    }

    /// Overwrite `self` with the rotation by `angle` radians about Z.
    pub fn rotz(&mut self, angle: T) -> Result<(), MatrixError> {
        self.set_rotation("rotz", about_z(angle))
    }

    fn set_rotation(&mut self, name: &str, rows: [[T; 3]; 3]) -> Result<(), MatrixError> {
        if R != 3 || C != 3 {
            let e = MatrixError::DimensionMismatch {
                expected: (3, 3),
                found: (R, C),
            };
            debug!("{name} rejected: {e}");
            return Err(e);
        }
        for (i, row) in rows.iter().enumerate() {
            for (j, &x) in row.iter().enumerate() {
                self[(i, j)] = x;
            }
        }
        Ok(())
    }
}

impl<T: FloatScalar> Matrix<T, 3, 3> {
    /// Rotation by `angle` radians about X.
    pub fn create_rot_x(angle: T) -> Self {
        Self::new(about_x(angle))
    }

    /// Rotation by `angle` radians about Y.
    pub fn create_rot_y(angle: T) -> Self {
        Self::new(about_y(angle))
    }

    /// Rotation by `angle` radians about Z.
    ///
    /// ```
    /// use fixmat::{Matrix, Vector3};
    /// let r = Matrix::create_rot_z(core::f64::consts::FRAC_PI_2);
    /// let v = r * Vector3::from_xyz(1.0, 0.0, 0.0);
    /// assert!((v[0]).abs() < 1e-15);
    /// assert!((v[1] - 1.0).abs() < 1e-15);
    /// ```
    pub fn create_rot_z(angle: T) -> Self {
        Self::new(about_z(angle))
    }
}
