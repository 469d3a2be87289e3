use core::ops::{Index, IndexMut};

use crate::linalg::MatrixError;
use crate::traits::Scalar;
use crate::Matrix;

/// A column vector (N×1 matrix).
///
/// Vectors support single-index access (`v[i]`, i.e. element `(i, 0)`), dot
/// products, and for three elements cross products and skew-symmetric
/// matrices. `Matrix * Vector` is the ordinary `(M×N) * (N×1) → (M×1)`
/// product.
///
/// # Examples
///
/// ```
/// use fixmat::Vector;
///
/// let v = Vector::from_array([3.0_f64, 4.0]);
/// assert_eq!(v[0], 3.0);
/// assert_eq!(v[(1, 0)], 4.0);
/// assert_eq!(v.dot(&v), 25.0);
/// ```
pub type Vector<T, const N: usize> = Matrix<T, N, 1>;

/// A row vector (1×N matrix).
pub type RowVector<T, const N: usize> = Matrix<T, 1, N>;

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Create a column vector from a 1D array.
    #[inline]
    pub fn from_array(data: [T; N]) -> Self {
        Self::new(data.map(|x| [x]))
    }

    /// Number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Bounds-checked element access, the single-index form of
    /// [`Matrix::get`].
    #[inline]
    pub fn at(&self, i: usize) -> Result<T, MatrixError> {
        self.get(i, 0).copied()
    }

    /// Dot product of two vectors.
    ///
    /// ```
    /// use fixmat::Vector;
    /// let a = Vector::from_array([1.0, 2.0, 3.0]);
    /// let b = Vector::from_array([4.0, 5.0, 6.0]);
    /// assert_eq!(a.dot(&b), 32.0); // 1*4 + 2*5 + 3*6
    /// ```
    #[inline]
    pub fn dot(&self, rhs: &Self) -> T {
        let mut sum = T::zero();
        for i in 0..N {
            sum = sum + self[i] * rhs[i];
        }
        sum
    }
}

// ── Vector size aliases ─────────────────────────────────────────────

/// A 2-element column vector.
pub type Vector2<T> = Vector<T, 2>;
/// A 3-element column vector.
///
/// Adds `cross()` and `skew_symmetric()` in addition to all `Vector` methods.
pub type Vector3<T> = Vector<T, 3>;
/// A 4-element column vector.
pub type Vector4<T> = Vector<T, 4>;

impl<T: Scalar> Vector2<T> {
    /// Build `(x, y)`.
    #[inline]
    pub fn from_xy(x: T, y: T) -> Self {
        Self::from_array([x, y])
    }
}

impl<T: Scalar> Vector3<T> {
    /// Build `(x, y, z)`.
    #[inline]
    pub fn from_xyz(x: T, y: T, z: T) -> Self {
        Self::from_array([x, y, z])
    }

    /// Cross product of two 3-vectors.
    ///
    /// ```
    /// use fixmat::Vector3;
    /// let x = Vector3::from_xyz(1.0, 0.0, 0.0);
    /// let y = Vector3::from_xyz(0.0, 1.0, 0.0);
    /// assert_eq!(x.cross(&y), Vector3::from_xyz(0.0, 0.0, 1.0));
    /// ```
    #[inline]
    pub fn cross(&self, rhs: &Self) -> Self {
        Self::from_array([
            self[1] * rhs[2] - self[2] * rhs[1],
            self[2] * rhs[0] - self[0] * rhs[2],
            self[0] * rhs[1] - self[1] * rhs[0],
        ])
    }

    /// The matrix `[v]×` with `[v]× · w == v × w`.
    ///
    /// ```
    /// use fixmat::Vector3;
    /// let v = Vector3::from_xyz(1, 2, 3);
    /// let w = Vector3::from_xyz(-4, 0, 5);
    /// assert_eq!(v.skew_symmetric() * w, v.cross(&w));
    /// ```
    pub fn skew_symmetric(&self) -> Matrix<T, 3, 3> {
        let z = T::zero();
        let (x, y, w) = (self[0], self[1], self[2]);
        Matrix::new([
            [z, z - w, y],
            [w, z, z - x],
            [z - y, x, z],
        ])
    }
}

impl<T: Scalar> Matrix<T, 3, 3> {
    /// `a × b` for two 3-element column vectors.
    pub fn cross_product(a: &Vector3<T>, b: &Vector3<T>) -> Vector3<T> {
        a.cross(b)
    }

    /// `[v]×`, the 3×3 cross-product matrix of `v`.
    pub fn create_skew_symmetric_matrix(v: &Vector3<T>) -> Self {
        v.skew_symmetric()
    }
}

// Single-index access: v[i] instead of v[(i, 0)]
impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self[(i, 0)]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self[(i, 0)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_array_and_index() {
        let v = Vector::from_array([1.0, 2.0, 3.0]);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[1], 2.0);
        assert_eq!(v[2], 3.0);
        assert_eq!(v.nrows(), 3);
        assert_eq!(v.ncols(), 1);
    }

    #[test]
    fn index_mut() {
        let mut v = Vector::<f64, 3>::zeros();
        v[1] = 5.0;
        assert_eq!(v[1], 5.0);
        assert_eq!(v[(1, 0)], 5.0);
    }

    #[test]
    fn checked_single_index() {
        let v = Vector2::from_xy(7, 8);
        assert_eq!(v.at(1), Ok(8));
        assert_eq!(v.at(2), Err(MatrixError::IndexOutOfRange { row: 2, col: 0 }));
    }

    #[test]
    #[should_panic(expected = "index out of range")]
    fn single_index_out_of_range() {
        let v = Vector::<f64, 3>::zeros();
        let _ = v[3];
    }

    #[test]
    fn factories() {
        let v2 = Vector2::from_xy(1.0, 2.0);
        assert_eq!(v2, Vector::from_array([1.0, 2.0]));
        assert_eq!(v2, Matrix::new([[1.0], [2.0]]));

        let v3 = Vector3::from_xyz(1, 2, 3);
        assert_eq!(v3.len(), 3);
        assert_eq!(v3[2], 3);
    }

    #[test]
    fn dot_product() {
        let a = Vector::from_array([1.0, 2.0, 3.0]);
        let b = Vector::from_array([4.0, 5.0, 6.0]);
        assert_eq!(a.dot(&b), 32.0); // 1*4 + 2*5 + 3*6
    }

    #[test]
    fn vector_arithmetic() {
        let a = Vector::from_array([1.0, 2.0, 3.0]);
        let b = Vector::from_array([4.0, 5.0, 6.0]);

        let c = a + b;
        assert_eq!(c[0], 5.0);
        assert_eq!(c[2], 9.0);

        let d = a * 2.0;
        assert_eq!(d[0], 2.0);
        assert_eq!(d[2], 6.0);
    }

    #[test]
    fn dot_as_matrix_product() {
        let a = Vector::from_array([1.0, 2.0, 3.0]);
        let b = Vector::from_array([4.0, 5.0, 6.0]);
        assert_eq!((a.transpose() * b).to_scalar(), Ok(a.dot(&b)));
    }

    #[test]
    fn cross_product() {
        let x = Vector3::from_xyz(1.0, 0.0, 0.0);
        let y = Vector3::from_xyz(0.0, 1.0, 0.0);
        let z = Matrix::cross_product(&x, &y);
        assert_eq!(z, Vector3::from_xyz(0.0, 0.0, 1.0));
    }

    #[test]
    fn cross_product_anticommutative() {
        let a = Vector3::from_xyz(1.0, 2.0, 3.0);
        let b = Vector3::from_xyz(4.0, 5.0, 6.0);
        assert_eq!(a.cross(&b), -b.cross(&a));
    }

    #[test]
    fn cross_product_self_is_zero() {
        let a = Vector3::from_xyz(3.0, -1.0, 4.0);
        assert_eq!(a.cross(&a), Vector3::zeros());
    }

    #[test]
    fn skew_symmetric_matrix() {
        let v = Vector3::from_xyz(1, 2, 3);
        let s = Matrix::create_skew_symmetric_matrix(&v);
        assert_eq!(s, Matrix::new([[0, -3, 2], [3, 0, -1], [-2, 1, 0]]));
        assert_eq!(s.transpose(), -s);
        assert_eq!(s.trace(), 0);
    }
}
