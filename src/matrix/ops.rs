use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::traits::Scalar;
use crate::Matrix;

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    fn zip_map(&self, rhs: &Self, f: impl Fn(T, T) -> T) -> Self {
        Matrix::from_fn(|i, j| f(self.data[i][j], rhs.data[i][j]))
    }

    fn update(&mut self, f: impl Fn(T) -> T) {
        for x in self.data.iter_mut().flatten() {
            *x = f(*x);
        }
    }

    /// Element-wise (Hadamard) product.
    ///
    /// ```
    /// use fixmat::Matrix;
    /// let a = Matrix::new([[1, 2, 3], [4, 5, 6]]);
    /// let b = Matrix::new([[0, 1, 0], [2, 0, -1]]);
    /// assert_eq!(a.element_mul(&b), Matrix::new([[0, 2, 0], [8, 0, -6]]));
    /// ```
    pub fn element_mul(&self, rhs: &Self) -> Self {
        self.zip_map(rhs, |a, b| a * b)
    }

    /// Transpose: (R×C) → (C×R).
    pub fn transpose(&self) -> Matrix<T, C, R> {
        Matrix::from_fn(|i, j| self.data[j][i])
    }
}

/// Owned and mixed operand forms of a binary operator, delegating to the
/// `&lhs op &rhs` impl. Every `Matrix` is `Copy`, so nothing is cloned.
macro_rules! forward_to_refs {
    ([$($g:tt)*] $Op:ident::$method:ident($Lhs:ty, $Rhs:ty) -> $Out:ty) => {
        impl<$($g)*> $Op<$Rhs> for $Lhs {
            type Output = $Out;
            fn $method(self, rhs: $Rhs) -> $Out {
                $Op::$method(&self, &rhs)
            }
        }

        impl<'r, $($g)*> $Op<&'r $Rhs> for $Lhs {
            type Output = $Out;
            fn $method(self, rhs: &'r $Rhs) -> $Out {
                $Op::$method(&self, rhs)
            }
        }

        impl<'l, $($g)*> $Op<$Rhs> for &'l $Lhs {
            type Output = $Out;
            fn $method(self, rhs: $Rhs) -> $Out {
                $Op::$method(self, &rhs)
            }
        }
    };
}

// Same-shape element-wise operators with their compound assignments.
macro_rules! elementwise {
    ($Op:ident, $method:ident, $OpAssign:ident, $method_assign:ident) => {
        impl<T: Scalar, const R: usize, const C: usize> $Op<&Matrix<T, R, C>>
            for &Matrix<T, R, C>
        {
            type Output = Matrix<T, R, C>;
            fn $method(self, rhs: &Matrix<T, R, C>) -> Matrix<T, R, C> {
                self.zip_map(rhs, <T as $Op>::$method)
            }
        }

        forward_to_refs!(
            [T: Scalar, const R: usize, const C: usize]
            $Op::$method(Matrix<T, R, C>, Matrix<T, R, C>) -> Matrix<T, R, C>
        );

        impl<T: Scalar, const R: usize, const C: usize> $OpAssign<&Matrix<T, R, C>>
            for Matrix<T, R, C>
        {
            fn $method_assign(&mut self, rhs: &Matrix<T, R, C>) {
                *self = $Op::$method(&*self, rhs);
            }
        }

        impl<T: Scalar, const R: usize, const C: usize> $OpAssign for Matrix<T, R, C> {
            fn $method_assign(&mut self, rhs: Self) {
                self.$method_assign(&rhs);
            }
        }
    };
}

elementwise!(Add, add, AddAssign, add_assign);
elementwise!(Sub, sub, SubAssign, sub_assign);

impl<T: Scalar, const R: usize, const C: usize> Neg for &Matrix<T, R, C> {
    type Output = Matrix<T, R, C>;

    fn neg(self) -> Matrix<T, R, C> {
        self.map(|x| T::zero() - x)
    }
}

impl<T: Scalar, const R: usize, const C: usize> Neg for Matrix<T, R, C> {
    type Output = Self;

    fn neg(self) -> Self {
        -&self
    }
}

// (R×K) · (K×C): the inner dimension is part of both types, so a shape
// mismatch is a compile error.
impl<T: Scalar, const R: usize, const K: usize, const C: usize> Mul<&Matrix<T, K, C>>
    for &Matrix<T, R, K>
{
    type Output = Matrix<T, R, C>;

    fn mul(self, rhs: &Matrix<T, K, C>) -> Matrix<T, R, C> {
        Matrix::from_fn(|i, j| {
            (0..K).fold(T::zero(), |acc, k| acc + self.data[i][k] * rhs.data[k][j])
        })
    }
}

forward_to_refs!(
    [T: Scalar, const R: usize, const K: usize, const C: usize]
    Mul::mul(Matrix<T, R, K>, Matrix<T, K, C>) -> Matrix<T, R, C>
);

// Broadcast of a scalar over every entry, `matrix op scalar`.
macro_rules! broadcast {
    ($Op:ident, $method:ident, $OpAssign:ident, $method_assign:ident) => {
        impl<T: Scalar, const R: usize, const C: usize> $Op<T> for &Matrix<T, R, C> {
            type Output = Matrix<T, R, C>;
            fn $method(self, rhs: T) -> Matrix<T, R, C> {
                self.map(|x| x.$method(rhs))
            }
        }

        impl<T: Scalar, const R: usize, const C: usize> $Op<T> for Matrix<T, R, C> {
            type Output = Self;
            fn $method(self, rhs: T) -> Self {
                $Op::$method(&self, rhs)
            }
        }

        impl<T: Scalar, const R: usize, const C: usize> $OpAssign<T> for Matrix<T, R, C> {
            fn $method_assign(&mut self, rhs: T) {
                self.update(|x| x.$method(rhs));
            }
        }
    };
}

broadcast!(Add, add, AddAssign, add_assign);
broadcast!(Sub, sub, SubAssign, sub_assign);
broadcast!(Mul, mul, MulAssign, mul_assign);
broadcast!(Div, div, DivAssign, div_assign);

// `scalar op matrix` for the commutative operators. A blanket impl over
// `T` is not allowed for a foreign left operand, so each primitive gets
// its own.
macro_rules! scalar_on_left {
    ($($t:ty),*) => {$(
        forward_to_refs!(
            [const R: usize, const C: usize]
            Mul::mul($t, Matrix<$t, R, C>) -> Matrix<$t, R, C>
        );
        forward_to_refs!(
            [const R: usize, const C: usize]
            Add::add($t, Matrix<$t, R, C>) -> Matrix<$t, R, C>
        );

        impl<const R: usize, const C: usize> Mul<&Matrix<$t, R, C>> for &$t {
            type Output = Matrix<$t, R, C>;
            fn mul(self, rhs: &Matrix<$t, R, C>) -> Matrix<$t, R, C> {
                rhs * *self
            }
        }

        impl<const R: usize, const C: usize> Add<&Matrix<$t, R, C>> for &$t {
            type Output = Matrix<$t, R, C>;
            fn add(self, rhs: &Matrix<$t, R, C>) -> Matrix<$t, R, C> {
                rhs + *self
            }
        }
    )*};
}

scalar_on_left!(f32, f64, i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);
