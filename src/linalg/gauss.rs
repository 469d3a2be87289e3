use crate::traits::{FloatScalar, MatrixMut, Scalar};
use crate::Matrix;

/// Bring a non-zero entry into `(row, col)` by swapping with the first
/// later row that has one. Returns `false` when the column is zero from
/// `row` downwards.
fn seat_pivot<T: Scalar>(a: &mut impl MatrixMut<T>, row: usize, col: usize) -> bool {
    if *a.get(row, col) != T::zero() {
        return true;
    }
    for candidate in (row + 1)..a.nrows() {
        if *a.get(candidate, col) != T::zero() {
            a.swap_rows(row, candidate);
            return true;
        }
    }
    false
}

/// Row-permutation pass run ahead of elimination.
///
/// Walks the columns left to right with a pivot row that advances only when
/// the column supplies a non-zero entry; a zero in pivot position is swapped
/// with the first later row holding a non-zero in that column. This is a
/// best-effort search, not partial pivoting by magnitude.
pub fn sort_for_gauss_in_place<T: Scalar>(a: &mut impl MatrixMut<T>) {
    let (m, n) = (a.nrows(), a.ncols());
    let mut pivot_row = 0;
    for col in 0..n {
        if pivot_row >= m {
            break;
        }
        if seat_pivot(a, pivot_row, col) {
            pivot_row += 1;
        }
    }
}

/// Forward elimination to row echelon form, in place.
///
/// After [`sort_for_gauss_in_place`], each column with a non-zero pivot
/// clears the entries beneath it by subtracting
/// `(below / pivot) · pivot_row`. Columns with no usable pivot are skipped.
/// Entries that are eliminated are written as exact zeros.
pub fn gauss_elimination_in_place<T: Scalar>(a: &mut impl MatrixMut<T>) {
    sort_for_gauss_in_place(a);

    let (m, n) = (a.nrows(), a.ncols());
    let mut pivot_row = 0;
    for col in 0..n {
        if pivot_row >= m {
            break;
        }
        if !seat_pivot(a, pivot_row, col) {
            continue;
        }
        let pivot = *a.get(pivot_row, col);
        for row in (pivot_row + 1)..m {
            let below = *a.get(row, col);
            if below == T::zero() {
                continue;
            }
            let factor = below / pivot;
            for j in (col + 1)..n {
                let val = *a.get(pivot_row, j);
                let cur = *a.get(row, j);
                *a.get_mut(row, j) = cur - factor * val;
            }
            *a.get_mut(row, col) = T::zero();
        }
        pivot_row += 1;
    }
}

/// Number of rows left with a non-zero entry after elimination of a copy.
///
/// Exact zero tests throughout: for floating data this is an approximate
/// rank that inherits the fragility of unpivoted elimination. For integer
/// element types the division truncates, so prefer floats.
pub fn rank_of<T: Scalar, A: MatrixMut<T> + Clone>(a: &A) -> usize {
    let mut work = a.clone();
    gauss_elimination_in_place(&mut work);
    (0..work.nrows())
        .filter(|&i| (0..work.ncols()).any(|j| *work.get(i, j) != T::zero()))
        .count()
}

/// Numerical rank of a copy of `a` with tolerance `eps`.
///
/// Elimination with partial pivoting by magnitude: each column picks the
/// remaining row with the largest `|x|`, and a column whose best candidate
/// is `<= eps` contributes no pivot. The count of pivots found is the rank.
pub fn rank_eps_of<T: FloatScalar, A: MatrixMut<T> + Clone>(a: &A, eps: T) -> usize {
    let mut work = a.clone();
    let (m, n) = (work.nrows(), work.ncols());
    let mut pivot_row = 0;
    for col in 0..n {
        if pivot_row >= m {
            break;
        }
        let mut best = pivot_row;
        let mut best_val = (*work.get(pivot_row, col)).abs();
        for row in (pivot_row + 1)..m {
            let val = (*work.get(row, col)).abs();
            if val > best_val {
                best_val = val;
                best = row;
            }
        }
        if best_val <= eps {
            continue;
        }
        if best != pivot_row {
            work.swap_rows(pivot_row, best);
        }
        let pivot = *work.get(pivot_row, col);
        for row in (pivot_row + 1)..m {
            let factor = *work.get(row, col) / pivot;
            for j in (col + 1)..n {
                let val = *work.get(pivot_row, j);
                let cur = *work.get(row, j);
                *work.get_mut(row, j) = cur - factor * val;
            }
            *work.get_mut(row, col) = T::zero();
        }
        pivot_row += 1;
    }
    pivot_row
}

impl<T: FloatScalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Rank with entries of magnitude `<= eps` treated as zero.
    ///
    /// Roundoff in a product of low-rank factors leaves tiny non-zero
    /// residues that [`rank`](Self::rank) counts as independent rows.
    ///
    /// ```
    /// use fixmat::Matrix;
    /// let u = Matrix::new([[1.0_f64, 2.0], [3.0, 1.0], [0.5, -1.0]]);
    /// let v = Matrix::new([[0.1, 0.7, 1.3], [2.2, -0.3, 0.9]]);
    /// assert_eq!((u * v).rank_eps(1e-9), 2);
    /// ```
    pub fn rank_eps(&self, eps: T) -> usize {
        rank_eps_of(self, eps)
    }
}

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Reorder rows so that zero pivots are replaced where possible.
    /// See [`sort_for_gauss_in_place`].
    pub fn sort_for_gauss(&mut self) {
        sort_for_gauss_in_place(self);
    }

    /// Forward elimination applied to `self`.
    ///
    /// ```
    /// use fixmat::Matrix;
    /// let mut m = Matrix::new([[2.0, 1.0], [4.0, 5.0]]);
    /// m.gauss_row_elimination();
    /// assert_eq!(m, Matrix::new([[2.0, 1.0], [0.0, 3.0]]));
    /// ```
    pub fn gauss_row_elimination(&mut self) {
        gauss_elimination_in_place(self);
    }

    /// Non-mutating variant of [`gauss_row_elimination`](Self::gauss_row_elimination).
    pub fn gauss_eliminated(&self) -> Self {
        let mut out = *self;
        out.gauss_row_elimination();
        out
    }

    /// Rank by counting non-zero rows after elimination. For float data
    /// carrying roundoff use [`rank_eps`](Self::rank_eps).
    ///
    /// ```
    /// use fixmat::Matrix;
    /// let m = Matrix::new([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [1.0, 1.0, 1.0]]);
    /// assert_eq!(m.rank(), 2);
    /// ```
    pub fn rank(&self) -> usize {
        rank_of(self)
    }
}
