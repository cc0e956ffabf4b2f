//! Dense matrices through Faer.
//!
//! `faer::Mat<T>` implements [`Matrix`] so it can be compared entry by entry
//! with the sparse formats, but it exposes no [`SparseFormat`]: handing it to
//! [`mul_mat_vec`](crate::blas::mul_mat_vec) is an unsupported-format error,
//! not a slow dense fallback.
//!
//! [`SparseFormat`]: crate::core::traits::SparseFormat

use crate::core::traits::Matrix;
use faer::Mat;

impl<T: Copy + num_traits::Float> Matrix<T> for Mat<T> {
    fn dims(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }
    fn at(&self, row: usize, col: usize) -> T {
        self[(row, col)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dense_has_no_sparse_format() {
        let m = Mat::from_fn(2, 3, |i, j| (i * 3 + j) as f64);
        assert_eq!(Matrix::dims(&m), (2, 3));
        assert_eq!(Matrix::at(&m, 1, 2), 5.0);
        assert!(Matrix::format(&m).is_none());
    }
}
