// Compressed sparse row (CSR) storage and its multiply-accumulate kernel.

use faer::Mat;
use num_traits::Float;

use crate::config::MulOptions;
use crate::core::strided::{Strided, StridedMut};
use crate::core::traits::{Matrix, SparseFormat};
use crate::error::SpError;
use crate::matrix::dok::DokMatrix;
use crate::matrix::triplet::{Triplet, sort_row_major};

/// Row `i` occupies `col_idx[row_ptr[i]..row_ptr[i + 1]]`, with strictly
/// increasing column indices inside each row.
#[derive(Debug, Clone, PartialEq)]
pub struct CsrMatrix<T> {
    nrows: usize,
    ncols: usize,
    row_ptr: Vec<usize>,
    col_idx: Vec<usize>,
    values: Vec<T>,
}

impl<T: Float> CsrMatrix<T> {
    /// Build a CSR from raw row‐ptr, col‐idx, and values.
    pub fn from_csr(
        nrows: usize,
        ncols: usize,
        row_ptr: Vec<usize>,
        col_idx: Vec<usize>,
        values: Vec<T>,
    ) -> Result<Self, SpError> {
        if row_ptr.len() != nrows + 1 {
            return Err(SpError::InvalidStructure(format!(
                "row_ptr has {} entries, expected {}",
                row_ptr.len(),
                nrows + 1
            )));
        }
        if col_idx.len() != values.len() {
            return Err(SpError::LengthMismatch { data: values.len(), indices: col_idx.len() });
        }
        if row_ptr[0] != 0 || row_ptr[nrows] != col_idx.len() {
            return Err(SpError::InvalidStructure(format!(
                "row_ptr must span 0..{}, got {}..{}",
                col_idx.len(),
                row_ptr[0],
                row_ptr[nrows]
            )));
        }
        if let Some(i) = row_ptr.windows(2).position(|w| w[0] > w[1]) {
            return Err(SpError::InvalidStructure(format!("row_ptr decreases at row {i}")));
        }
        for w in row_ptr.windows(2) {
            let cols = &col_idx[w[0]..w[1]];
            if let Some(p) = cols.windows(2).position(|c| c[0] >= c[1]) {
                return Err(SpError::UnsortedIndices { position: w[0] + p + 1 });
            }
            if let Some(&index) = cols.last() {
                if index >= ncols {
                    return Err(SpError::IndexOutOfBounds { index, len: ncols });
                }
            }
        }
        Ok(Self { nrows, ncols, row_ptr, col_idx, values })
    }

    /// Build from coordinate entries in any order. Duplicate coordinates are summed.
    pub fn from_triplets(
        nrows: usize,
        ncols: usize,
        mut triplets: Vec<Triplet<T>>,
    ) -> Result<Self, SpError> {
        for t in &triplets {
            if t.row >= nrows {
                return Err(SpError::IndexOutOfBounds { index: t.row, len: nrows });
            }
            if t.col >= ncols {
                return Err(SpError::IndexOutOfBounds { index: t.col, len: ncols });
            }
        }
        sort_row_major(&mut triplets);
        Ok(Self::from_sorted_triplets(nrows, ncols, &triplets))
    }

    /// `triplets` must be row-major sorted and inside `nrows × ncols`.
    pub(crate) fn from_sorted_triplets(nrows: usize, ncols: usize, triplets: &[Triplet<T>]) -> Self {
        let mut row_ptr = vec![0; nrows + 1];
        let mut col_idx = Vec::with_capacity(triplets.len());
        let mut values = Vec::with_capacity(triplets.len());
        let mut last = None;
        for t in triplets {
            debug_assert!(t.row < nrows && t.col < ncols);
            if last == Some(t.key()) {
                if let Some(v) = values.last_mut() {
                    *v = *v + t.value;
                }
                continue;
            }
            row_ptr[t.row + 1] += 1;
            col_idx.push(t.col);
            values.push(t.value);
            last = Some(t.key());
        }
        for i in 0..nrows {
            row_ptr[i + 1] += row_ptr[i];
        }
        Self { nrows, ncols, row_ptr, col_idx, values }
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Number of stored entries.
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    pub fn row_ptr(&self) -> &[usize] {
        &self.row_ptr
    }

    pub fn col_idx(&self) -> &[usize] {
        &self.col_idx
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Sum of row `i` against `x`, reading only the stored columns.
    #[inline]
    fn row_dot(&self, i: usize, x: &Strided<'_, T>) -> T {
        let (start, end) = (self.row_ptr[i], self.row_ptr[i + 1]);
        self.col_idx[start..end]
            .iter()
            .zip(&self.values[start..end])
            .fold(T::zero(), |acc, (&j, &v)| acc + v * x.get(j))
    }

    /// y ← alpha·A·x + y, one row at a time.
    pub(crate) fn mul_vec_acc(&self, alpha: T, x: Strided<'_, T>, mut y: StridedMut<'_, T>) {
        for i in 0..self.nrows {
            let yi = y.get_mut(i);
            *yi = *yi + alpha * self.row_dot(i, &x);
        }
    }

    /// Dense copy of this matrix.
    pub fn to_dense(&self) -> Mat<T> {
        let n = self.nrows;
        let mut dense = vec![T::zero(); n * self.ncols];
        for i in 0..n {
            for k in self.row_ptr[i]..self.row_ptr[i + 1] {
                dense[self.col_idx[k] * n + i] = self.values[k];
            }
        }
        Mat::from_fn(n, self.ncols, |i, j| dense[j * n + i])
    }
}

impl<T: Float + Send + Sync> CsrMatrix<T> {
    /// Row kernel selection: rows are split across the rayon pool once the
    /// matrix has at least `opts.parallel_threshold` rows.
    pub(crate) fn mul_vec_acc_with(
        &self,
        alpha: T,
        x: Strided<'_, T>,
        y: StridedMut<'_, T>,
        opts: &MulOptions,
    ) {
        #[cfg(feature = "rayon")]
        {
            if self.nrows >= opts.parallel_threshold {
                return self.mul_vec_acc_parallel(alpha, x, y);
            }
        }
        #[cfg(not(feature = "rayon"))]
        let _ = opts;
        self.mul_vec_acc(alpha, x, y)
    }
}

#[cfg(feature = "rayon")]
use rayon::prelude::*;

#[cfg(feature = "rayon")]
impl<T: Float + Send + Sync> CsrMatrix<T> {
    /// Parallel y ← alpha·A·x + y using Rayon.
    pub fn mul_vec_parallel(
        &self,
        alpha: T,
        x: &[T],
        incx: usize,
        y: &mut [T],
        incy: usize,
    ) -> Result<(), SpError> {
        let opts = MulOptions { parallel_threshold: 0 };
        crate::blas::mul_mat_vec_with(&opts, alpha, self, x, incx, y, incy)
    }

    fn mul_vec_acc_parallel(&self, alpha: T, x: Strided<'_, T>, y: StridedMut<'_, T>) {
        let (buf, incy) = y.into_parts();
        // Chunk i starts at logical element i; rows never share a chunk.
        buf.par_chunks_mut(incy)
            .take(self.nrows)
            .enumerate()
            .for_each(|(i, chunk)| {
                chunk[0] = chunk[0] + alpha * self.row_dot(i, &x);
            });
    }
}

impl<T: Float> Matrix<T> for CsrMatrix<T> {
    fn dims(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    fn at(&self, row: usize, col: usize) -> T {
        assert!(row < self.nrows && col < self.ncols, "({row}, {col}) out of bounds");
        let (start, end) = (self.row_ptr[row], self.row_ptr[row + 1]);
        match self.col_idx[start..end].binary_search(&col) {
            Ok(k) => self.values[start + k],
            Err(_) => T::zero(),
        }
    }

    fn format(&self) -> Option<SparseFormat<'_, T>> {
        Some(SparseFormat::Csr(self))
    }
}

impl<T: Float> From<&DokMatrix<T>> for CsrMatrix<T> {
    fn from(dok: &DokMatrix<T>) -> Self {
        let (nrows, ncols) = dok.dims();
        Self::from_sorted_triplets(nrows, ncols, &dok.triplets())
    }
}
