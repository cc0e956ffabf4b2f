// Dictionary-of-keys (DOK) storage: a hash map from (row, col) to value.
// Cheap incremental assembly; convert to CSR for repeated products.

use std::collections::HashMap;

use faer::Mat;
use num_traits::Float;

use crate::core::strided::{Strided, StridedMut};
use crate::core::traits::{Matrix, SparseFormat};
use crate::error::SpError;
use crate::matrix::csr::CsrMatrix;
use crate::matrix::triplet::{Triplet, sort_row_major};

#[derive(Debug, Clone, PartialEq)]
pub struct DokMatrix<T> {
    nrows: usize,
    ncols: usize,
    entries: HashMap<(usize, usize), T>,
}

impl<T: Float> DokMatrix<T> {
    /// Empty `nrows × ncols` matrix.
    pub fn new(nrows: usize, ncols: usize) -> Self {
        Self { nrows, ncols, entries: HashMap::new() }
    }

    /// Store `value` at (`row`, `col`). Setting zero removes the entry.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), SpError> {
        if row >= self.nrows {
            return Err(SpError::IndexOutOfBounds { index: row, len: self.nrows });
        }
        if col >= self.ncols {
            return Err(SpError::IndexOutOfBounds { index: col, len: self.ncols });
        }
        if value.is_zero() {
            self.entries.remove(&(row, col));
        } else {
            self.entries.insert((row, col), value);
        }
        Ok(())
    }

    /// Number of stored entries.
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Stored entries in row-major order.
    pub fn triplets(&self) -> Vec<Triplet<T>> {
        let mut t: Vec<_> = self
            .entries
            .iter()
            .map(|(&(row, col), &value)| Triplet::new(row, col, value))
            .collect();
        sort_row_major(&mut t);
        t
    }

    pub fn to_csr(&self) -> CsrMatrix<T> {
        CsrMatrix::from(self)
    }

    pub fn to_dense(&self) -> Mat<T> {
        Mat::from_fn(self.nrows, self.ncols, |i, j| self.at(i, j))
    }

    /// y ← alpha·A·x + y, one stored entry at a time in map order.
    pub(crate) fn mul_vec_acc(&self, alpha: T, x: Strided<'_, T>, mut y: StridedMut<'_, T>) {
        for (&(row, col), &v) in &self.entries {
            let yi = y.get_mut(row);
            *yi = *yi + alpha * v * x.get(col);
        }
    }
}

impl<T: Float> Matrix<T> for DokMatrix<T> {
    fn dims(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    fn at(&self, row: usize, col: usize) -> T {
        assert!(row < self.nrows && col < self.ncols, "({row}, {col}) out of bounds");
        self.entries.get(&(row, col)).copied().unwrap_or_else(T::zero)
    }

    fn format(&self) -> Option<SparseFormat<'_, T>> {
        Some(SparseFormat::Dok(self))
    }
}

impl<T: Float> FromIterator<Triplet<T>> for DokMatrix<T> {
    /// Collect entries; dimensions are the smallest that hold every entry.
    /// Later duplicates overwrite earlier ones.
    fn from_iter<I: IntoIterator<Item = Triplet<T>>>(iter: I) -> Self {
        let mut m = DokMatrix::new(0, 0);
        for t in iter {
            m.nrows = m.nrows.max(t.row + 1);
            m.ncols = m.ncols.max(t.col + 1);
            if t.value.is_zero() {
                m.entries.remove(&t.key());
            } else {
                m.entries.insert(t.key(), t.value);
            }
        }
        m
    }
}

impl<T: Float> From<&CsrMatrix<T>> for DokMatrix<T> {
    fn from(csr: &CsrMatrix<T>) -> Self {
        let (nrows, ncols) = csr.dims();
        let mut entries = HashMap::with_capacity(csr.nnz());
        for i in 0..nrows {
            for k in csr.row_ptr()[i]..csr.row_ptr()[i + 1] {
                let v = csr.values()[k];
                if !v.is_zero() {
                    entries.insert((i, csr.col_idx()[k]), v);
                }
            }
        }
        Self { nrows, ncols, entries }
    }
}
