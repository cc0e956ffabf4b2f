//! # Sparse vector
//!
//! Parallel `data`/`indices` arrays over a conceptual dense vector of fixed
//! length. Indices start at `0` and are strictly increasing.

use num_traits::Zero;

use crate::error::SpError;

/// A sparse vector holding only its stored values and their positions.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SparseVector<T> {
    pub(crate) len: usize,
    pub(crate) data: Vec<T>,
    pub(crate) indices: Vec<usize>,
}

impl<T> SparseVector<T> {
    /// Create a vector of length `len` from parallel `data` and `indices`.
    ///
    /// Fails unless both arrays have the same length and the indices are
    /// strictly increasing and below `len`.
    pub fn new(len: usize, data: Vec<T>, indices: Vec<usize>) -> Result<Self, SpError> {
        if data.len() != indices.len() {
            return Err(SpError::LengthMismatch { data: data.len(), indices: indices.len() });
        }
        if let Some(position) = indices.windows(2).position(|w| w[0] >= w[1]) {
            return Err(SpError::UnsortedIndices { position: position + 1 });
        }
        if let Some(&index) = indices.last() {
            if index >= len {
                return Err(SpError::IndexOutOfBounds { index, len });
            }
        }
        Ok(Self { len, data, indices })
    }

    /// Create a vector without validating the index contract.
    ///
    /// Kernels assume sorted, unique, in-range indices; violating that gives
    /// wrong results or a panic, never memory unsafety.
    pub fn new_unchecked(len: usize, data: Vec<T>, indices: Vec<usize>) -> Self {
        debug_assert_eq!(data.len(), indices.len());
        Self { len, data, indices }
    }

    /// Conceptual (dense) length.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the conceptual length is zero.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of stored values.
    pub fn nnz(&self) -> usize {
        self.data.len()
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Mutable access to the stored values; the sparsity pattern is fixed.
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_parts(self) -> (usize, Vec<T>, Vec<usize>) {
        (self.len, self.data, self.indices)
    }

    /// Checks the index contract the kernels rely on. Debug builds only.
    #[inline]
    pub(crate) fn debug_check(&self, dense_len: usize) {
        debug_assert_eq!(self.data.len(), self.indices.len());
        debug_assert!(self.indices.is_sorted(), "sparse indices must be sorted");
        debug_assert!(
            self.indices.last().is_none_or(|&i| i < dense_len),
            "sparse index out of range for dense length {dense_len}"
        );
    }
}

impl<T: Copy> SparseVector<T> {
    /// Iterate `(index, value)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, T)> + '_ {
        self.indices.iter().copied().zip(self.data.iter().copied())
    }
}

impl<T: Copy + Zero> SparseVector<T> {
    /// Value at position `i`, zero when not stored.
    pub fn at(&self, i: usize) -> T {
        assert!(i < self.len, "index {i} out of bounds for length {}", self.len);
        match self.indices.binary_search(&i) {
            Ok(k) => self.data[k],
            Err(_) => T::zero(),
        }
    }

    /// Expand into a contiguous dense vector.
    pub fn to_dense(&self) -> Vec<T> {
        let mut dense = vec![T::zero(); self.len];
        for (i, v) in self.iter() {
            dense[i] = v;
        }
        dense
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construct_and_query() {
        let x = SparseVector::new(5, vec![1.0, 2.0, 3.0], vec![0, 2, 4]).unwrap();
        assert_eq!(x.len(), 5);
        assert_eq!(x.nnz(), 3);
        assert_eq!(x.at(2), 2.0);
        assert_eq!(x.at(3), 0.0);
        assert_eq!(x.to_dense(), vec![1.0, 0.0, 2.0, 0.0, 3.0]);
    }

    #[test]
    fn rejects_mismatched_lengths() {
        let err = SparseVector::new(5, vec![1.0, 2.0], vec![0]).unwrap_err();
        assert_eq!(err, SpError::LengthMismatch { data: 2, indices: 1 });
    }

    #[test]
    fn rejects_unsorted_and_duplicate_indices() {
        let err = SparseVector::new(5, vec![1.0, 2.0, 3.0], vec![0, 3, 2]).unwrap_err();
        assert_eq!(err, SpError::UnsortedIndices { position: 2 });
        let err = SparseVector::new(5, vec![1.0, 2.0], vec![1, 1]).unwrap_err();
        assert_eq!(err, SpError::UnsortedIndices { position: 1 });
    }

    #[test]
    fn rejects_out_of_range_index() {
        let err = SparseVector::new(4, vec![1.0], vec![4]).unwrap_err();
        assert_eq!(err, SpError::IndexOutOfBounds { index: 4, len: 4 });
    }

    #[test]
    fn empty_vector() {
        let x: SparseVector<f64> = SparseVector::new(0, vec![], vec![]).unwrap();
        assert!(x.is_empty());
        assert_eq!(x.nnz(), 0);
        assert!(x.to_dense().is_empty());
    }
}
