//! Tuning options for the sparse matrix-vector product.
//!
//! This module provides the `MulOptions` struct, which is passed to
//! [`mul_mat_vec_with`](crate::blas::mul_mat_vec_with) to control how the
//! format kernels run. Only the compressed-row kernel currently reads it.

/// Matrix-vector product parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MulOptions {
    /// Minimum number of rows before the CSR kernel splits work across the
    /// rayon pool. Ignored without the `rayon` feature.
    pub parallel_threshold: usize,
}

impl MulOptions {
    /// Options that keep every kernel on the calling thread.
    pub fn serial() -> Self {
        Self { parallel_threshold: usize::MAX }
    }
}

impl Default for MulOptions {
    fn default() -> Self {
        Self { parallel_threshold: 4096 }
    }
}
