//! Sparse BLAS kernels.
//!
//! - [`level1`]: dot, axpy, gather, gather-zero and scatter between a
//!   [`SparseVector`](crate::vector::SparseVector) and a strided dense buffer.
//! - [`level2`]: format-dispatched sparse matrix × dense vector
//!   multiply-accumulate.

pub mod level1;
pub mod level2;

pub use level1::{axpy, dot, gather, gather_zero, scatter};
pub use level2::{mul_mat_vec, mul_mat_vec_with};
