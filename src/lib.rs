//! spblas: sparse BLAS kernels over strided dense buffers
//!
//! This crate provides the Level-1 sparse-vector kernels (dot, axpy, gather,
//! gather-zero, scatter) and a sparse matrix × dense vector
//! multiply-accumulate that dispatches to a storage-format-specific kernel
//! (compressed row or dictionary of keys).

pub mod blas;
pub mod config;
pub mod core;
pub mod error;
pub mod matrix;
pub mod vector;

// Re-exports for convenience
pub use blas::*;
pub use config::*;
pub use self::core::*;
pub use error::*;
pub use matrix::*;
pub use vector::*;
