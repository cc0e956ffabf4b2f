//! Core traits and dense vector views.

pub mod strided;
pub mod traits;

pub use strided::{Strided, StridedMut};
pub use traits::{Matrix, SparseFormat};
