//! Vector module: sparse vector storage.

pub mod sparse;
pub use sparse::SparseVector;
