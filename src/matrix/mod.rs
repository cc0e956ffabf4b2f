//! Matrix module: sparse storage formats and the dense adapter.

pub mod csr;
pub mod dense;
pub mod dok;
pub mod triplet;

pub use csr::CsrMatrix;
pub use dok::DokMatrix;
pub use triplet::Triplet;
