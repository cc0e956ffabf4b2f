//! Core matrix traits for spblas.

use crate::matrix::{CsrMatrix, DokMatrix};

/// Read-only access to a matrix of any storage layout.
pub trait Matrix<T> {
    /// Number of rows and columns.
    fn dims(&self) -> (usize, usize);
    /// Entry at (`row`, `col`); zero when the entry is not stored.
    fn at(&self, row: usize, col: usize) -> T;
    /// The sparse storage variant backing this matrix, if it is one the
    /// multiply kernels know about.
    fn format(&self) -> Option<SparseFormat<'_, T>> {
        None
    }
}

/// Closed set of sparse layouts with a dedicated multiply kernel.
#[derive(Debug)]
pub enum SparseFormat<'a, T> {
    Csr(&'a CsrMatrix<T>),
    Dok(&'a DokMatrix<T>),
}

impl<T> SparseFormat<'_, T> {
    /// Short layout name, as used in log records.
    pub fn name(&self) -> &'static str {
        match self {
            SparseFormat::Csr(_) => "csr",
            SparseFormat::Dok(_) => "dok",
        }
    }
}

impl<T, M: Matrix<T> + ?Sized> Matrix<T> for &M {
    fn dims(&self) -> (usize, usize) {
        (**self).dims()
    }
    fn at(&self, row: usize, col: usize) -> T {
        (**self).at(row, col)
    }
    fn format(&self) -> Option<SparseFormat<'_, T>> {
        (**self).format()
    }
}
