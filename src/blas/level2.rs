//! Sparse BLAS Level 2: sparse matrix / dense vector products.
//!
//! `mul_mat_vec` dispatches on the [`SparseFormat`] a matrix reports. There is
//! no generic `Matrix::at` fallback: a matrix without a known sparse layout is
//! rejected with [`SpError::UnsupportedFormat`].

use num_traits::Float;

use crate::config::MulOptions;
use crate::core::strided::{Strided, StridedMut};
use crate::core::traits::{Matrix, SparseFormat};
use crate::error::SpError;

/// y ← alpha·A·x + y with default [`MulOptions`].
pub fn mul_mat_vec<T, M>(
    alpha: T,
    a: &M,
    x: &[T],
    incx: usize,
    y: &mut [T],
    incy: usize,
) -> Result<(), SpError>
where
    T: Float + Send + Sync,
    M: Matrix<T> + ?Sized,
{
    mul_mat_vec_with(&MulOptions::default(), alpha, a, x, incx, y, incy)
}

/// y ← alpha·A·x + y.
///
/// `x` must address at least `ncols` logical elements under `incx` and `y`
/// at least `nrows` under `incy`. When `alpha` is zero `A` is never read and
/// `y` is left as is; the format and operand checks still run.
pub fn mul_mat_vec_with<T, M>(
    opts: &MulOptions,
    alpha: T,
    a: &M,
    x: &[T],
    incx: usize,
    y: &mut [T],
    incy: usize,
) -> Result<(), SpError>
where
    T: Float + Send + Sync,
    M: Matrix<T> + ?Sized,
{
    let Some(format) = a.format() else {
        let name = std::any::type_name::<M>();
        tracing::error!(matrix = name, "no multiply kernel for matrix type");
        return Err(SpError::UnsupportedFormat(name));
    };

    let (nrows, ncols) = a.dims();
    let x = Strided::new(x, incx)?;
    let y = StridedMut::new(y, incy)?;
    if x.len() < ncols {
        return Err(SpError::DimensionMismatch(format!(
            "x has {} elements, matrix has {ncols} columns",
            x.len()
        )));
    }
    if y.len() < nrows {
        return Err(SpError::DimensionMismatch(format!(
            "y has {} elements, matrix has {nrows} rows",
            y.len()
        )));
    }

    if alpha.is_zero() {
        return Ok(());
    }

    tracing::trace!(format = format.name(), nrows, ncols, "sparse mat-vec");
    match format {
        SparseFormat::Csr(m) => m.mul_vec_acc_with(alpha, x, y, opts),
        SparseFormat::Dok(m) => m.mul_vec_acc(alpha, x, y),
    }
    Ok(())
}
