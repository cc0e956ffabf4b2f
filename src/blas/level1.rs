//! Sparse BLAS Level 1: sparse-vector / dense-vector operations.
//!
//! Every kernel touches the dense operand only at the positions named by the
//! sparse vector's indices; all other dense elements are neither read nor
//! written. Dense operands are a flat buffer plus an increment `incy`, so
//! logical element `i` is `y[i * incy]`.
//!
//! The kernels trust their inputs. Sorted, unique indices and a nonzero
//! increment are checked only in debug builds; an index past the end of the
//! buffer panics on slice indexing.

use num_traits::{Float, Zero};

use crate::core::strided::{Strided, StridedMut};
use crate::vector::SparseVector;

// ============================================================================
// DOT: inner product over the sparse support
// ============================================================================

/// result = Σ x.data[k] · y[x.indices[k] · incy]
#[inline]
pub fn dot<T: Float>(x: &SparseVector<T>, y: &[T], incy: usize) -> T {
    let y = Strided::from_parts(y, incy);
    x.debug_check(y.len());
    x.iter().fold(T::zero(), |acc, (i, v)| acc + v * y.get(i))
}

// ============================================================================
// AXPY: y = alpha * x + y
// ============================================================================

/// y[x.indices[k] · incy] += alpha · x.data[k]
///
/// Returns without touching `y` when `alpha` is zero, so NaN or infinite
/// values in `x` never leak into `y`.
#[inline]
pub fn axpy<T: Float>(alpha: T, x: &SparseVector<T>, y: &mut [T], incy: usize) {
    if alpha.is_zero() {
        return;
    }
    let mut y = StridedMut::from_parts(y, incy);
    x.debug_check(y.len());
    for (i, v) in x.iter() {
        let yi = y.get_mut(i);
        *yi = *yi + alpha * v;
    }
}

// ============================================================================
// GATHER / GATHER-ZERO: dense -> sparse
// ============================================================================

/// Copy `y` at `indices` into `x`.
///
/// `x` takes `indices` verbatim (order kept) and the logical length of `y`;
/// its value storage is reused and resized to `indices.len()`.
pub fn gather<T: Copy>(y: &[T], incy: usize, x: &mut SparseVector<T>, indices: &[usize]) {
    let y = Strided::from_parts(y, incy);
    x.len = y.len();
    x.indices.clear();
    x.indices.extend_from_slice(indices);
    x.data.clear();
    x.data.extend(indices.iter().map(|&i| y.get(i)));
}

/// Like [`gather`], then zero every gathered element of `y`.
pub fn gather_zero<T: Copy + Zero>(y: &mut [T], incy: usize, x: &mut SparseVector<T>, indices: &[usize]) {
    let mut y = StridedMut::from_parts(y, incy);
    x.len = y.len();
    x.indices.clear();
    x.indices.extend_from_slice(indices);
    x.data.clear();
    x.data.reserve(indices.len());
    for &i in indices {
        let yi = y.get_mut(i);
        x.data.push(*yi);
        *yi = T::zero();
    }
}

// ============================================================================
// SCATTER: sparse -> dense
// ============================================================================

/// y[x.indices[k] · incy] = x.data[k]
///
/// Overwrites rather than accumulates; other elements of `y` keep their value.
#[inline]
pub fn scatter<T: Copy>(x: &SparseVector<T>, y: &mut [T], incy: usize) {
    let mut y = StridedMut::from_parts(y, incy);
    x.debug_check(y.len());
    for (i, v) in x.iter() {
        y.set(i, v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sv(n: usize, data: &[f64], indices: &[usize]) -> SparseVector<f64> {
        SparseVector::new(n, data.to_vec(), indices.to_vec()).unwrap()
    }

    #[test]
    fn dot_skips_unstored_positions() {
        let x = sv(5, &[1.0, 2.0, 3.0], &[0, 2, 4]);
        let y = [1.0, f64::NAN, 3.0, f64::NAN, 5.0];
        assert_eq!(dot(&x, &y, 1), 22.0);
    }

    #[test]
    fn dot_strided() {
        let x = sv(3, &[2.0, 4.0], &[1, 2]);
        let y = [f64::NAN, 0.0, 3.0, 0.0, 5.0];
        assert_eq!(dot(&x, &y, 2), 26.0);
    }

    #[test]
    fn dot_empty_support() {
        let x = sv(4, &[], &[]);
        assert_eq!(dot(&x, &[f64::NAN; 4], 1), 0.0);
    }

    #[test]
    fn axpy_cases() {
        for (alpha, want) in [
            (0.0, [6.0, 7.0, 8.0, 9.0]),
            (1.0, [7.0, 7.0, 10.0, 12.0]),
            (2.0, [8.0, 7.0, 12.0, 15.0]),
        ] {
            let x = sv(4, &[1.0, 2.0, 3.0], &[0, 2, 3]);
            let mut y = [6.0, 7.0, 8.0, 9.0];
            axpy(alpha, &x, &mut y, 1);
            assert_eq!(y, want, "alpha = {alpha}");
        }
    }

    #[test]
    fn axpy_zero_alpha_ignores_nan() {
        let x = sv(3, &[f64::NAN, f64::INFINITY], &[0, 2]);
        let mut y = [1.0, 2.0, 3.0];
        axpy(0.0, &x, &mut y, 1);
        assert_eq!(y, [1.0, 2.0, 3.0]);
        axpy(-0.0, &x, &mut y, 1);
        assert_eq!(y, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn axpy_strided() {
        let x = sv(4, &[1.0, 2.0, 3.0], &[0, 2, 3]);
        let mut y = [0.0; 8];
        axpy(2.0, &x, &mut y, 2);
        assert_eq!(y, [2.0, 0.0, 0.0, 0.0, 4.0, 0.0, 6.0, 0.0]);
    }

    #[test]
    fn gather_contiguous_and_strided() {
        let y = [1.0, 2.0, 3.0, 4.0];
        let mut x = SparseVector::default();
        gather(&y, 1, &mut x, &[0, 2, 3]);
        assert_eq!(x.len(), 4);
        assert_eq!(x.data(), &[1.0, 3.0, 4.0]);
        assert_eq!(x.indices(), &[0, 2, 3]);

        let y = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        gather(&y, 2, &mut x, &[0, 3]);
        assert_eq!(x.len(), 4);
        assert_eq!(x.data(), &[1.0, 7.0]);
        assert_eq!(x.indices(), &[0, 3]);
    }

    #[test]
    fn gather_keeps_index_order() {
        let y = [1.0, 2.0, 3.0, 4.0];
        let mut x = SparseVector::default();
        gather(&y, 1, &mut x, &[3, 0]);
        assert_eq!(x.data(), &[4.0, 1.0]);
        assert_eq!(x.indices(), &[3, 0]);
    }

    #[test]
    fn gather_zero_clears_source() {
        let mut y = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let mut x = SparseVector::default();
        gather_zero(&mut y, 1, &mut x, &[2, 4, 6]);
        assert_eq!(x.len(), 8);
        assert_eq!(x.data(), &[3.0, 5.0, 7.0]);
        assert_eq!(x.indices(), &[2, 4, 6]);
        assert_eq!(y, [1.0, 2.0, 0.0, 4.0, 0.0, 6.0, 0.0, 8.0]);
    }

    #[test]
    fn gather_zero_strided() {
        let mut y = [1.0, 2.0, 3.0, 4.0, 5.0];
        let mut x = SparseVector::default();
        gather_zero(&mut y, 2, &mut x, &[1, 2]);
        assert_eq!(x.len(), 3);
        assert_eq!(x.data(), &[3.0, 5.0]);
        assert_eq!(y, [1.0, 2.0, 0.0, 4.0, 0.0]);
    }

    #[test]
    fn scatter_overwrites() {
        let x = sv(4, &[1.0, 2.0, 3.0], &[0, 2, 3]);
        let mut y = [f64::NAN, 0.0, f64::NAN, f64::NAN];
        scatter(&x, &mut y, 1);
        assert_eq!(y, [1.0, 0.0, 2.0, 3.0]);

        let x = sv(8, &[1.0, 2.0, 3.0], &[0, 4, 6]);
        let mut y = [f64::NAN, 0.0, 0.0, 0.0, f64::NAN, 0.0, f64::NAN, 0.0];
        scatter(&x, &mut y, 1);
        assert_eq!(y, [1.0, 0.0, 0.0, 0.0, 2.0, 0.0, 3.0, 0.0]);
    }

    #[test]
    fn scatter_strided() {
        let x = sv(4, &[1.0, 2.0, 3.0], &[0, 2, 3]);
        let mut y = [f64::NAN, 0.0, 0.0, 0.0, f64::NAN, 0.0, f64::NAN, 0.0];
        scatter(&x, &mut y, 2);
        assert_eq!(y, [1.0, 0.0, 0.0, 0.0, 2.0, 0.0, 3.0, 0.0]);
    }

    #[test]
    #[should_panic]
    fn dot_index_past_buffer_panics() {
        let x = SparseVector::new_unchecked(10, vec![1.0], vec![7]);
        dot(&x, &[1.0, 2.0], 1);
    }
}
