//! Strided views over caller-owned dense buffers.
//!
//! A dense vector is a flat buffer plus an increment: logical element `i`
//! lives at `buffer[i * inc]`. The same view serves contiguous vectors
//! (`inc == 1`) and interleaved data such as one column of a row-major
//! matrix. The logical length of a buffer of `L` elements is `ceil(L / inc)`,
//! i.e. the largest `n` with `(n - 1) * inc < L`.
//!
//! Views never reallocate or bounds-check beyond what slice indexing does.

use crate::error::SpError;

/// Number of logical elements addressable in `len` physical slots.
#[inline]
pub fn logical_len(len: usize, inc: usize) -> usize {
    if len == 0 { 0 } else { (len - 1) / inc + 1 }
}

/// Immutable strided view.
#[derive(Debug, Clone, Copy)]
pub struct Strided<'a, T> {
    data: &'a [T],
    inc: usize,
}

impl<'a, T: Copy> Strided<'a, T> {
    /// Wrap `data` with increment `inc`, rejecting a zero increment.
    pub fn new(data: &'a [T], inc: usize) -> Result<Self, SpError> {
        if inc == 0 {
            return Err(SpError::InvalidStride);
        }
        Ok(Self { data, inc })
    }

    /// Kernel-side constructor; the increment is only checked in debug builds.
    #[inline]
    pub(crate) fn from_parts(data: &'a [T], inc: usize) -> Self {
        debug_assert!(inc >= 1, "stride must be at least 1");
        Self { data, inc }
    }

    pub fn len(&self) -> usize {
        logical_len(self.data.len(), self.inc)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn stride(&self) -> usize {
        self.inc
    }

    /// Logical element `i`.
    #[inline]
    pub fn get(&self, i: usize) -> T {
        self.data[i * self.inc]
    }

    pub fn iter(&self) -> impl Iterator<Item = T> + 'a {
        self.data.iter().step_by(self.inc).copied()
    }
}

/// Mutable strided view.
#[derive(Debug)]
pub struct StridedMut<'a, T> {
    data: &'a mut [T],
    inc: usize,
}

impl<'a, T: Copy> StridedMut<'a, T> {
    /// Wrap `data` with increment `inc`, rejecting a zero increment.
    pub fn new(data: &'a mut [T], inc: usize) -> Result<Self, SpError> {
        if inc == 0 {
            return Err(SpError::InvalidStride);
        }
        Ok(Self { data, inc })
    }

    #[inline]
    pub(crate) fn from_parts(data: &'a mut [T], inc: usize) -> Self {
        debug_assert!(inc >= 1, "stride must be at least 1");
        Self { data, inc }
    }

    pub fn len(&self) -> usize {
        logical_len(self.data.len(), self.inc)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn stride(&self) -> usize {
        self.inc
    }

    #[inline]
    pub fn get(&self, i: usize) -> T {
        self.data[i * self.inc]
    }

    #[inline]
    pub fn get_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i * self.inc]
    }

    #[inline]
    pub fn set(&mut self, i: usize, value: T) {
        self.data[i * self.inc] = value;
    }

    /// Read-only view of the same elements.
    pub fn as_strided(&self) -> Strided<'_, T> {
        Strided { data: self.data, inc: self.inc }
    }

    /// Underlying buffer and increment, for kernels that split the rows.
    #[cfg_attr(not(feature = "rayon"), allow(dead_code))]
    pub(crate) fn into_parts(self) -> (&'a mut [T], usize) {
        (self.data, self.inc)
    }
}
