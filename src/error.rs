use thiserror::Error;

// Unified error type for spblas

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpError {
    #[error("unsupported matrix format: {0}")]
    UnsupportedFormat(&'static str),
    #[error("data has {data} values but {indices} indices")]
    LengthMismatch { data: usize, indices: usize },
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("indices not strictly increasing at position {position}")]
    UnsortedIndices { position: usize },
    #[error("stride must be at least 1")]
    InvalidStride,
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),
    #[error("invalid sparse structure: {0}")]
    InvalidStructure(String),
}
