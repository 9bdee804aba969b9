//! Strided vector and matrix storage with borrow-checked views.
//!
//! This crate owns the element layout used by `strided-adapters`:
//!
//! - [`Vector`]: owned 1D storage with `size`, `stride` and `offset`
//! - [`Matrix`]: owned row-major 2D storage with `size1 x size2` and row stride `tda`
//! - [`VectorView`] / [`VectorViewMut`]: zero-copy vector views over existing storage
//! - [`MatrixView`] / [`MatrixViewMut`]: zero-copy matrix views over existing storage
//!
//! # View Constructors
//!
//! These operate only on size/stride/offset metadata and never copy data:
//! - `subvector`, `subvector_with_stride`: contiguous or strided slices of a vector
//! - `submatrix`: rectangular block of a matrix
//! - `row`, `column`, `subrow`, `subcolumn`, `diagonal`: vector views into a matrix
//!
//! Every constructor validates its parameters and reports violations with
//! [`StridedError`]. A view borrows its source, so it cannot outlive it.

pub mod strided_view;

pub use strided_view::{Matrix, MatrixView, MatrixViewMut, Vector, VectorView, VectorViewMut};

// ============================================================================
// Error types
// ============================================================================

/// Errors raised by layout validation and view construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StridedError {
    /// Stride 0 is never a valid vector stride.
    #[error("invalid stride 0")]
    ZeroStride,

    /// Views must contain at least one element.
    #[error("view length must be positive")]
    EmptyView,

    /// A strided vector view would read past the end of its source.
    #[error("vector view out of range: offset {offset} stride {stride} count {count} for size {size}")]
    VectorRange {
        offset: usize,
        stride: usize,
        count: usize,
        size: usize,
    },

    /// A matrix block, row run or column run lies outside the source.
    #[error(
        "matrix view out of range: origin ({row}, {col}) extent {rows}x{cols} for {size1}x{size2}"
    )]
    MatrixRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
        size1: usize,
        size2: usize,
    },

    /// Element index out of range.
    #[error("index {index} out of bounds for dimension {bound}")]
    IndexOutOfBounds { index: usize, bound: usize },

    /// Backing buffer length does not match the requested layout.
    #[error("length mismatch: expected {expected}, found {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Matrix row stride smaller than its row length.
    #[error("row stride {tda} smaller than row length {size2}")]
    RowStrideTooSmall { tda: usize, size2: usize },

    /// Integer overflow while computing an element position.
    #[error("offset overflow while computing element position")]
    OffsetOverflow,
}

/// Result type for storage and view operations.
pub type Result<T> = std::result::Result<T, StridedError>;
