//! Fused iteration and view materialization for strided vectors and matrices.
//!
//! Storage, layout and bounds checking live in the [`strided_view`] crate.
//! This crate adds the adapter layer on top of it: loops that run a caller's
//! closure over every element without per-element dispatch, and helpers that
//! flatten a strided view into an independent owned copy.
//!
//! # Iteration
//!
//! - [`vector_map`], [`vector_map_index`], [`vector_map_with_index`]: in-place maps
//! - [`matrix_map`], [`matrix_map_index`], [`matrix_map_with_index`]: row-major in-place maps
//! - [`vector_each`], [`vector_each_with_index`], [`matrix_each`], [`matrix_each_with_index`]:
//!   observers
//! - [`vector_to_vec`], [`vector_from_slice`], [`matrix_to_vec`], [`matrix_from_slice`]:
//!   snapshots and bulk assignment
//!
//! # Materialization
//!
//! - [`vector_subvector`], [`vector_subvector_with_stride`]
//! - [`matrix_submatrix`], [`matrix_row_view`], [`matrix_column_view`]
//! - [`matrix_row`], [`matrix_column`], [`matrix_diagonal`]
//!
//! # Handles
//!
//! [`Registry`] owns vectors and matrices behind typed, generation-checked
//! [`VectorHandle`] / [`MatrixHandle`] values, and dispatches
//! [`VectorCallback`] / [`MatrixCallback`] variants against them.
//!
//! # Example
//!
//! ```rust
//! use strided_adapters::{matrix_row_view, vector_map, vector_to_vec, Matrix, Vector};
//!
//! let mut v = Vector::from_vec(vec![1.0, 2.0, 3.0]);
//! vector_map(&mut v, |x| x * 10.0).unwrap();
//! assert_eq!(vector_to_vec(&v), vec![10.0, 20.0, 30.0]);
//!
//! let m = Matrix::from_fn(5, 5, |i, j| (i * 5 + j) as f64);
//! let row = matrix_row_view(&m, 2, 1, 3).unwrap();
//! assert_eq!(vector_to_vec(&row), vec![11.0, 12.0, 13.0]);
//! ```

mod bulk;
pub mod callback;
mod convert;
mod each;
mod map;
mod materialize;
pub mod registry;

pub use bulk::{matrix_from_slice, matrix_to_vec, vector_from_slice, vector_to_vec};
pub use callback::{MatrixCallback, VectorCallback};
pub use each::{matrix_each, matrix_each_with_index, vector_each, vector_each_with_index};
pub use map::{
    matrix_map, matrix_map_index, matrix_map_view, matrix_map_with_index, vector_map,
    vector_map_index, vector_map_view, vector_map_with_index,
};
pub use materialize::{
    materialize_matrix, materialize_vector, matrix_column, matrix_column_view, matrix_diagonal,
    matrix_row, matrix_row_view, matrix_submatrix, vector_subvector,
    vector_subvector_with_stride,
};
pub use registry::{MatrixHandle, Registry, VectorHandle};

pub use strided_view::{
    Matrix, MatrixView, MatrixViewMut, StridedError, Vector, VectorView, VectorViewMut,
};

// ============================================================================
// Error types
// ============================================================================

/// Errors raised by the adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdapterError {
    /// A callback or input value could not be represented in the element type.
    ///
    /// `index` is the linear position (row-major for matrices) of the element
    /// being written. Elements before it have already been overwritten.
    #[error("value for element {index} is not convertible to the element type")]
    TypeConversion { index: usize },

    /// Bulk assignment source length differs from the target size.
    #[error("size mismatch: target holds {expected} elements, source has {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// Layout or bounds violation reported by the storage layer.
    #[error(transparent)]
    Strided(#[from] StridedError),

    /// Handle refers to an object that was released from its registry.
    #[error("stale {kind} handle: slot {index} generation {generation}")]
    StaleHandle {
        kind: &'static str,
        index: usize,
        generation: u32,
    },
}

/// Result type for adapter operations.
pub type Result<T> = std::result::Result<T, AdapterError>;
