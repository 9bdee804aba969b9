//! Tagged per-element callbacks.
//!
//! Each adapter takes a closure of one fixed shape. When a single call site
//! has to accept any shape (for example [`Registry::apply_vector`]), the
//! closure is wrapped in one of these variants and dispatched with `apply`.
//!
//! [`Registry::apply_vector`]: crate::Registry::apply_vector

use num_traits::{Float, ToPrimitive};
use strided_view::{Matrix, Vector};

use crate::{
    matrix_each, matrix_each_with_index, matrix_map, matrix_map_index, matrix_map_with_index,
    vector_each, vector_each_with_index, vector_map, vector_map_index, vector_map_with_index,
    Result,
};

/// A vector callback. `R` is the result type of the mapping variants.
pub enum VectorCallback<'f, T, R> {
    /// `x -> y`, written back.
    Map(Box<dyn FnMut(T) -> R + 'f>),
    /// `i -> y`, written back.
    MapIndex(Box<dyn FnMut(usize) -> R + 'f>),
    /// `(x, i) -> y`, written back.
    MapWithIndex(Box<dyn FnMut(T, usize) -> R + 'f>),
    /// `x -> ()`, observed only.
    Each(Box<dyn FnMut(T) + 'f>),
    /// `(x, i) -> ()`, observed only.
    EachWithIndex(Box<dyn FnMut(T, usize) + 'f>),
}

impl<'f, T, R> VectorCallback<'f, T, R> {
    pub fn map(f: impl FnMut(T) -> R + 'f) -> Self {
        Self::Map(Box::new(f))
    }

    pub fn map_index(f: impl FnMut(usize) -> R + 'f) -> Self {
        Self::MapIndex(Box::new(f))
    }

    pub fn map_with_index(f: impl FnMut(T, usize) -> R + 'f) -> Self {
        Self::MapWithIndex(Box::new(f))
    }

    /// Whether this variant writes results back.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Self::Map(_) | Self::MapIndex(_) | Self::MapWithIndex(_)
        )
    }
}

impl<'f, T> VectorCallback<'f, T, f64> {
    pub fn each(f: impl FnMut(T) + 'f) -> Self {
        Self::Each(Box::new(f))
    }

    pub fn each_with_index(f: impl FnMut(T, usize) + 'f) -> Self {
        Self::EachWithIndex(Box::new(f))
    }
}

impl<T: Float, R: ToPrimitive> VectorCallback<'_, T, R> {
    /// Run the callback over `v` with the matching adapter.
    pub fn apply(self, v: &mut Vector<T>) -> Result<()> {
        match self {
            Self::Map(f) => vector_map(v, f).map(|_| ()),
            Self::MapIndex(f) => vector_map_index(v, f).map(|_| ()),
            Self::MapWithIndex(f) => vector_map_with_index(v, f).map(|_| ()),
            Self::Each(f) => {
                vector_each(v, f);
                Ok(())
            }
            Self::EachWithIndex(f) => {
                vector_each_with_index(v, f);
                Ok(())
            }
        }
    }
}

/// A matrix callback. Indices are `(row, col)`; visitation is row-major.
pub enum MatrixCallback<'f, T, R> {
    Map(Box<dyn FnMut(T) -> R + 'f>),
    MapIndex(Box<dyn FnMut(usize, usize) -> R + 'f>),
    MapWithIndex(Box<dyn FnMut(T, usize, usize) -> R + 'f>),
    Each(Box<dyn FnMut(T) + 'f>),
    EachWithIndex(Box<dyn FnMut(T, usize, usize) + 'f>),
}

impl<'f, T, R> MatrixCallback<'f, T, R> {
    pub fn map(f: impl FnMut(T) -> R + 'f) -> Self {
        Self::Map(Box::new(f))
    }

    pub fn map_index(f: impl FnMut(usize, usize) -> R + 'f) -> Self {
        Self::MapIndex(Box::new(f))
    }

    pub fn map_with_index(f: impl FnMut(T, usize, usize) -> R + 'f) -> Self {
        Self::MapWithIndex(Box::new(f))
    }

    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Self::Map(_) | Self::MapIndex(_) | Self::MapWithIndex(_)
        )
    }
}

impl<'f, T> MatrixCallback<'f, T, f64> {
    pub fn each(f: impl FnMut(T) + 'f) -> Self {
        Self::Each(Box::new(f))
    }

    pub fn each_with_index(f: impl FnMut(T, usize, usize) + 'f) -> Self {
        Self::EachWithIndex(Box::new(f))
    }
}

impl<T: Float, R: ToPrimitive> MatrixCallback<'_, T, R> {
    /// Run the callback over `m` with the matching adapter.
    pub fn apply(self, m: &mut Matrix<T>) -> Result<()> {
        match self {
            Self::Map(f) => matrix_map(m, f).map(|_| ()),
            Self::MapIndex(f) => matrix_map_index(m, f).map(|_| ()),
            Self::MapWithIndex(f) => matrix_map_with_index(m, f).map(|_| ()),
            Self::Each(f) => {
                matrix_each(m, f);
                Ok(())
            }
            Self::EachWithIndex(f) => {
                matrix_each_with_index(m, f);
                Ok(())
            }
        }
    }
}
