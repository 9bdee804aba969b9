//! Owned storage behind typed, generation-checked handles.
//!
//! A [`Registry`] is the boundary for callers that cannot hold Rust borrows
//! (for example an embedding runtime that passes integer ids around). Vectors
//! and matrices live in separate slot tables and get distinct handle types, so
//! a matrix handle cannot be used where a vector is expected. Releasing an
//! object bumps its slot generation; every handle issued for the old
//! occupant then fails with [`AdapterError::StaleHandle`]. A slot that has
//! been released `u32::MAX` times is retired instead of wrapping back to
//! generation zero.

use log::debug;
use num_traits::{Float, ToPrimitive};
use strided_view::{Matrix, Vector};

use crate::callback::{MatrixCallback, VectorCallback};
use crate::{materialize, AdapterError, Result};

/// Handle to a [`Vector`] stored in a [`Registry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VectorHandle {
    index: usize,
    generation: u32,
}

/// Handle to a [`Matrix`] stored in a [`Registry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatrixHandle {
    index: usize,
    generation: u32,
}

// ============================================================================
// Slot table
// ============================================================================

struct Slot<V> {
    generation: u32,
    value: Option<V>,
}

struct Slots<V> {
    slots: Vec<Slot<V>>,
    free: Vec<usize>,
    live: usize,
}

impl<V> Slots<V> {
    fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            live: 0,
        }
    }

    fn insert(&mut self, value: V) -> (usize, u32) {
        self.live += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index];
            slot.value = Some(value);
            return (index, slot.generation);
        }
        self.slots.push(Slot {
            generation: 0,
            value: Some(value),
        });
        (self.slots.len() - 1, 0)
    }

    fn get(&self, index: usize, generation: u32) -> Option<&V> {
        self.slots
            .get(index)
            .filter(|slot| slot.generation == generation)
            .and_then(|slot| slot.value.as_ref())
    }

    fn get_mut(&mut self, index: usize, generation: u32) -> Option<&mut V> {
        self.slots
            .get_mut(index)
            .filter(|slot| slot.generation == generation)
            .and_then(|slot| slot.value.as_mut())
    }

    fn remove(&mut self, index: usize, generation: u32) -> Option<V> {
        let slot = self.slots.get_mut(index)?;
        if slot.generation != generation {
            return None;
        }
        let value = slot.value.take()?;
        self.live -= 1;
        // A slot whose generation is exhausted is retired, never reissued.
        match slot.generation.checked_add(1) {
            Some(next) => {
                slot.generation = next;
                self.free.push(index);
            }
            None => debug!("registry: retire slot={index}"),
        }
        Some(value)
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Owner of vectors and matrices addressed by handle.
pub struct Registry<T> {
    vectors: Slots<Vector<T>>,
    matrices: Slots<Matrix<T>>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("vectors", &self.vectors.live)
            .field("matrices", &self.matrices.live)
            .finish()
    }
}

fn stale_vector(h: VectorHandle) -> AdapterError {
    AdapterError::StaleHandle {
        kind: "vector",
        index: h.index,
        generation: h.generation,
    }
}

fn stale_matrix(h: MatrixHandle) -> AdapterError {
    AdapterError::StaleHandle {
        kind: "matrix",
        index: h.index,
        generation: h.generation,
    }
}

impl<T> Registry<T> {
    pub fn new() -> Self {
        Self {
            vectors: Slots::new(),
            matrices: Slots::new(),
        }
    }

    /// Number of live vectors.
    pub fn vector_count(&self) -> usize {
        self.vectors.live
    }

    /// Number of live matrices.
    pub fn matrix_count(&self) -> usize {
        self.matrices.live
    }

    /// Take ownership of `v` and return its handle.
    pub fn insert_vector(&mut self, v: Vector<T>) -> VectorHandle {
        let len = v.len();
        let (index, generation) = self.vectors.insert(v);
        debug!("registry: insert vector slot={index} gen={generation} len={len}");
        VectorHandle { index, generation }
    }

    /// Take ownership of `m` and return its handle.
    pub fn insert_matrix(&mut self, m: Matrix<T>) -> MatrixHandle {
        let (size1, size2) = (m.size1(), m.size2());
        let (index, generation) = self.matrices.insert(m);
        debug!("registry: insert matrix slot={index} gen={generation} shape={size1}x{size2}");
        MatrixHandle { index, generation }
    }

    pub fn vector(&self, h: VectorHandle) -> Result<&Vector<T>> {
        self.vectors
            .get(h.index, h.generation)
            .ok_or_else(|| stale_vector(h))
    }

    pub fn vector_mut(&mut self, h: VectorHandle) -> Result<&mut Vector<T>> {
        self.vectors
            .get_mut(h.index, h.generation)
            .ok_or_else(|| stale_vector(h))
    }

    pub fn matrix(&self, h: MatrixHandle) -> Result<&Matrix<T>> {
        self.matrices
            .get(h.index, h.generation)
            .ok_or_else(|| stale_matrix(h))
    }

    pub fn matrix_mut(&mut self, h: MatrixHandle) -> Result<&mut Matrix<T>> {
        self.matrices
            .get_mut(h.index, h.generation)
            .ok_or_else(|| stale_matrix(h))
    }

    /// Release a vector, handing ownership back to the caller.
    pub fn remove_vector(&mut self, h: VectorHandle) -> Result<Vector<T>> {
        let v = self
            .vectors
            .remove(h.index, h.generation)
            .ok_or_else(|| stale_vector(h))?;
        debug!("registry: release vector slot={} gen={}", h.index, h.generation);
        Ok(v)
    }

    /// Release a matrix, handing ownership back to the caller.
    pub fn remove_matrix(&mut self, h: MatrixHandle) -> Result<Matrix<T>> {
        let m = self
            .matrices
            .remove(h.index, h.generation)
            .ok_or_else(|| stale_matrix(h))?;
        debug!("registry: release matrix slot={} gen={}", h.index, h.generation);
        Ok(m)
    }
}

impl<T: Copy> Registry<T> {
    /// Materialize `count` consecutive elements into a new registry vector.
    pub fn subvector(
        &mut self,
        h: VectorHandle,
        offset: usize,
        count: usize,
    ) -> Result<VectorHandle> {
        let copy = materialize::vector_subvector(self.vector(h)?, offset, count)?;
        Ok(self.insert_vector(copy))
    }

    /// Materialize a strided slice into a new registry vector.
    pub fn subvector_with_stride(
        &mut self,
        h: VectorHandle,
        offset: usize,
        stride: usize,
        count: usize,
    ) -> Result<VectorHandle> {
        let copy =
            materialize::vector_subvector_with_stride(self.vector(h)?, offset, stride, count)?;
        Ok(self.insert_vector(copy))
    }

    /// Materialize a block into a new registry matrix.
    pub fn submatrix(
        &mut self,
        h: MatrixHandle,
        row_start: usize,
        col_start: usize,
        row_count: usize,
        col_count: usize,
    ) -> Result<MatrixHandle> {
        let copy = materialize::matrix_submatrix(
            self.matrix(h)?,
            row_start,
            col_start,
            row_count,
            col_count,
        )?;
        Ok(self.insert_matrix(copy))
    }

    /// Materialize part of a row into a new registry vector.
    pub fn row_view(
        &mut self,
        h: MatrixHandle,
        row: usize,
        offset: usize,
        size: usize,
    ) -> Result<VectorHandle> {
        let copy = materialize::matrix_row_view(self.matrix(h)?, row, offset, size)?;
        Ok(self.insert_vector(copy))
    }

    /// Materialize part of a column into a new registry vector.
    pub fn column_view(
        &mut self,
        h: MatrixHandle,
        col: usize,
        offset: usize,
        size: usize,
    ) -> Result<VectorHandle> {
        let copy = materialize::matrix_column_view(self.matrix(h)?, col, offset, size)?;
        Ok(self.insert_vector(copy))
    }
}

impl<T: Float> Registry<T> {
    /// Run a vector callback against the vector behind `h`.
    pub fn apply_vector<R: ToPrimitive>(
        &mut self,
        h: VectorHandle,
        callback: VectorCallback<'_, T, R>,
    ) -> Result<()> {
        callback.apply(self.vector_mut(h)?)
    }

    /// Run a matrix callback against the matrix behind `h`.
    pub fn apply_matrix<R: ToPrimitive>(
        &mut self,
        h: MatrixHandle,
        callback: MatrixCallback<'_, T, R>,
    ) -> Result<()> {
        callback.apply(self.matrix_mut(h)?)
    }
}
