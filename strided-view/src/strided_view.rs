//! Owned strided storage and borrowed views.
//!
//! - [`Vector`] / [`Matrix`]: owned storage
//! - [`VectorView`] / [`MatrixView`]: immutable zero-copy views
//! - [`VectorViewMut`] / [`MatrixViewMut`]: mutable zero-copy views
//!
//! Vector element `i` lives at `offset + i * stride`. Matrix element `(i, j)`
//! lives at `offset + i * tda + j` (row-major, unit column stride).

use std::ops::{Index, IndexMut};

use crate::{Result, StridedError};

// ============================================================================
// Validation helpers
// ============================================================================

/// Validate that a vector layout stays within `[0, len)`.
fn validate_vector(len: usize, size: usize, stride: usize, offset: usize) -> Result<()> {
    if stride == 0 {
        return Err(StridedError::ZeroStride);
    }
    if size == 0 {
        return Ok(());
    }
    let last = (size - 1)
        .checked_mul(stride)
        .and_then(|span| span.checked_add(offset))
        .ok_or(StridedError::OffsetOverflow)?;
    if last >= len {
        return Err(StridedError::LengthMismatch {
            expected: last + 1,
            actual: len,
        });
    }
    Ok(())
}

/// Validate that a row-major matrix layout stays within `[0, len)`.
fn validate_matrix(
    len: usize,
    size1: usize,
    size2: usize,
    tda: usize,
    offset: usize,
) -> Result<()> {
    if tda < size2 {
        return Err(StridedError::RowStrideTooSmall { tda, size2 });
    }
    if size1 == 0 || size2 == 0 {
        return Ok(());
    }
    let last = (size1 - 1)
        .checked_mul(tda)
        .and_then(|span| span.checked_add(offset))
        .and_then(|start| start.checked_add(size2 - 1))
        .ok_or(StridedError::OffsetOverflow)?;
    if last >= len {
        return Err(StridedError::LengthMismatch {
            expected: last + 1,
            actual: len,
        });
    }
    Ok(())
}

/// Layout of a strided slice of a vector: returns the new `(offset, stride)`.
///
/// `sub_offset`, `sub_stride` and `count` are in logical element units of the
/// parent, which itself has `size` elements at `offset + i * stride`.
fn subvector_layout(
    size: usize,
    stride: usize,
    offset: usize,
    sub_offset: usize,
    sub_stride: usize,
    count: usize,
) -> Result<(usize, usize)> {
    if sub_stride == 0 {
        return Err(StridedError::ZeroStride);
    }
    if count == 0 {
        return Err(StridedError::EmptyView);
    }
    let out_of_range = StridedError::VectorRange {
        offset: sub_offset,
        stride: sub_stride,
        count,
        size,
    };
    let last = (count - 1)
        .checked_mul(sub_stride)
        .and_then(|span| span.checked_add(sub_offset))
        .ok_or_else(|| out_of_range.clone())?;
    if last >= size {
        return Err(out_of_range);
    }
    // A single element never steps, so its stride is irrelevant.
    if count == 1 {
        return Ok((offset + sub_offset * stride, 1));
    }
    let new_stride = stride
        .checked_mul(sub_stride)
        .ok_or(StridedError::OffsetOverflow)?;
    Ok((offset + sub_offset * stride, new_stride))
}

/// Offset of the `rows x cols` block starting at `(row, col)`.
fn submatrix_layout(
    size1: usize,
    size2: usize,
    tda: usize,
    offset: usize,
    (row, col): (usize, usize),
    (rows, cols): (usize, usize),
) -> Result<usize> {
    if rows == 0 || cols == 0 {
        return Err(StridedError::EmptyView);
    }
    if row >= size1 || col >= size2 || rows > size1 - row || cols > size2 - col {
        return Err(StridedError::MatrixRange {
            row,
            col,
            rows,
            cols,
            size1,
            size2,
        });
    }
    Ok(offset + row * tda + col)
}

// ============================================================================
// VectorView
// ============================================================================

/// Immutable strided view over a vector's storage.
pub struct VectorView<'a, T> {
    data: &'a [T],
    size: usize,
    stride: usize,
    offset: usize,
}

impl<T> Clone for VectorView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for VectorView<'_, T> {}

impl<T> std::fmt::Debug for VectorView<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VectorView")
            .field("size", &self.size)
            .field("stride", &self.stride)
            .field("offset", &self.offset)
            .finish()
    }
}

impl<'a, T> VectorView<'a, T> {
    /// Create a view over a borrowed slice.
    pub fn new(data: &'a [T], size: usize, stride: usize, offset: usize) -> Result<Self> {
        validate_vector(data.len(), size, stride, offset)?;
        Ok(Self {
            data,
            size,
            stride,
            offset,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Contiguous slice `[offset, offset + count)` of this view.
    pub fn subvector(&self, offset: usize, count: usize) -> Result<VectorView<'a, T>> {
        self.subvector_with_stride(offset, 1, count)
    }

    /// Every `stride`-th element starting at `offset`, `count` elements in total.
    pub fn subvector_with_stride(
        &self,
        offset: usize,
        stride: usize,
        count: usize,
    ) -> Result<VectorView<'a, T>> {
        let (offset, stride) =
            subvector_layout(self.size, self.stride, self.offset, offset, stride, count)?;
        Ok(VectorView {
            data: self.data,
            size: count,
            stride,
            offset,
        })
    }
}

impl<'a, T: Copy> VectorView<'a, T> {
    /// Get an element.
    pub fn get(&self, index: usize) -> T {
        assert!(
            index < self.size,
            "index {} out of bounds for size {}",
            index,
            self.size
        );
        self.data[self.offset + index * self.stride]
    }

    /// Get an element, reporting an out-of-range index as an error.
    pub fn try_get(&self, index: usize) -> Result<T> {
        if index >= self.size {
            return Err(StridedError::IndexOutOfBounds {
                index,
                bound: self.size,
            });
        }
        Ok(self.data[self.offset + index * self.stride])
    }

    /// Iterate over the elements in index order.
    pub fn iter(&self) -> impl Iterator<Item = T> + 'a {
        let data = self.data;
        let (offset, stride) = (self.offset, self.stride);
        (0..self.size).map(move |i| data[offset + i * stride])
    }
}

// ============================================================================
// VectorViewMut
// ============================================================================

/// Mutable strided view over a vector's storage.
pub struct VectorViewMut<'a, T> {
    data: &'a mut [T],
    size: usize,
    stride: usize,
    offset: usize,
}

impl<T> std::fmt::Debug for VectorViewMut<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VectorViewMut")
            .field("size", &self.size)
            .field("stride", &self.stride)
            .field("offset", &self.offset)
            .finish()
    }
}

impl<'a, T> VectorViewMut<'a, T> {
    /// Create a mutable view over a borrowed slice.
    pub fn new(data: &'a mut [T], size: usize, stride: usize, offset: usize) -> Result<Self> {
        validate_vector(data.len(), size, stride, offset)?;
        Ok(Self {
            data,
            size,
            stride,
            offset,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Reborrow as an immutable view.
    pub fn as_view(&self) -> VectorView<'_, T> {
        VectorView {
            data: &*self.data,
            size: self.size,
            stride: self.stride,
            offset: self.offset,
        }
    }

    /// Narrow this view to a strided slice, consuming it.
    ///
    /// Takes `self` by value so two mutable views never alias.
    pub fn subvector_with_stride(
        self,
        offset: usize,
        stride: usize,
        count: usize,
    ) -> Result<VectorViewMut<'a, T>> {
        let (offset, stride) =
            subvector_layout(self.size, self.stride, self.offset, offset, stride, count)?;
        Ok(VectorViewMut {
            data: self.data,
            size: count,
            stride,
            offset,
        })
    }
}

impl<T: Copy> VectorViewMut<'_, T> {
    /// Get an element.
    pub fn get(&self, index: usize) -> T {
        assert!(index < self.size);
        self.data[self.offset + index * self.stride]
    }

    /// Set an element.
    pub fn set(&mut self, index: usize, value: T) {
        assert!(index < self.size);
        self.data[self.offset + index * self.stride] = value;
    }
}

// ============================================================================
// Vector
// ============================================================================

/// Owned strided vector.
///
/// Vectors built by the constructors here are contiguous (stride 1, offset 0);
/// [`Vector::from_parts`] accepts any validated layout.
pub struct Vector<T> {
    data: Vec<T>,
    size: usize,
    stride: usize,
    offset: usize,
}

impl<T> std::fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Vector")
            .field("size", &self.size)
            .field("stride", &self.stride)
            .field("offset", &self.offset)
            .finish()
    }
}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            size: self.size,
            stride: self.stride,
            offset: self.offset,
        }
    }
}

impl<T: Clone + Default> Vector<T> {
    /// Create a contiguous vector filled with `Default` values.
    pub fn zeros(size: usize) -> Self {
        Self::from_vec(vec![T::default(); size])
    }
}

impl<T> Vector<T> {
    /// Take ownership of a contiguous buffer.
    pub fn from_vec(data: Vec<T>) -> Self {
        let size = data.len();
        Self {
            data,
            size,
            stride: 1,
            offset: 0,
        }
    }

    /// Create a contiguous vector whose element `i` is `f(i)`.
    pub fn from_fn(size: usize, f: impl FnMut(usize) -> T) -> Self {
        Self::from_vec((0..size).map(f).collect())
    }

    /// Create from raw parts.
    pub fn from_parts(data: Vec<T>, size: usize, stride: usize, offset: usize) -> Result<Self> {
        validate_vector(data.len(), size, stride, offset)?;
        Ok(Self {
            data,
            size,
            stride,
            offset,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The backing buffer, including elements skipped by the stride.
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Create an immutable view over this vector.
    pub fn view(&self) -> VectorView<'_, T> {
        VectorView {
            data: &self.data,
            size: self.size,
            stride: self.stride,
            offset: self.offset,
        }
    }

    /// Create a mutable view over this vector.
    pub fn view_mut(&mut self) -> VectorViewMut<'_, T> {
        VectorViewMut {
            data: &mut self.data,
            size: self.size,
            stride: self.stride,
            offset: self.offset,
        }
    }

    /// Zero-copy contiguous slice. See [`VectorView::subvector`].
    pub fn subvector(&self, offset: usize, count: usize) -> Result<VectorView<'_, T>> {
        self.view().subvector(offset, count)
    }

    /// Zero-copy strided slice. See [`VectorView::subvector_with_stride`].
    pub fn subvector_with_stride(
        &self,
        offset: usize,
        stride: usize,
        count: usize,
    ) -> Result<VectorView<'_, T>> {
        self.view().subvector_with_stride(offset, stride, count)
    }

    /// Mutable zero-copy strided slice.
    pub fn subvector_with_stride_mut(
        &mut self,
        offset: usize,
        stride: usize,
        count: usize,
    ) -> Result<VectorViewMut<'_, T>> {
        self.view_mut().subvector_with_stride(offset, stride, count)
    }
}

impl<T: Copy> Vector<T> {
    /// Get an element.
    pub fn get(&self, index: usize) -> T {
        self.view().get(index)
    }

    /// Get an element, reporting an out-of-range index as an error.
    pub fn try_get(&self, index: usize) -> Result<T> {
        self.view().try_get(index)
    }

    /// Set an element.
    pub fn set(&mut self, index: usize, value: T) {
        self.view_mut().set(index, value);
    }

    /// Iterate over the elements in index order.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.view().iter()
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        assert!(index < self.size);
        &self.data[self.offset + index * self.stride]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        assert!(index < self.size);
        &mut self.data[self.offset + index * self.stride]
    }
}

// ============================================================================
// MatrixView
// ============================================================================

/// Immutable row-major view over a matrix's storage.
pub struct MatrixView<'a, T> {
    data: &'a [T],
    size1: usize,
    size2: usize,
    tda: usize,
    offset: usize,
}

impl<T> Clone for MatrixView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for MatrixView<'_, T> {}

impl<T> std::fmt::Debug for MatrixView<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatrixView")
            .field("size1", &self.size1)
            .field("size2", &self.size2)
            .field("tda", &self.tda)
            .field("offset", &self.offset)
            .finish()
    }
}

impl<'a, T> MatrixView<'a, T> {
    /// Create a view over a borrowed slice.
    pub fn new(
        data: &'a [T],
        size1: usize,
        size2: usize,
        tda: usize,
        offset: usize,
    ) -> Result<Self> {
        validate_matrix(data.len(), size1, size2, tda, offset)?;
        Ok(Self {
            data,
            size1,
            size2,
            tda,
            offset,
        })
    }

    /// Number of rows.
    #[inline]
    pub fn size1(&self) -> usize {
        self.size1
    }

    /// Number of columns.
    #[inline]
    pub fn size2(&self) -> usize {
        self.size2
    }

    /// Distance in elements between the starts of consecutive rows.
    #[inline]
    pub fn tda(&self) -> usize {
        self.tda
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.size1 * self.size2
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size1 == 0 || self.size2 == 0
    }

    /// The `rows x cols` block whose top-left corner is `(row, col)`.
    pub fn submatrix(
        &self,
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    ) -> Result<MatrixView<'a, T>> {
        let offset = submatrix_layout(
            self.size1,
            self.size2,
            self.tda,
            self.offset,
            (row, col),
            (rows, cols),
        )?;
        Ok(MatrixView {
            data: self.data,
            size1: rows,
            size2: cols,
            tda: self.tda,
            offset,
        })
    }

    /// `count` elements of row `row`, starting at column `offset`.
    pub fn subrow(&self, row: usize, offset: usize, count: usize) -> Result<VectorView<'a, T>> {
        let start = submatrix_layout(
            self.size1,
            self.size2,
            self.tda,
            self.offset,
            (row, offset),
            (1, count),
        )?;
        Ok(VectorView {
            data: self.data,
            size: count,
            stride: 1,
            offset: start,
        })
    }

    /// `count` elements of column `col`, starting at row `offset`.
    pub fn subcolumn(&self, col: usize, offset: usize, count: usize) -> Result<VectorView<'a, T>> {
        let start = submatrix_layout(
            self.size1,
            self.size2,
            self.tda,
            self.offset,
            (offset, col),
            (count, 1),
        )?;
        Ok(VectorView {
            data: self.data,
            size: count,
            stride: self.tda,
            offset: start,
        })
    }

    /// The whole of row `row`.
    pub fn row(&self, row: usize) -> Result<VectorView<'a, T>> {
        self.subrow(row, 0, self.size2)
    }

    /// The whole of column `col`.
    pub fn column(&self, col: usize) -> Result<VectorView<'a, T>> {
        self.subcolumn(col, 0, self.size1)
    }

    /// The main diagonal, `min(size1, size2)` elements.
    pub fn diagonal(&self) -> Result<VectorView<'a, T>> {
        let count = self.size1.min(self.size2);
        if count == 0 {
            return Err(StridedError::EmptyView);
        }
        Ok(VectorView {
            data: self.data,
            size: count,
            stride: self.tda + 1,
            offset: self.offset,
        })
    }
}

impl<'a, T: Copy> MatrixView<'a, T> {
    /// Get an element.
    pub fn get(&self, row: usize, col: usize) -> T {
        assert!(
            row < self.size1 && col < self.size2,
            "index ({}, {}) out of bounds for {}x{}",
            row,
            col,
            self.size1,
            self.size2
        );
        self.data[self.offset + row * self.tda + col]
    }

    /// Get an element, reporting an out-of-range index as an error.
    pub fn try_get(&self, row: usize, col: usize) -> Result<T> {
        if row >= self.size1 {
            return Err(StridedError::IndexOutOfBounds {
                index: row,
                bound: self.size1,
            });
        }
        if col >= self.size2 {
            return Err(StridedError::IndexOutOfBounds {
                index: col,
                bound: self.size2,
            });
        }
        Ok(self.data[self.offset + row * self.tda + col])
    }

    /// Iterate over the elements in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = T> + 'a {
        let data = self.data;
        let (size2, tda, offset) = (self.size2, self.tda, self.offset);
        (0..self.size1)
            .flat_map(move |i| (0..size2).map(move |j| data[offset + i * tda + j]))
    }
}

// ============================================================================
// MatrixViewMut
// ============================================================================

/// Mutable row-major view over a matrix's storage.
pub struct MatrixViewMut<'a, T> {
    data: &'a mut [T],
    size1: usize,
    size2: usize,
    tda: usize,
    offset: usize,
}

impl<T> std::fmt::Debug for MatrixViewMut<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatrixViewMut")
            .field("size1", &self.size1)
            .field("size2", &self.size2)
            .field("tda", &self.tda)
            .field("offset", &self.offset)
            .finish()
    }
}

impl<'a, T> MatrixViewMut<'a, T> {
    /// Create a mutable view over a borrowed slice.
    pub fn new(
        data: &'a mut [T],
        size1: usize,
        size2: usize,
        tda: usize,
        offset: usize,
    ) -> Result<Self> {
        validate_matrix(data.len(), size1, size2, tda, offset)?;
        Ok(Self {
            data,
            size1,
            size2,
            tda,
            offset,
        })
    }

    #[inline]
    pub fn size1(&self) -> usize {
        self.size1
    }

    #[inline]
    pub fn size2(&self) -> usize {
        self.size2
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.size1 * self.size2
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size1 == 0 || self.size2 == 0
    }

    /// Reborrow as an immutable view.
    pub fn as_view(&self) -> MatrixView<'_, T> {
        MatrixView {
            data: &*self.data,
            size1: self.size1,
            size2: self.size2,
            tda: self.tda,
            offset: self.offset,
        }
    }

    /// Narrow this view to a block, consuming it.
    pub fn submatrix(
        self,
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    ) -> Result<MatrixViewMut<'a, T>> {
        let offset = submatrix_layout(
            self.size1,
            self.size2,
            self.tda,
            self.offset,
            (row, col),
            (rows, cols),
        )?;
        Ok(MatrixViewMut {
            data: self.data,
            size1: rows,
            size2: cols,
            tda: self.tda,
            offset,
        })
    }
}

impl<T: Copy> MatrixViewMut<'_, T> {
    /// Get an element.
    pub fn get(&self, row: usize, col: usize) -> T {
        assert!(row < self.size1 && col < self.size2);
        self.data[self.offset + row * self.tda + col]
    }

    /// Set an element.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        assert!(row < self.size1 && col < self.size2);
        self.data[self.offset + row * self.tda + col] = value;
    }
}

// ============================================================================
// Matrix
// ============================================================================

/// Owned row-major matrix with row stride `tda`.
pub struct Matrix<T> {
    data: Vec<T>,
    size1: usize,
    size2: usize,
    tda: usize,
    offset: usize,
}

impl<T> std::fmt::Debug for Matrix<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Matrix")
            .field("size1", &self.size1)
            .field("size2", &self.size2)
            .field("tda", &self.tda)
            .field("offset", &self.offset)
            .finish()
    }
}

impl<T: Clone> Clone for Matrix<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            size1: self.size1,
            size2: self.size2,
            tda: self.tda,
            offset: self.offset,
        }
    }
}

impl<T: Clone + Default> Matrix<T> {
    /// Create a `size1 x size2` matrix filled with `Default` values.
    pub fn zeros(size1: usize, size2: usize) -> Self {
        Self {
            data: vec![T::default(); size1 * size2],
            size1,
            size2,
            tda: size2,
            offset: 0,
        }
    }
}

impl<T> Matrix<T> {
    /// Create a matrix whose element `(i, j)` is `f(i, j)`.
    ///
    /// The function is called in row-major order.
    pub fn from_fn(size1: usize, size2: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(size1 * size2);
        for i in 0..size1 {
            for j in 0..size2 {
                data.push(f(i, j));
            }
        }
        Self {
            data,
            size1,
            size2,
            tda: size2,
            offset: 0,
        }
    }

    /// Take ownership of a densely packed row-major buffer.
    pub fn from_row_major(size1: usize, size2: usize, data: Vec<T>) -> Result<Self> {
        let expected = size1
            .checked_mul(size2)
            .ok_or(StridedError::OffsetOverflow)?;
        if data.len() != expected {
            return Err(StridedError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            size1,
            size2,
            tda: size2,
            offset: 0,
        })
    }

    /// Create from raw parts.
    pub fn from_parts(
        data: Vec<T>,
        size1: usize,
        size2: usize,
        tda: usize,
        offset: usize,
    ) -> Result<Self> {
        validate_matrix(data.len(), size1, size2, tda, offset)?;
        Ok(Self {
            data,
            size1,
            size2,
            tda,
            offset,
        })
    }

    #[inline]
    pub fn size1(&self) -> usize {
        self.size1
    }

    #[inline]
    pub fn size2(&self) -> usize {
        self.size2
    }

    #[inline]
    pub fn tda(&self) -> usize {
        self.tda
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.size1 * self.size2
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size1 == 0 || self.size2 == 0
    }

    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Create an immutable view over this matrix.
    pub fn view(&self) -> MatrixView<'_, T> {
        MatrixView {
            data: &self.data,
            size1: self.size1,
            size2: self.size2,
            tda: self.tda,
            offset: self.offset,
        }
    }

    /// Create a mutable view over this matrix.
    pub fn view_mut(&mut self) -> MatrixViewMut<'_, T> {
        MatrixViewMut {
            data: &mut self.data,
            size1: self.size1,
            size2: self.size2,
            tda: self.tda,
            offset: self.offset,
        }
    }

    /// Zero-copy block. See [`MatrixView::submatrix`].
    pub fn submatrix(
        &self,
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    ) -> Result<MatrixView<'_, T>> {
        self.view().submatrix(row, col, rows, cols)
    }

    /// Mutable zero-copy block.
    pub fn submatrix_mut(
        &mut self,
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    ) -> Result<MatrixViewMut<'_, T>> {
        self.view_mut().submatrix(row, col, rows, cols)
    }

    pub fn subrow(&self, row: usize, offset: usize, count: usize) -> Result<VectorView<'_, T>> {
        self.view().subrow(row, offset, count)
    }

    pub fn subcolumn(&self, col: usize, offset: usize, count: usize) -> Result<VectorView<'_, T>> {
        self.view().subcolumn(col, offset, count)
    }

    pub fn row(&self, row: usize) -> Result<VectorView<'_, T>> {
        self.view().row(row)
    }

    pub fn column(&self, col: usize) -> Result<VectorView<'_, T>> {
        self.view().column(col)
    }

    pub fn diagonal(&self) -> Result<VectorView<'_, T>> {
        self.view().diagonal()
    }
}

impl<T: Copy> Matrix<T> {
    /// Get an element.
    pub fn get(&self, row: usize, col: usize) -> T {
        self.view().get(row, col)
    }

    /// Get an element, reporting an out-of-range index as an error.
    pub fn try_get(&self, row: usize, col: usize) -> Result<T> {
        self.view().try_get(row, col)
    }

    /// Set an element.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.view_mut().set(row, col, value);
    }

    /// Iterate over the elements in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.view().iter()
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(row < self.size1 && col < self.size2);
        &self.data[self.offset + row * self.tda + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(row < self.size1 && col < self.size2);
        &mut self.data[self.offset + row * self.tda + col]
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sequential_matrix(size1: usize, size2: usize) -> Matrix<f64> {
        Matrix::from_fn(size1, size2, |i, j| (i * size2 + j) as f64)
    }

    #[test]
    fn test_vector_from_fn() {
        let v = Vector::from_fn(4, |i| i as f64 * 0.5);
        assert_eq!(v.len(), 4);
        assert_eq!(v.stride(), 1);
        assert_eq!(v.get(3), 1.5);
        assert_eq!(v[2], 1.0);
    }

    #[test]
    fn test_vector_from_parts_strided() {
        let data: Vec<f64> = (0..10).map(|x| x as f64).collect();
        let v = Vector::from_parts(data, 3, 3, 1).unwrap();
        assert_eq!(v.iter().collect::<Vec<_>>(), vec![1.0, 4.0, 7.0]);
    }

    #[test]
    fn test_vector_from_parts_rejects_overrun() {
        let data = vec![0.0f64; 6];
        assert_eq!(
            Vector::from_parts(data, 3, 3, 0).unwrap_err(),
            StridedError::LengthMismatch {
                expected: 7,
                actual: 6
            }
        );
    }

    #[test]
    fn test_vector_from_parts_zero_stride() {
        assert_eq!(
            Vector::from_parts(vec![1.0f64], 1, 0, 0).unwrap_err(),
            StridedError::ZeroStride
        );
    }

    #[test]
    fn test_vector_try_get() {
        let v = Vector::from_vec(vec![1.0f64, 2.0]);
        assert_eq!(v.try_get(1), Ok(2.0));
        assert_eq!(
            v.try_get(2),
            Err(StridedError::IndexOutOfBounds { index: 2, bound: 2 })
        );
    }

    #[test]
    fn test_subvector() {
        let v = Vector::from_fn(10, |i| i as f64);
        let s = v.subvector(2, 4).unwrap();
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_subvector_with_stride() {
        let v = Vector::from_fn(10, |i| i as f64);
        let s = v.subvector_with_stride(1, 3, 3).unwrap();
        assert_eq!(s.stride(), 3);
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![1.0, 4.0, 7.0]);
    }

    #[test]
    fn test_subvector_of_strided_view() {
        let v = Vector::from_fn(12, |i| i as f64);
        let evens = v.subvector_with_stride(0, 2, 6).unwrap();
        let s = evens.subvector_with_stride(1, 2, 3).unwrap();
        assert_eq!(s.stride(), 4);
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![2.0, 6.0, 10.0]);
    }

    #[test]
    fn test_subvector_last_element_rule() {
        // offset + (count - 1) * stride must be < size
        let v = Vector::from_fn(10, |i| i as f64);
        assert!(v.subvector_with_stride(0, 3, 4).is_ok());
        assert_eq!(
            v.subvector_with_stride(1, 3, 4).unwrap_err(),
            StridedError::VectorRange {
                offset: 1,
                stride: 3,
                count: 4,
                size: 10
            }
        );
    }

    #[test]
    fn test_single_element_subvector_with_huge_stride() {
        let data: Vec<f64> = (0..20).map(|x| x as f64).collect();
        let v = Vector::from_parts(data, 10, 2, 0).unwrap();
        let s = v.subvector_with_stride(3, usize::MAX, 1).unwrap();
        assert_eq!(s.len(), 1);
        assert_eq!(s.stride(), 1);
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![6.0]);
    }

    #[test]
    fn test_subvector_rejects_empty_and_zero_stride() {
        let v = Vector::from_fn(4, |i| i as f64);
        assert_eq!(v.subvector(0, 0).unwrap_err(), StridedError::EmptyView);
        assert_eq!(
            v.subvector_with_stride(0, 0, 2).unwrap_err(),
            StridedError::ZeroStride
        );
    }

    #[test]
    fn test_subvector_mut_writes_through() {
        let mut v = Vector::from_fn(6, |i| i as f64);
        {
            let mut s = v.subvector_with_stride_mut(1, 2, 3).unwrap();
            s.set(2, -1.0);
            assert_eq!(s.as_view().get(0), 1.0);
        }
        assert_eq!(v.get(5), -1.0);
    }

    #[test]
    fn test_matrix_from_row_major() {
        let m = Matrix::from_row_major(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(m.get(0, 2), 3.0);
        assert_eq!(m.get(1, 0), 4.0);
        assert_eq!(m[(1, 2)], 6.0);
        assert_eq!(
            Matrix::from_row_major(2, 3, vec![0.0f64; 5]).unwrap_err(),
            StridedError::LengthMismatch {
                expected: 6,
                actual: 5
            }
        );
    }

    #[test]
    fn test_matrix_from_parts_padded_rows() {
        // 2x2 logical matrix inside rows of 3
        let m = Matrix::from_parts(vec![1.0, 2.0, 9.0, 3.0, 4.0, 9.0], 2, 2, 3, 0).unwrap();
        assert_eq!(m.iter().collect::<Vec<_>>(), vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(
            Matrix::<f64>::from_parts(vec![0.0; 6], 2, 3, 2, 0).unwrap_err(),
            StridedError::RowStrideTooSmall { tda: 2, size2: 3 }
        );
    }

    #[test]
    fn test_submatrix() {
        let m = sequential_matrix(5, 5);
        let s = m.submatrix(1, 1, 2, 2).unwrap();
        assert_eq!(s.size1(), 2);
        assert_eq!(s.tda(), 5);
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![6.0, 7.0, 11.0, 12.0]);
    }

    #[test]
    fn test_submatrix_out_of_range() {
        let m = sequential_matrix(5, 5);
        assert_eq!(
            m.submatrix(4, 0, 2, 1).unwrap_err(),
            StridedError::MatrixRange {
                row: 4,
                col: 0,
                rows: 2,
                cols: 1,
                size1: 5,
                size2: 5
            }
        );
        assert_eq!(m.submatrix(0, 0, 0, 3).unwrap_err(), StridedError::EmptyView);
    }

    #[test]
    fn test_subrow_and_subcolumn() {
        let m = sequential_matrix(5, 5);
        let r = m.subrow(2, 1, 3).unwrap();
        assert_eq!(r.iter().collect::<Vec<_>>(), vec![11.0, 12.0, 13.0]);
        let c = m.subcolumn(3, 1, 2).unwrap();
        assert_eq!(c.stride(), 5);
        assert_eq!(c.iter().collect::<Vec<_>>(), vec![8.0, 13.0]);
        assert!(m.subrow(2, 3, 3).is_err());
        assert!(m.subcolumn(5, 0, 1).is_err());
    }

    #[test]
    fn test_row_column_diagonal() {
        let m = sequential_matrix(3, 4);
        assert_eq!(
            m.row(1).unwrap().iter().collect::<Vec<_>>(),
            vec![4.0, 5.0, 6.0, 7.0]
        );
        assert_eq!(
            m.column(2).unwrap().iter().collect::<Vec<_>>(),
            vec![2.0, 6.0, 10.0]
        );
        assert_eq!(
            m.diagonal().unwrap().iter().collect::<Vec<_>>(),
            vec![0.0, 5.0, 10.0]
        );
    }

    #[test]
    fn test_nested_matrix_views() {
        let m = sequential_matrix(6, 6);
        let outer = m.submatrix(1, 1, 4, 4).unwrap();
        let inner = outer.submatrix(1, 2, 2, 2).unwrap();
        assert_eq!(inner.iter().collect::<Vec<_>>(), vec![15.0, 16.0, 21.0, 22.0]);
        let col = outer.subcolumn(0, 2, 2).unwrap();
        assert_eq!(col.iter().collect::<Vec<_>>(), vec![19.0, 25.0]);
    }

    #[test]
    fn test_submatrix_mut_writes_through() {
        let mut m = sequential_matrix(3, 3);
        {
            let mut s = m.submatrix_mut(1, 1, 2, 2).unwrap();
            s.set(1, 1, 100.0);
            assert_eq!(s.get(0, 0), 4.0);
        }
        assert_eq!(m.get(2, 2), 100.0);
    }

    #[test]
    fn test_matrix_try_get() {
        let m = sequential_matrix(2, 3);
        assert_eq!(m.try_get(1, 2), Ok(5.0));
        assert_eq!(
            m.try_get(1, 3),
            Err(StridedError::IndexOutOfBounds { index: 3, bound: 3 })
        );
    }

    #[test]
    #[should_panic]
    fn test_matrix_get_out_of_bounds_panics() {
        let m = sequential_matrix(2, 2);
        let _ = m.get(2, 0);
    }
}
