//! View materialization: copy a strided view into a new, independently owned
//! vector or matrix.
//!
//! The zero-copy views from `strided-view` borrow their source. The helpers
//! here resolve the view (with the storage layer's bounds checks) and return a
//! contiguous copy that shares nothing with the source.

use log::trace;
use strided_view::{Matrix, MatrixView, Vector, VectorView};

use crate::Result;

/// Copy any vector view into a contiguous owned vector.
pub fn materialize_vector<T: Copy>(view: VectorView<'_, T>) -> Vector<T> {
    trace!(
        "materialize vector: size={} stride={} offset={}",
        view.len(),
        view.stride(),
        view.offset()
    );
    Vector::from_vec(view.iter().collect())
}

/// Copy any matrix view into a densely packed owned matrix.
pub fn materialize_matrix<T: Copy>(view: MatrixView<'_, T>) -> Result<Matrix<T>> {
    trace!(
        "materialize matrix: {}x{} tda={}",
        view.size1(),
        view.size2(),
        view.tda()
    );
    Ok(Matrix::from_row_major(
        view.size1(),
        view.size2(),
        view.iter().collect(),
    )?)
}

/// Owned copy of `count` consecutive elements starting at `offset`.
pub fn vector_subvector<T: Copy>(v: &Vector<T>, offset: usize, count: usize) -> Result<Vector<T>> {
    Ok(materialize_vector(v.subvector(offset, count)?))
}

/// Owned copy of elements `offset, offset + stride, ...`, `count` of them.
///
/// Rejected unless `stride >= 1`, `count >= 1` and
/// `offset + (count - 1) * stride < v.len()`.
pub fn vector_subvector_with_stride<T: Copy>(
    v: &Vector<T>,
    offset: usize,
    stride: usize,
    count: usize,
) -> Result<Vector<T>> {
    Ok(materialize_vector(
        v.subvector_with_stride(offset, stride, count)?,
    ))
}

/// Owned copy of the `row_count x col_count` block at `(row_start, col_start)`.
pub fn matrix_submatrix<T: Copy>(
    m: &Matrix<T>,
    row_start: usize,
    col_start: usize,
    row_count: usize,
    col_count: usize,
) -> Result<Matrix<T>> {
    materialize_matrix(m.submatrix(row_start, col_start, row_count, col_count)?)
}

/// Owned copy of `size` elements of row `row`, starting at column `offset`.
pub fn matrix_row_view<T: Copy>(
    m: &Matrix<T>,
    row: usize,
    offset: usize,
    size: usize,
) -> Result<Vector<T>> {
    Ok(materialize_vector(m.subrow(row, offset, size)?))
}

/// Owned copy of `size` elements of column `col`, starting at row `offset`.
pub fn matrix_column_view<T: Copy>(
    m: &Matrix<T>,
    col: usize,
    offset: usize,
    size: usize,
) -> Result<Vector<T>> {
    Ok(materialize_vector(m.subcolumn(col, offset, size)?))
}

pub fn matrix_row<T: Copy>(m: &Matrix<T>, row: usize) -> Result<Vector<T>> {
    Ok(materialize_vector(m.row(row)?))
}

pub fn matrix_column<T: Copy>(m: &Matrix<T>, col: usize) -> Result<Vector<T>> {
    Ok(materialize_vector(m.column(col)?))
}

/// Owned copy of the main diagonal.
pub fn matrix_diagonal<T: Copy>(m: &Matrix<T>) -> Result<Vector<T>> {
    Ok(materialize_vector(m.diagonal()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AdapterError, StridedError};

    fn sequential(size1: usize, size2: usize) -> Matrix<f64> {
        Matrix::from_fn(size1, size2, |i, j| (i * size2 + j) as f64)
    }

    #[test]
    fn test_vector_subvector_copy_is_independent() {
        let v = Vector::from_fn(10, |i| i as f64 * 1.5);
        let mut sub = vector_subvector(&v, 2, 4).unwrap();
        assert_eq!(sub.iter().collect::<Vec<_>>(), vec![3.0, 4.5, 6.0, 7.5]);
        sub.set(0, -1.0);
        assert_eq!(v.get(2), 3.0);
    }

    #[test]
    fn test_vector_subvector_with_stride_is_contiguous() {
        let v = Vector::from_fn(9, |i| i as f64);
        let sub = vector_subvector_with_stride(&v, 1, 4, 2).unwrap();
        assert_eq!(sub.stride(), 1);
        assert_eq!(sub.data(), &[1.0, 5.0]);
    }

    #[test]
    fn test_vector_subvector_out_of_range() {
        let v = Vector::from_fn(4, |i| i as f64);
        assert_eq!(
            vector_subvector(&v, 2, 3).unwrap_err(),
            AdapterError::Strided(StridedError::VectorRange {
                offset: 2,
                stride: 1,
                count: 3,
                size: 4
            })
        );
    }

    #[test]
    fn test_matrix_submatrix() {
        let m = sequential(5, 5);
        let sub = matrix_submatrix(&m, 1, 1, 2, 2).unwrap();
        assert_eq!(sub.size1(), 2);
        assert_eq!(sub.tda(), 2);
        assert_eq!(sub.data(), &[6.0, 7.0, 11.0, 12.0]);
    }

    #[test]
    fn test_matrix_submatrix_of_padded_source() {
        let m = Matrix::from_parts((0..12).map(|x| x as f64).collect(), 3, 3, 4, 0).unwrap();
        let sub = matrix_submatrix(&m, 1, 0, 2, 3).unwrap();
        assert_eq!(sub.data(), &[4.0, 5.0, 6.0, 8.0, 9.0, 10.0]);
    }

    #[test]
    fn test_matrix_row_and_column_views() {
        let m = sequential(5, 5);
        let row = matrix_row_view(&m, 2, 1, 3).unwrap();
        assert_eq!(row.data(), &[11.0, 12.0, 13.0]);
        let col = matrix_column_view(&m, 3, 1, 2).unwrap();
        assert_eq!(col.data(), &[8.0, 13.0]);
    }

    #[test]
    fn test_matrix_row_column_diagonal_copies() {
        let m = sequential(3, 4);
        assert_eq!(matrix_row(&m, 2).unwrap().data(), &[8.0, 9.0, 10.0, 11.0]);
        assert_eq!(matrix_column(&m, 0).unwrap().data(), &[0.0, 4.0, 8.0]);
        assert_eq!(matrix_diagonal(&m).unwrap().data(), &[0.0, 5.0, 10.0]);
    }

    #[test]
    fn test_matrix_view_errors_propagate() {
        let m = sequential(2, 2);
        assert!(matches!(
            matrix_column_view(&m, 2, 0, 1),
            Err(AdapterError::Strided(StridedError::MatrixRange { .. }))
        ));
        assert_eq!(
            matrix_row_view(&m, 0, 0, 0).unwrap_err(),
            AdapterError::Strided(StridedError::EmptyView)
        );
    }
}
