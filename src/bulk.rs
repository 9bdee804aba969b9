//! Snapshots and bulk assignment.

use num_traits::{Float, ToPrimitive};
use strided_view::{Matrix, Vector};

use crate::convert::convert_element;
use crate::{AdapterError, Result};

/// Copy the current elements into a new `Vec`, in index order.
///
/// The returned `Vec` owns its storage; later writes to `v` do not reach it.
pub fn vector_to_vec<T: Copy>(v: &Vector<T>) -> Vec<T> {
    v.iter().collect()
}

/// Copy the current elements into a new `Vec`, in row-major order.
pub fn matrix_to_vec<T: Copy>(m: &Matrix<T>) -> Vec<T> {
    m.iter().collect()
}

/// Overwrite `v` element-by-element from `values`.
///
/// The length is checked before anything is written, so a
/// [`AdapterError::SizeMismatch`] leaves `v` untouched. A value that does not
/// convert to `T` fails with [`AdapterError::TypeConversion`] after the
/// elements before it have been written.
pub fn vector_from_slice<'v, T, R>(
    v: &'v mut Vector<T>,
    values: &[R],
) -> Result<&'v mut Vector<T>>
where
    T: Float,
    R: ToPrimitive + Copy,
{
    if values.len() != v.len() {
        return Err(AdapterError::SizeMismatch {
            expected: v.len(),
            actual: values.len(),
        });
    }
    {
        let mut dest = v.view_mut();
        for (i, &value) in values.iter().enumerate() {
            dest.set(i, convert_element(value, i)?);
        }
    }
    Ok(v)
}

/// Overwrite `m` in row-major order from `values`.
///
/// Same length and conversion rules as [`vector_from_slice`], with the
/// expected length being `size1 * size2`.
pub fn matrix_from_slice<'m, T, R>(
    m: &'m mut Matrix<T>,
    values: &[R],
) -> Result<&'m mut Matrix<T>>
where
    T: Float,
    R: ToPrimitive + Copy,
{
    if values.len() != m.len() {
        return Err(AdapterError::SizeMismatch {
            expected: m.len(),
            actual: values.len(),
        });
    }
    let size2 = m.size2();
    {
        let mut dest = m.view_mut();
        for (k, &value) in values.iter().enumerate() {
            dest.set(k / size2, k % size2, convert_element(value, k)?);
        }
    }
    Ok(m)
}
