//! In-place map adapters.
//!
//! Every element is replaced by the value its callback returns. Vectors are
//! visited in index order, matrices in row-major order (rows outer, columns
//! inner). Callback results go through [`num_traits::NumCast`]; a result that
//! does not fit the element type stops the map with
//! [`AdapterError::TypeConversion`](crate::AdapterError::TypeConversion) and
//! leaves the already visited prefix overwritten.

use num_traits::{Float, ToPrimitive};
use strided_view::{Matrix, MatrixViewMut, Vector, VectorViewMut};

use crate::convert::convert_element;
use crate::Result;

// ============================================================================
// Loop kernels
// ============================================================================

#[inline]
fn fill_vector<T, R>(
    dest: &mut VectorViewMut<'_, T>,
    mut f: impl FnMut(usize, T) -> R,
) -> Result<()>
where
    T: Float,
    R: ToPrimitive,
{
    for i in 0..dest.len() {
        let out = f(i, dest.get(i));
        dest.set(i, convert_element(out, i)?);
    }
    Ok(())
}

#[inline]
fn fill_matrix<T, R>(
    dest: &mut MatrixViewMut<'_, T>,
    mut f: impl FnMut(usize, usize, T) -> R,
) -> Result<()>
where
    T: Float,
    R: ToPrimitive,
{
    let (size1, size2) = (dest.size1(), dest.size2());
    for i in 0..size1 {
        for j in 0..size2 {
            let out = f(i, j, dest.get(i, j));
            dest.set(i, j, convert_element(out, i * size2 + j)?);
        }
    }
    Ok(())
}

// ============================================================================
// Vector
// ============================================================================

/// Replace every element `x` with `f(x)`. Returns `v` for chaining.
pub fn vector_map<T, R, F>(v: &mut Vector<T>, mut f: F) -> Result<&mut Vector<T>>
where
    T: Float,
    R: ToPrimitive,
    F: FnMut(T) -> R,
{
    fill_vector(&mut v.view_mut(), |_, x| f(x))?;
    Ok(v)
}

/// Replace element `i` with `f(i)`, ignoring its previous value.
pub fn vector_map_index<T, R, F>(v: &mut Vector<T>, mut f: F) -> Result<&mut Vector<T>>
where
    T: Float,
    R: ToPrimitive,
    F: FnMut(usize) -> R,
{
    fill_vector(&mut v.view_mut(), |i, _| f(i))?;
    Ok(v)
}

/// Replace element `i` holding `x` with `f(x, i)`.
pub fn vector_map_with_index<T, R, F>(v: &mut Vector<T>, mut f: F) -> Result<&mut Vector<T>>
where
    T: Float,
    R: ToPrimitive,
    F: FnMut(T, usize) -> R,
{
    fill_vector(&mut v.view_mut(), |i, x| f(x, i))?;
    Ok(v)
}

/// [`vector_map`] over a zero-copy view; writes land in the viewed storage.
pub fn vector_map_view<T, R, F>(dest: &mut VectorViewMut<'_, T>, mut f: F) -> Result<()>
where
    T: Float,
    R: ToPrimitive,
    F: FnMut(T) -> R,
{
    fill_vector(dest, |_, x| f(x))
}

// ============================================================================
// Matrix
// ============================================================================

/// Replace every element `x` with `f(x)`, row-major. Returns `m` for chaining.
pub fn matrix_map<T, R, F>(m: &mut Matrix<T>, mut f: F) -> Result<&mut Matrix<T>>
where
    T: Float,
    R: ToPrimitive,
    F: FnMut(T) -> R,
{
    fill_matrix(&mut m.view_mut(), |_, _, x| f(x))?;
    Ok(m)
}

/// Replace element `(i, j)` with `f(i, j)`, ignoring its previous value.
pub fn matrix_map_index<T, R, F>(m: &mut Matrix<T>, mut f: F) -> Result<&mut Matrix<T>>
where
    T: Float,
    R: ToPrimitive,
    F: FnMut(usize, usize) -> R,
{
    fill_matrix(&mut m.view_mut(), |i, j, _| f(i, j))?;
    Ok(m)
}

/// Replace element `(i, j)` holding `x` with `f(x, i, j)`.
pub fn matrix_map_with_index<T, R, F>(m: &mut Matrix<T>, mut f: F) -> Result<&mut Matrix<T>>
where
    T: Float,
    R: ToPrimitive,
    F: FnMut(T, usize, usize) -> R,
{
    fill_matrix(&mut m.view_mut(), |i, j, x| f(x, i, j))?;
    Ok(m)
}

/// [`matrix_map`] over a zero-copy view; writes land in the viewed storage.
pub fn matrix_map_view<T, R, F>(dest: &mut MatrixViewMut<'_, T>, mut f: F) -> Result<()>
where
    T: Float,
    R: ToPrimitive,
    F: FnMut(T) -> R,
{
    fill_matrix(dest, |_, _, x| f(x))
}
