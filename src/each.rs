//! Observer adapters: run a callback for its side effects on every element.
//!
//! Nothing is written back. Matrix visitation is row-major.

use strided_view::{Matrix, Vector};

/// Call `f(x)` for every element in index order.
pub fn vector_each<T, F>(v: &Vector<T>, f: F) -> &Vector<T>
where
    T: Copy,
    F: FnMut(T),
{
    v.iter().for_each(f);
    v
}

/// Call `f(x, i)` for every element in index order.
pub fn vector_each_with_index<T, F>(v: &Vector<T>, mut f: F) -> &Vector<T>
where
    T: Copy,
    F: FnMut(T, usize),
{
    for (i, x) in v.iter().enumerate() {
        f(x, i);
    }
    v
}

/// Call `f(x)` for every element in row-major order.
pub fn matrix_each<T, F>(m: &Matrix<T>, f: F) -> &Matrix<T>
where
    T: Copy,
    F: FnMut(T),
{
    m.iter().for_each(f);
    m
}

/// Call `f(x, i, j)` for every element in row-major order.
pub fn matrix_each_with_index<T, F>(m: &Matrix<T>, mut f: F) -> &Matrix<T>
where
    T: Copy,
    F: FnMut(T, usize, usize),
{
    let view = m.view();
    for i in 0..view.size1() {
        for j in 0..view.size2() {
            f(view.get(i, j), i, j);
        }
    }
    m
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_each_visits_in_order() {
        let v = Vector::from_vec(vec![3.0, 1.0, 2.0]);
        let mut seen = Vec::new();
        vector_each(&v, |x| seen.push(x));
        assert_eq!(seen, vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_vector_each_with_index_accumulates() {
        let v = Vector::from_fn(5, |i| (i + 1) as f64);
        let mut weighted = 0.0;
        vector_each_with_index(&v, |x, i| weighted += x * i as f64);
        assert_eq!(weighted, 1.0 * 2.0 + 2.0 * 3.0 + 3.0 * 4.0 + 4.0 * 5.0);
    }

    #[test]
    fn test_vector_each_empty() {
        let v = Vector::<f64>::zeros(0);
        let mut calls = 0;
        vector_each(&v, |_| calls += 1);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_matrix_each_row_major() {
        let m = Matrix::from_fn(2, 3, |i, j| (i * 3 + j) as f64);
        let mut seen = Vec::new();
        matrix_each(&m, |x| seen.push(x));
        assert_eq!(seen, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_matrix_each_with_index_flattens() {
        let m = Matrix::from_fn(3, 2, |i, j| (10 * i + j) as f64);
        let mut flat = Vec::new();
        matrix_each_with_index(&m, |x, i, j| flat.push((i * m.size2() + j, x)));
        assert_eq!(
            flat,
            vec![
                (0, 0.0),
                (1, 1.0),
                (2, 10.0),
                (3, 11.0),
                (4, 20.0),
                (5, 21.0)
            ]
        );
    }

    #[test]
    fn test_matrix_each_padded_rows() {
        let m = Matrix::from_parts(vec![1.0, 2.0, -1.0, 3.0, 4.0], 2, 2, 3, 0).unwrap();
        let mut sum = 0.0;
        matrix_each(&m, |x| sum += x);
        assert_eq!(sum, 10.0);
    }
}
