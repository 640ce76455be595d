use crate::{error::RuntimeError, interpreter::value::matrix::Matrix};

/// Inverts a symmetric positive-definite matrix through its Cholesky factor.
///
/// Only the lower triangle of `m` is read. The factor `L` is computed in
/// place column by column, inverted in place by forward substitution, and
/// the inverse is assembled as `L^-T * L^-1`.
///
/// # Errors
/// - `RuntimeError::NotSquare` if `m` is not square.
/// - `RuntimeError::NotPositiveDefinite` if a pivot is not strictly
///   positive.
///
/// # Example
/// ```
/// use calmat::{interpreter::value::matrix::Matrix, kernel::inverse::inv_sym};
///
/// let a = Matrix::from_rows(&[vec![4.0, 2.0], vec![2.0, 3.0]]).unwrap();
/// let inv = inv_sym(&a).unwrap();
/// assert!((inv[(0, 0)] - 0.375).abs() < 1e-12);
/// assert!((inv[(0, 1)] + 0.25).abs() < 1e-12);
/// assert!((inv[(1, 1)] - 0.5).abs() < 1e-12);
/// ```
pub fn inv_sym(m: &Matrix) -> Result<Matrix, RuntimeError> {
    if !m.is_square() {
        return Err(RuntimeError::NotSquare { op:   "inv_sym",
                                             rows: m.rows(),
                                             cols: m.cols(), });
    }
    let n = m.rows();
    let mut a = m.clone();

    // Cholesky factor in the lower triangle.
    for j in 0..n {
        let pivot = a[(j, j)] - (0..j).map(|k| a[(j, k)] * a[(j, k)]).sum::<f64>();
        if pivot <= 0.0 || pivot.is_nan() {
            return Err(RuntimeError::NotPositiveDefinite { pivot: j,
                                                           value: pivot });
        }
        let diagonal = pivot.sqrt();
        a[(j, j)] = diagonal;
        for i in j + 1..n {
            let s = a[(i, j)] - (0..j).map(|k| a[(i, k)] * a[(j, k)]).sum::<f64>();
            a[(i, j)] = s / diagonal;
        }
    }

    // L^-1 over L. Columns left of `j` already hold the inverse.
    for i in 0..n {
        a[(i, i)] = 1.0 / a[(i, i)];
    }
    for j in 0..n {
        for i in j + 1..n {
            let s = (j..i).map(|k| a[(i, k)] * a[(k, j)]).sum::<f64>();
            a[(i, j)] = -a[(i, i)] * s;
        }
    }

    Ok(Matrix::from_fn(n, n, |i, j| {
        (i.max(j)..n).map(|k| a[(k, i)] * a[(k, j)]).sum()
    }))
}
