use crate::interpreter::value::matrix::Matrix;

/// Swaps rows and columns.
///
/// # Example
/// ```
/// use calmat::{interpreter::value::matrix::Matrix, kernel::transform::transpose};
///
/// let a = Matrix::from_rows(&[vec![1.0, 2.0, 3.0]]).unwrap();
/// let t = transpose(&a);
/// assert_eq!(t.dims(), (3, 1));
/// assert_eq!(transpose(&t), a);
/// ```
#[must_use]
pub fn transpose(m: &Matrix) -> Matrix {
    Matrix::from_fn(m.cols(), m.rows(), |i, j| m[(j, i)])
}

/// Boolean complement: strictly positive values become 0, anything else 1.
///
/// # Example
/// ```
/// use calmat::{interpreter::value::matrix::Matrix, kernel::transform::complement};
///
/// let a = Matrix::from_rows(&[vec![0.0, 1.0, 0.4, -2.0]]).unwrap();
/// assert_eq!(complement(&a).data(), &[1.0, 0.0, 0.0, 1.0]);
/// ```
#[must_use]
pub fn complement(m: &Matrix) -> Matrix {
    m.map(|x| if x > 0.0 { 0.0 } else { 1.0 })
}

/// Multiplies every element by `factor`.
#[must_use]
pub fn scale(m: &Matrix, factor: f64) -> Matrix {
    m.map(|x| factor * x)
}
