use crate::{error::RuntimeError, interpreter::value::matrix::Matrix};

/// Applies `op` to corresponding elements of two equally shaped matrices.
fn elementwise(name: &'static str,
               left: &Matrix,
               right: &Matrix,
               op: impl Fn(f64, f64) -> f64)
               -> Result<Matrix, RuntimeError> {
    if left.dims() != right.dims() {
        return Err(RuntimeError::mismatch(name, left.dims(), right.dims()));
    }
    let data = left.data()
                   .iter()
                   .zip(right.data())
                   .map(|(&a, &b)| op(a, b))
                   .collect();
    Matrix::new(left.rows(), left.cols(), data)
}

/// Checks that `left.cols == right.rows` for a product.
const fn check_product(name: &'static str, left: &Matrix, right: &Matrix) -> Result<(), RuntimeError> {
    if left.cols() == right.rows() {
        Ok(())
    } else {
        Err(RuntimeError::mismatch(name, left.dims(), right.dims()))
    }
}

/// Elementwise sum.
///
/// # Errors
/// Returns `RuntimeError::DimensionMismatch` if the shapes differ.
///
/// # Example
/// ```
/// use calmat::{interpreter::value::matrix::Matrix, kernel::arith::add};
///
/// let a = Matrix::from_rows(&[vec![1.0, 2.0]]).unwrap();
/// let b = Matrix::from_rows(&[vec![10.0, 20.0]]).unwrap();
/// assert_eq!(add(&a, &b).unwrap().data(), &[11.0, 22.0]);
/// ```
pub fn add(left: &Matrix, right: &Matrix) -> Result<Matrix, RuntimeError> {
    elementwise("+", left, right, |a, b| a + b)
}

/// Elementwise difference.
///
/// # Errors
/// Returns `RuntimeError::DimensionMismatch` if the shapes differ.
pub fn sub(left: &Matrix, right: &Matrix) -> Result<Matrix, RuntimeError> {
    elementwise("-", left, right, |a, b| a - b)
}

/// Elementwise maximum, the union of two fuzzy relations.
///
/// # Errors
/// Returns `RuntimeError::DimensionMismatch` if the shapes differ.
pub fn union(left: &Matrix, right: &Matrix) -> Result<Matrix, RuntimeError> {
    elementwise("|", left, right, f64::max)
}

/// Elementwise minimum, the intersection of two fuzzy relations.
///
/// # Errors
/// Returns `RuntimeError::DimensionMismatch` if the shapes differ.
pub fn intersection(left: &Matrix, right: &Matrix) -> Result<Matrix, RuntimeError> {
    elementwise("&", left, right, f64::min)
}

/// Real matrix product.
///
/// # Errors
/// Returns `RuntimeError::DimensionMismatch` unless `left.cols == right.rows`.
///
/// # Example
/// ```
/// use calmat::{interpreter::value::matrix::Matrix, kernel::arith::matmul};
///
/// let a = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
/// let b = Matrix::from_rows(&[vec![5.0], vec![6.0]]).unwrap();
/// assert_eq!(matmul(&a, &b).unwrap().data(), &[17.0, 39.0]);
/// ```
pub fn matmul(left: &Matrix, right: &Matrix) -> Result<Matrix, RuntimeError> {
    check_product("*", left, right)?;
    Ok(Matrix::from_fn(left.rows(), right.cols(), |i, j| {
        left.row(i)
            .iter()
            .enumerate()
            .map(|(k, &a)| a * right[(k, j)])
            .sum()
    }))
}

/// Max-min (Boolean) product: `r[i,j] = max_k min(left[i,k], right[k,j])`.
///
/// # Errors
/// Returns `RuntimeError::DimensionMismatch` unless `left.cols == right.rows`.
///
/// # Example
/// ```
/// use calmat::{interpreter::value::matrix::Matrix, kernel::arith::bool_product};
///
/// let a = Matrix::from_rows(&[vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
/// let b = Matrix::from_rows(&[vec![0.2, 0.0], vec![0.7, 1.0]]).unwrap();
/// assert_eq!(bool_product(&a, &b).unwrap().data(), &[0.7, 1.0, 0.2, 0.0]);
/// ```
pub fn bool_product(left: &Matrix, right: &Matrix) -> Result<Matrix, RuntimeError> {
    check_product("^", left, right)?;
    Ok(Matrix::from_fn(left.rows(), right.cols(), |i, j| {
        left.row(i)
            .iter()
            .enumerate()
            .map(|(k, &a)| a.min(right[(k, j)]))
            .fold(f64::NEG_INFINITY, f64::max)
    }))
}
