use crate::{error::RuntimeError, interpreter::value::matrix::Matrix};

/// Comparison operators accepted in conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// `=`: every element equal.
    Equal,
    /// `>`: every element greater or equal, at least one strictly greater.
    Greater,
    /// `<`: every element less or equal, at least one strictly less.
    Less,
}

/// Compares two matrices under the componentwise partial order.
///
/// Two incomparable matrices are neither `<` nor `>`.
///
/// # Errors
/// Returns `RuntimeError::DimensionMismatch` if the shapes differ.
///
/// # Example
/// ```
/// use calmat::{
///     interpreter::value::matrix::Matrix,
///     kernel::order::{compare, Comparison},
/// };
///
/// let a = Matrix::from_rows(&[vec![1.0, 2.0]]).unwrap();
/// let b = Matrix::from_rows(&[vec![1.0, 3.0]]).unwrap();
/// let c = Matrix::from_rows(&[vec![2.0, 0.0]]).unwrap();
/// assert!(compare(&b, &a, Comparison::Greater).unwrap());
/// assert!(compare(&a, &b, Comparison::Less).unwrap());
/// assert!(!compare(&a, &c, Comparison::Less).unwrap());
/// assert!(!compare(&a, &c, Comparison::Greater).unwrap());
/// ```
pub fn compare(left: &Matrix, right: &Matrix, op: Comparison) -> Result<bool, RuntimeError> {
    if left.dims() != right.dims() {
        return Err(RuntimeError::mismatch("comparison", left.dims(), right.dims()));
    }
    let pairs = || left.data().iter().zip(right.data());
    Ok(match op {
           Comparison::Equal => pairs().all(|(a, b)| a == b),
           Comparison::Greater => pairs().all(|(a, b)| a >= b) && pairs().any(|(a, b)| a > b),
           Comparison::Less => pairs().all(|(a, b)| a <= b) && pairs().any(|(a, b)| a < b),
       })
}
