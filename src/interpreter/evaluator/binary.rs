use crate::{
    error::RuntimeError,
    interpreter::{lexer::Delimiter, value::matrix::Matrix},
    kernel::arith,
};

/// Binary matrix operators.
///
/// The four sum-level operators share one precedence level and fold strictly
/// left to right, as do the two product-level operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `|`
    Union,
    /// `&`
    Intersection,
    /// `*`
    Product,
    /// `^`
    BoolProduct,
}

impl BinaryOperator {
    /// Returns the sum-level operator written as `delimiter`, if any.
    #[must_use]
    pub const fn sum_level(delimiter: Delimiter) -> Option<Self> {
        match delimiter {
            Delimiter::Plus => Some(Self::Add),
            Delimiter::Minus => Some(Self::Sub),
            Delimiter::Pipe => Some(Self::Union),
            Delimiter::Ampersand => Some(Self::Intersection),
            _ => None,
        }
    }

    /// Returns the product-level operator written as `delimiter`, if any.
    #[must_use]
    pub const fn product_level(delimiter: Delimiter) -> Option<Self> {
        match delimiter {
            Delimiter::Star => Some(Self::Product),
            Delimiter::Caret => Some(Self::BoolProduct),
            _ => None,
        }
    }

    /// Applies the operator to two matrices.
    ///
    /// # Errors
    /// Returns `RuntimeError::DimensionMismatch` when the shapes are
    /// incompatible with the operator.
    ///
    /// # Example
    /// ```
    /// use calmat::interpreter::{evaluator::binary::BinaryOperator, value::matrix::Matrix};
    ///
    /// let a = Matrix::from_rows(&[vec![1.0, 5.0]]).unwrap();
    /// let b = Matrix::from_rows(&[vec![3.0, 2.0]]).unwrap();
    /// assert_eq!(BinaryOperator::Union.apply(&a, &b).unwrap().data(), &[3.0, 5.0]);
    /// assert!(BinaryOperator::Product.apply(&a, &b).is_err());
    /// ```
    pub fn apply(self, left: &Matrix, right: &Matrix) -> Result<Matrix, RuntimeError> {
        match self {
            Self::Add => arith::add(left, right),
            Self::Sub => arith::sub(left, right),
            Self::Union => arith::union(left, right),
            Self::Intersection => arith::intersection(left, right),
            Self::Product => arith::matmul(left, right),
            Self::BoolProduct => arith::bool_product(left, right),
        }
    }
}
