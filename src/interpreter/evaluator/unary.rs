use crate::{
    interpreter::{lexer::Delimiter, value::matrix::Matrix},
    kernel::transform,
};

/// Unary matrix operators.
///
/// Both are written before their operand but applied after it has been
/// evaluated, so `` `A*B `` transposes `A` only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// `` ` ``
    Transpose,
    /// `~`
    Complement,
}

impl UnaryOperator {
    /// Returns the operator written as `delimiter`, if any.
    #[must_use]
    pub const fn from_delimiter(delimiter: Delimiter) -> Option<Self> {
        match delimiter {
            Delimiter::Backtick => Some(Self::Transpose),
            Delimiter::Tilde => Some(Self::Complement),
            _ => None,
        }
    }

    /// Applies the operator.
    #[must_use]
    pub fn apply(self, operand: &Matrix) -> Matrix {
        match self {
            Self::Transpose => transform::transpose(operand),
            Self::Complement => transform::complement(operand),
        }
    }
}
