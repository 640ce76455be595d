use std::io::Write;

use crate::{
    error::{Error, ParseError},
    interpreter::{executor::core::Context, lexer::Delimiter},
    kernel::order::{Comparison, compare},
};

impl<W: Write> Context<W> {
    /// Evaluates `<expr> (= | < | >) <expr>`.
    ///
    /// Both expressions are evaluated from scratch on every call, which is
    /// what makes `while` re-test its condition after each `endwhile`.
    ///
    /// # Errors
    /// - `ParseError::InvalidComparison` if the operator is missing or not
    ///   one of `=`, `<`, `>`.
    /// - `RuntimeError::DimensionMismatch` if the operands differ in shape.
    pub(crate) fn parse_condition(&mut self) -> Result<bool, Error> {
        let left = self.parse_expression()?;
        let token = self.lexer.next_token()?;
        let op = match token.delimiter() {
            Some(Delimiter::Equals) => Comparison::Equal,
            Some(Delimiter::Greater) => Comparison::Greater,
            Some(Delimiter::Less) => Comparison::Less,
            _ => return Err(ParseError::InvalidComparison { found: token.describe() }.into()),
        };
        let right = self.parse_expression()?;
        let holds = compare(&left, &right, op)?;
        log::debug!("line {}: condition {op:?} is {holds}", self.lexer.line());
        Ok(holds)
    }
}
