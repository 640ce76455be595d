use std::io::Write;

use crate::{
    error::{Error, ParseError},
    interpreter::{
        evaluator::{binary::BinaryOperator, unary::UnaryOperator},
        executor::core::Context,
        lexer::{Delimiter, TokenKind},
        value::{matrix::Matrix, variables::VariableId},
    },
    kernel::transform,
    util::num::parse_scalar,
};

impl<W: Write> Context<W> {
    /// Evaluates one expression starting at the next token.
    ///
    /// This is the entry point of the recursive descent used by assignments
    /// and conditions. It stops at the first token that cannot continue the
    /// expression and leaves it unconsumed.
    ///
    /// # Errors
    /// Returns `ParseError::MissingExpression` if the statement ends here,
    /// plus every syntax and runtime error raised while evaluating.
    pub(crate) fn parse_expression(&mut self) -> Result<Matrix, Error> {
        if self.lexer.peek()?.is_end_of_statement() {
            return Err(ParseError::MissingExpression.into());
        }
        self.parse_sum()
    }

    /// Sum level: `term { (+ | - | '|' | &) term }`, folded left to right.
    fn parse_sum(&mut self) -> Result<Matrix, Error> {
        let mut result = self.parse_product()?;
        while let Some(op) = self.lexer.peek()?.delimiter().and_then(BinaryOperator::sum_level) {
            self.lexer.next_token()?;
            let right = self.parse_product()?;
            result = op.apply(&result, &right)?;
        }
        Ok(result)
    }

    /// Product level: `factor { (* | ^) factor }`, folded left to right.
    fn parse_product(&mut self) -> Result<Matrix, Error> {
        let mut result = self.parse_unary()?;
        while let Some(op) = self.lexer.peek()?.delimiter().and_then(BinaryOperator::product_level) {
            self.lexer.next_token()?;
            let right = self.parse_unary()?;
            result = op.apply(&result, &right)?;
        }
        Ok(result)
    }

    /// Unary level: an optional `` ` `` or `~`, applied once the operand
    /// has been evaluated.
    fn parse_unary(&mut self) -> Result<Matrix, Error> {
        let Some(op) = self.lexer.peek()?.delimiter().and_then(UnaryOperator::from_delimiter) else {
            return self.parse_function();
        };
        self.lexer.next_token()?;
        let operand = self.parse_unary()?;
        Ok(op.apply(&operand))
    }

    /// Function level: a function call or a parenthesized expression.
    fn parse_function(&mut self) -> Result<Matrix, Error> {
        let TokenKind::Function(function) = self.lexer.peek()?.kind else {
            return self.parse_parenthesized();
        };
        self.lexer.next_token()?;
        self.eval_function(function)
    }

    /// Parenthesization level: `( expr )` or a primitive.
    ///
    /// # Errors
    /// Returns `ParseError::ExpectedClosingParen` if the group is not closed.
    pub(crate) fn parse_parenthesized(&mut self) -> Result<Matrix, Error> {
        if !self.lexer.peek()?.is(Delimiter::LParen) {
            return self.parse_primitive();
        }
        self.lexer.next_token()?;
        let value = self.parse_sum()?;
        let close = self.lexer.next_token()?;
        if !close.is(Delimiter::RParen) {
            return Err(ParseError::ExpectedClosingParen { found: close.describe() }.into());
        }
        Ok(value)
    }

    /// Primitive: a bound variable, or a number scaling the sum that
    /// follows it (`3 X + Y` is `3 * (X + Y)`).
    fn parse_primitive(&mut self) -> Result<Matrix, Error> {
        let token = self.lexer.next_token()?;
        match token.kind {
            TokenKind::Variable => {
                let id = VariableId::parse(&token.lexeme)?;
                Ok(self.variables.bound(id)?.clone())
            },
            TokenKind::Number => {
                let factor = parse_scalar(&token.lexeme)?;
                let operand = self.parse_sum()?;
                Ok(transform::scale(&operand, factor))
            },
            _ if token.is_end_of_statement() => Err(ParseError::MissingExpression.into()),
            _ => Err(ParseError::UnexpectedToken { token: token.describe() }.into()),
        }
    }
}
