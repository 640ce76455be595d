use std::io::Write;

use crate::{
    error::{Error, ParseError, RuntimeError},
    interpreter::{
        executor::core::Context,
        lexer::{Delimiter, Function, TokenKind},
        value::matrix::Matrix,
    },
    kernel::{inverse, profile},
    util::num::{checked_elements, parse_dimension},
};

/// A function taking one matrix operand.
type MatrixFn = fn(&Matrix) -> Result<Matrix, RuntimeError>;

/// Defines the single-operand functions by generating a lookup table.
///
/// Each entry maps a [`Function`] variant to the kernel routine that
/// implements it.
macro_rules! matrix_functions {
    (
        $(
            $function:ident => $func:expr
        ),* $(,)?
    ) => {
        struct FunctionDef {
            function: Function,
            func:     MatrixFn,
        }
        static FUNCTION_TABLE: &[FunctionDef] = &[
            $(
                FunctionDef { function: Function::$function, func: $func },
            )*
        ];
    };
}

matrix_functions! {
    ChiDeux  => |m| Ok(profile::chi_deux(m)),
    DistFact => |m| Ok(profile::dist_fact(m)),
    InvSym   => inverse::inv_sym,
    CentRed  => |m| Ok(profile::cent_red(m)),
    CProfil  => |m| Ok(profile::cprofil(m)),
}

impl<W: Write> Context<W> {
    /// Evaluates a call to `function`, whose name has been consumed.
    ///
    /// `matint` and `matzero` take two dimension literals in parentheses.
    /// Every other function takes one operand parsed at the
    /// parenthesization level, so both `cent_red(X)` and `cent_red X` work.
    pub(crate) fn eval_function(&mut self, function: Function) -> Result<Matrix, Error> {
        match function {
            Function::MatInt | Function::MatZero => {
                let (rows, cols) = self.parse_shape()?;
                checked_elements(rows, cols, self.limits.max_elements)?;
                log::debug!("{}({rows}, {cols})", function.keyword());
                Ok(if function == Function::MatInt {
                       Matrix::identity(rows, cols)
                   } else {
                       Matrix::zeros(rows, cols)
                   })
            },
            _ => {
                let operand = self.parse_parenthesized()?;
                let def = FUNCTION_TABLE.iter()
                                        .find(|def| def.function == function)
                                        .ok_or_else(|| ParseError::UnexpectedToken { token: function.keyword().to_string() })?;
                Ok((def.func)(&operand)?)
            },
        }
    }

    /// Parses `( rows , cols )`.
    fn parse_shape(&mut self) -> Result<(usize, usize), Error> {
        self.expect_delimiter(Delimiter::LParen, '(')?;
        let rows = self.parse_dimension()?;
        self.expect_delimiter(Delimiter::Comma, ',')?;
        let cols = self.parse_dimension()?;
        self.expect_delimiter(Delimiter::RParen, ')')?;
        Ok((rows, cols))
    }

    fn parse_dimension(&mut self) -> Result<usize, Error> {
        let token = self.lexer.next_token()?;
        if token.kind != TokenKind::Number {
            return Err(ParseError::InvalidDimension { literal: token.describe() }.into());
        }
        Ok(parse_dimension(&token.lexeme)?)
    }

    /// Consumes the next token, which must be `delimiter`.
    pub(crate) fn expect_delimiter(&mut self, delimiter: Delimiter, symbol: char) -> Result<(), Error> {
        let token = self.lexer.next_token()?;
        if token.is(delimiter) {
            Ok(())
        } else {
            Err(ParseError::ExpectedDelimiter { expected: symbol,
                                                found:    token.describe(), }.into())
        }
    }
}
