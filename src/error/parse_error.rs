use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during tokenizing or parsing.
pub enum ParseError {
    /// Found an unexpected token while parsing an expression or a command.
    #[error("Unexpected token: '{token}'.")]
    UnexpectedToken {
        /// The lexeme encountered.
        token: String,
    },
    /// An expression was expected but the statement ended.
    #[error("No expression found.")]
    MissingExpression,
    /// A command operand (file name, variable, dimension) is missing.
    #[error("Missing {expected} after '{command}'.")]
    MissingOperand {
        /// The command being parsed.
        command:  &'static str,
        /// What was expected.
        expected: &'static str,
    },
    /// A variable name is not a single letter `A`..`Z`.
    #[error("Invalid variable name '{name}'.")]
    BadVariableName {
        /// The offending name.
        name: String,
    },
    /// A `%` was not followed by a digit.
    #[error("Invalid parameter reference '%{found}'.")]
    InvalidParameter {
        /// The text following the `%`.
        found: String,
    },
    /// A closing parenthesis `)` was expected but not found.
    #[error("Expected closing parenthesis ')' but found '{found}'.")]
    ExpectedClosingParen {
        /// The lexeme found instead.
        found: String,
    },
    /// A specific delimiter was expected.
    #[error("Expected '{expected}' but found '{found}'.")]
    ExpectedDelimiter {
        /// The delimiter that was expected.
        expected: char,
        /// The lexeme found instead.
        found:    String,
    },
    /// A condition did not use one of `=`, `<`, `>`.
    #[error("Invalid comparison operator '{found}', expected '=', '<' or '>'.")]
    InvalidComparison {
        /// The lexeme found instead.
        found: String,
    },
    /// A numeric literal could not be parsed.
    #[error("Malformed number '{literal}'.")]
    MalformedNumber {
        /// The literal text.
        literal: String,
    },
    /// A dimension literal is not a positive integer.
    #[error("Invalid dimension '{literal}', expected a positive integer.")]
    InvalidDimension {
        /// The literal text.
        literal: String,
    },
    /// Extra tokens were found after a complete statement.
    #[error("Extra tokens after statement: '{token}'.")]
    UnexpectedTrailingTokens {
        /// The first extra token.
        token: String,
    },
}
