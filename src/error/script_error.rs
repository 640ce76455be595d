use thiserror::Error;

use crate::error::{ParseError, RuntimeError};

/// Any error raised while lexing, evaluating or executing a statement.
///
/// Every evaluator and executor routine returns this type and propagates it
/// with `?`; nothing below the top-level run loop recovers from it.
#[derive(Debug, Error)]
pub enum Error {
    /// A syntax error.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// A runtime error.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// The class of a fatal error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unexpected token, missing delimiter, bad variable name.
    Syntax,
    /// Operand shape mismatch.
    Dimension,
    /// Reference to an empty variable slot.
    UnboundVariable,
    /// Element budget exceeded.
    Resource,
    /// File open, read or write failure.
    Io,
    /// Numerical breakdown in an iterative or factorising routine.
    Convergence,
    /// Unknown label, unmatched block, loop stack overflow.
    ControlFlow,
}

impl Error {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(_) => ErrorKind::Syntax,
            Self::Runtime(e) => match e {
                RuntimeError::DimensionMismatch { .. }
                | RuntimeError::NotSquare { .. }
                | RuntimeError::ShapeError { .. }
                | RuntimeError::InvalidShape { .. } => ErrorKind::Dimension,
                RuntimeError::UnboundVariable { .. } => ErrorKind::UnboundVariable,
                RuntimeError::TooManyElements { .. } => ErrorKind::Resource,
                RuntimeError::Io { .. }
                | RuntimeError::ShortFile { .. }
                | RuntimeError::MalformedData { .. } => ErrorKind::Io,
                RuntimeError::NoConvergence { .. } | RuntimeError::NotPositiveDefinite { .. } => {
                    ErrorKind::Convergence
                },
                RuntimeError::UnknownLabel { .. }
                | RuntimeError::TooManyLabels { .. }
                | RuntimeError::IfWithoutEndif
                | RuntimeError::WhileWithoutEndwhile
                | RuntimeError::EndwhileWithoutWhile
                | RuntimeError::LoopStackOverflow { .. } => ErrorKind::ControlFlow,
            },
        }
    }
}

/// A fatal error that aborted a run, with its location in the script.
///
/// Produced once by the executor. `excerpt` holds the text of the offending
/// line so the diagnostic can echo it.
#[derive(Debug, Error)]
#[error("Error on line {line}: {error}\n  -------->>> {line} : {excerpt}")]
pub struct ScriptError {
    /// 1-based line number of the offending statement.
    pub line:    usize,
    /// Text of the offending line, trimmed.
    pub excerpt: String,
    /// The underlying error.
    #[source]
    pub error:   Error,
}

impl ScriptError {
    /// Classifies the underlying error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.error.kind()
    }
}
