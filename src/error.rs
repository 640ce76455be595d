/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing and parsing a
/// script: unexpected tokens, missing delimiters, bad variable names, invalid
/// parameter references and malformed literals.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while executing a script:
/// dimension mismatches, unbound variables, resource limits, file failures,
/// numerical breakdown and control-flow faults.
pub mod runtime_error;
/// Top-level script errors.
///
/// Wraps a parse or runtime error together with the line it happened on, as
/// reported once by the executor when a run is aborted.
pub mod script_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use script_error::{Error, ErrorKind, ScriptError};
