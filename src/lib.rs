//! # calmat
//!
//! calmat is an interpreter for a small matrix computation language written
//! in Rust. Scripts manipulate 26 matrix variables with elementwise, Boolean
//! and product operators, branch with labels, `if` and `while`, and run
//! statistical routines such as eigendecomposition and correspondence
//! analysis.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    config::Limits,
    error::ScriptError,
    interpreter::executor::core::{Context, Outcome},
};

/// Resource limits and numeric settings.
///
/// This module declares `Limits`, the explicit configuration of a run: the
/// element budget, the label and loop capacities, and the convergence
/// settings of the eigenvalue solver.
pub mod config;
/// Provides unified error types for parsing and execution.
///
/// This module defines all errors that can be raised while lexing,
/// evaluating or executing a script, and the diagnostic that reports the
/// first of them together with its line.
///
/// # Responsibilities
/// - Defines error enums for syntax and runtime failures.
/// - Classifies every error into the taxonomy exposed by `ErrorKind`.
/// - Attaches the line number and text of the failing statement.
pub mod error;
/// Orchestrates the execution of scripts.
///
/// This module ties together the lexer, the label index, the evaluator, the
/// executor and the value types.
///
/// # Responsibilities
/// - Coordinates lexing, evaluation and control flow.
/// - Owns the interpreter state of a run.
/// - Manages the flow of data and errors between the components.
pub mod interpreter;
/// Text file collaborators.
///
/// This module reads and writes matrices and label lists as plain text, and
/// recognises the `con:` console sentinel.
pub mod io;
/// The numeric kernel.
///
/// Pure functions over matrices: arithmetic and Boolean operators,
/// transforms, the partial order, statistical normalisations, the symmetric
/// inverse, eigendecomposition and correspondence analysis.
pub mod kernel;
/// General utilities for safe numeric conversion and helpers.
///
/// # Responsibilities
/// - Parse scalar and dimension literals.
/// - Check requested shapes against the element budget.
pub mod util;

/// Runs a script against standard output with default limits.
///
/// `params[i]` replaces `%i` in the program text.
///
/// # Errors
/// Returns the first error of the run, with its line.
///
/// # Examples
/// ```
/// use calmat::run_script;
///
/// let source = "X = matint(2, 2)\nY = 3 X\n";
/// assert!(run_script(source, &[]).is_ok());
///
/// // `Z` was never assigned.
/// let source = "Y = Z + Z\n";
/// assert!(run_script(source, &[]).is_err());
/// ```
pub fn run_script(source: &str, params: &[String]) -> Result<Outcome, ScriptError> {
    run_with_limits(source, params, Limits::default())
}

/// Runs a script against standard output with the given limits.
///
/// # Errors
/// Returns the first error of the run, with its line.
pub fn run_with_limits(source: &str, params: &[String], limits: Limits) -> Result<Outcome, ScriptError> {
    Context::new(source, params.to_vec(), std::io::stdout().lock()).with_limits(limits)
                                                                    .run()
}
