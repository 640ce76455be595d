/// Binary operator evaluation logic.
///
/// Maps the sum-level and product-level delimiters to kernel routines.
pub mod binary;

/// Conditions of `if` and `while`.
///
/// Parses `<expr> <op> <expr>` and applies the matrix partial order.
pub mod condition;

/// Core recursive-descent evaluation.
///
/// Contains the grammar levels from expression down to primitive, each
/// consuming tokens from the lexer and returning a fresh matrix.
pub mod core;

/// Function evaluation.
///
/// Holds the table of single-operand matrix functions and the two
/// constructors `matint(n, m)` and `matzero(n, m)`.
pub mod function;

/// Unary operator evaluation logic.
///
/// Implements transpose and Boolean complement.
pub mod unary;
