/// The evaluator module computes the value of expressions.
///
/// The evaluator is a recursive-descent parser that consumes tokens directly
/// from the lexer and produces a matrix at every grammar level. There is no
/// syntax tree: expressions are evaluated while they are read.
///
/// # Responsibilities
/// - Implements the precedence levels sum, product, unary, function,
///   parenthesization and primitive.
/// - Dispatches operators and functions to the numeric kernel.
/// - Evaluates the comparisons of `if` and `while`.
pub mod evaluator;
/// The executor module runs a program statement by statement.
///
/// # Responsibilities
/// - Owns the interpreter state (`Context`).
/// - Dispatches assignments and commands.
/// - Implements `goto`, `if` and `while` by moving the lexer cursor.
/// - Turns the first error into a diagnostic with its line.
pub mod executor;
/// The label index built before execution.
pub mod labels;
/// The lexer module tokenizes program text on demand.
///
/// The lexer reads the raw program text and produces one classified token at
/// a time, with one token of lookahead. It owns the cursor, so `goto` and
/// loops work by repositioning it.
///
/// # Responsibilities
/// - Classifies delimiters, labels, quotes, numbers, commands, functions and
///   variables.
/// - Substitutes invocation parameters for `%0`..`%9`.
/// - Tracks line numbers for diagnostics.
pub mod lexer;
/// The value module defines the runtime data of the interpreter.
///
/// # Responsibilities
/// - Defines `Matrix`, the only value type.
/// - Defines the 26 variable slots.
pub mod value;
