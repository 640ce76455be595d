/// Matrix analysis commands.
///
/// Implements `tridiag`, `compocor`, `composupp` and `compocsupp`, which
/// call into the numeric kernel and write their results to files.
pub mod analysis;

/// Data commands.
///
/// Implements `load`, `save`, `print` and `rem`.
pub mod commands;

/// Branching and looping.
///
/// Implements `goto`, `if`/`endif` and `while`/`endwhile` by repositioning
/// the lexer cursor, plus the bounded stack of loop markers.
pub mod control_flow;

/// The interpreter state and the statement loop.
///
/// Declares `Context`, which owns the program text, variables, labels, loop
/// markers, limits and output sink, and drives execution one statement at a
/// time.
pub mod core;
