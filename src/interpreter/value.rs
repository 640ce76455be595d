/// The matrix value type.
///
/// Declares `Matrix`, the only runtime data type of the language: a dense,
/// row-major, two-dimensional array of `f64` with at least one row and one
/// column.
pub mod matrix;
/// The symbol table.
///
/// Declares the 26 variable slots `A`..`Z`, each holding at most one matrix.
pub mod variables;
