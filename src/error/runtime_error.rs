use thiserror::Error;

#[derive(Debug, Error)]
/// Represents all errors that can occur while executing a script.
pub enum RuntimeError {
    /// Operand shapes are incompatible for the operation.
    #[error("Dimension mismatch for '{op}': {left_rows}x{left_cols} and {right_rows}x{right_cols}.")]
    DimensionMismatch {
        /// The operation being applied.
        op:         &'static str,
        /// Rows of the left operand.
        left_rows:  usize,
        /// Columns of the left operand.
        left_cols:  usize,
        /// Rows of the right operand.
        right_rows: usize,
        /// Columns of the right operand.
        right_cols: usize,
    },
    /// A routine that only accepts square matrices received another shape.
    #[error("'{op}' requires a square matrix, got {rows}x{cols}.")]
    NotSquare {
        /// The routine.
        op:   &'static str,
        /// Rows of the operand.
        rows: usize,
        /// Columns of the operand.
        cols: usize,
    },
    /// A matrix does not have the shape a routine expects.
    #[error("'{op}': {details}.")]
    ShapeError {
        /// The routine.
        op:      &'static str,
        /// What was wrong.
        details: String,
    },
    /// Tried to read a variable that holds no matrix.
    #[error("Variable '{name}' is not initialised.")]
    UnboundVariable {
        /// The variable letter.
        name: char,
    },
    /// A matrix would exceed the configured element budget.
    #[error("Too many elements: {rows}x{cols} exceeds the maximum of {max}.")]
    TooManyElements {
        /// Requested rows.
        rows: usize,
        /// Requested columns.
        cols: usize,
        /// Configured maximum element count.
        max:  usize,
    },
    /// A matrix buffer does not match its declared shape.
    #[error("Invalid matrix shape {rows}x{cols} for {len} elements.")]
    InvalidShape {
        /// Declared rows.
        rows: usize,
        /// Declared columns.
        cols: usize,
        /// Actual buffer length.
        len:  usize,
    },
    /// A file could not be opened, read or written.
    #[error("I/O error on '{path}': {source}")]
    Io {
        /// The file path.
        path:   String,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },
    /// A file ended before the requested number of rows was read.
    #[error("File '{path}' is too short: expected {expected} lines, found {found}.")]
    ShortFile {
        /// The file path.
        path:     String,
        /// Lines expected.
        expected: usize,
        /// Lines found.
        found:    usize,
    },
    /// A line of a matrix file could not be read as numbers.
    #[error("Read error in '{path}' at line {line}: {details}.")]
    MalformedData {
        /// The file path.
        path:    String,
        /// The 1-based line in the data file.
        line:    usize,
        /// What was wrong.
        details: String,
    },
    /// The QL iteration did not converge within its cap.
    #[error("Eigenvalue {index} did not converge after {iterations} iterations.")]
    NoConvergence {
        /// Index of the eigenvalue being isolated.
        index:      usize,
        /// The iteration cap that was hit.
        iterations: usize,
    },
    /// The Cholesky factorisation met a non-positive pivot.
    #[error("Matrix is not positive definite (pivot {pivot} is {value}).")]
    NotPositiveDefinite {
        /// Index of the failing pivot.
        pivot: usize,
        /// The pivot value before the square root.
        value: f64,
    },
    /// `goto` named a label that does not exist.
    #[error("Unknown label '{name}'.")]
    UnknownLabel {
        /// The label name.
        name: String,
    },
    /// More labels than the label index can hold.
    #[error("Too many labels, the maximum is {max}.")]
    TooManyLabels {
        /// Configured capacity.
        max: usize,
    },
    /// An `if` block ran into the end of the script.
    #[error("IF without ENDIF.")]
    IfWithoutEndif,
    /// A `while` block ran into the end of the script.
    #[error("WHILE without ENDWHILE.")]
    WhileWithoutEndwhile,
    /// An `endwhile` was reached with no loop marker on the stack.
    #[error("ENDWHILE without WHILE.")]
    EndwhileWithoutWhile,
    /// `while` nesting exceeded the loop-marker stack.
    #[error("WHILE nesting too deep, the maximum is {max}.")]
    LoopStackOverflow {
        /// Configured capacity.
        max: usize,
    },
}

impl RuntimeError {
    /// Builds a [`RuntimeError::DimensionMismatch`] from two shapes.
    #[must_use]
    pub const fn mismatch(op: &'static str, left: (usize, usize), right: (usize, usize)) -> Self {
        Self::DimensionMismatch { op,
                                  left_rows: left.0,
                                  left_cols: left.1,
                                  right_rows: right.0,
                                  right_cols: right.1 }
    }

    /// Wraps an I/O error with the path it happened on.
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(),
                   source }
    }
}
