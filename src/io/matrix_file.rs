use std::{
    fs::File,
    io::{self, BufRead, BufReader},
};

use crate::{error::RuntimeError, interpreter::value::matrix::Matrix, io::is_console};

/// Reads a `rows x cols` matrix from a line-oriented text source.
///
/// Blank lines are skipped. Each remaining line supplies one row from its
/// first `cols` whitespace-separated fields; anything after them is ignored,
/// so a trailing label does not disturb the numbers. Reading stops once
/// `rows` rows have been read.
///
/// # Errors
/// - `RuntimeError::MalformedData` if a line has fewer than `cols` fields or
///   one of them is not a number.
/// - `RuntimeError::ShortFile` if the source ends before `rows` rows.
/// - `RuntimeError::Io` if the source cannot be read.
///
/// # Example
/// ```
/// use calmat::io::matrix_file::read_matrix;
///
/// let text = "1 2 first\n\n3 4 second\n";
/// let m = read_matrix(text.as_bytes(), 2, 2, "inline").unwrap();
/// assert_eq!(m.data(), &[1.0, 2.0, 3.0, 4.0]);
/// assert!(read_matrix("1 2\n".as_bytes(), 2, 2, "inline").is_err());
/// ```
pub fn read_matrix(reader: impl BufRead, rows: usize, cols: usize, path: &str) -> Result<Matrix, RuntimeError> {
    let mut data = Vec::with_capacity(rows * cols);
    let mut found = 0;

    for (number, line) in reader.lines().enumerate() {
        if found == rows {
            break;
        }
        let line = line.map_err(|e| RuntimeError::io(path, e))?;
        let fields: Vec<&str> = line.split_whitespace().take(cols).collect();
        if fields.is_empty() {
            continue;
        }
        if fields.len() < cols {
            return Err(RuntimeError::MalformedData { path:    path.to_string(),
                                                     line:    number + 1,
                                                     details: format!("expected {cols} values, found {}", fields.len()), });
        }
        for field in fields {
            let value = field.parse::<f64>()
                             .map_err(|_| RuntimeError::MalformedData { path:    path.to_string(),
                                                                        line:    number + 1,
                                                                        details: format!("'{field}' is not a number"), })?;
            data.push(value);
        }
        found += 1;
    }

    if found < rows {
        return Err(RuntimeError::ShortFile { path: path.to_string(),
                                             expected: rows,
                                             found });
    }
    Matrix::new(rows, cols, data)
}

/// Loads a matrix from a file, or from standard input for `con:`.
///
/// # Errors
/// Returns `RuntimeError::Io` if the file cannot be opened, plus every error
/// of [`read_matrix`].
pub fn load_matrix(path: &str, rows: usize, cols: usize) -> Result<Matrix, RuntimeError> {
    let matrix = if is_console(path) {
        read_matrix(io::stdin().lock(), rows, cols, path)?
    } else {
        let file = File::open(path).map_err(|e| RuntimeError::io(path, e))?;
        read_matrix(BufReader::new(file), rows, cols, path)?
    };
    log::info!("loaded {rows}x{cols} matrix from {path}");
    Ok(matrix)
}
