use std::{
    fs::File,
    io::{BufRead, BufReader},
};

use crate::error::RuntimeError;

/// Reads `count` labels, one per line, from the file at `path`.
///
/// Labels are opaque: each line is kept verbatim apart from its line
/// terminator. Lines after the first `count` are ignored.
///
/// # Errors
/// - `RuntimeError::Io` if the file cannot be opened or read.
/// - `RuntimeError::ShortFile` if the file has fewer than `count` lines.
pub fn read_labels(path: &str, count: usize) -> Result<Vec<String>, RuntimeError> {
    let file = File::open(path).map_err(|e| RuntimeError::io(path, e))?;
    let labels = BufReader::new(file).lines()
                                     .take(count)
                                     .map(|line| line.map(|l| l.trim_end_matches('\r').to_string()))
                                     .collect::<Result<Vec<_>, _>>()
                                     .map_err(|e| RuntimeError::io(path, e))?;
    if labels.len() < count {
        return Err(RuntimeError::ShortFile { path:     path.to_string(),
                                             expected: count,
                                             found:    labels.len(), });
    }
    Ok(labels)
}
