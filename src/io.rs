/// Plain-text matrix files.
///
/// Declares the reader and writer used by `load` and `save`: one line per
/// row, whitespace-separated floating-point fields.
pub mod matrix_file;
/// Label files: one opaque label per line.
pub mod label_file;

use std::{fs, path::Path};

use crate::error::RuntimeError;

/// File name that designates the console instead of a file.
pub const CONSOLE: &str = "con:";

/// Whether `name` designates the console.
///
/// # Example
/// ```
/// use calmat::io::is_console;
///
/// assert!(is_console("CON:"));
/// assert!(!is_console("data.txt"));
/// ```
#[must_use]
pub fn is_console(name: &str) -> bool {
    name.eq_ignore_ascii_case(CONSOLE)
}

/// Writes `text` to the file at `path`, replacing its contents.
///
/// # Errors
/// Returns `RuntimeError::Io` if the file cannot be written.
pub fn write_text(path: &str, text: &str) -> Result<(), RuntimeError> {
    fs::write(Path::new(path), text).map_err(|e| RuntimeError::io(path, e))?;
    log::info!("wrote {path}");
    Ok(())
}
