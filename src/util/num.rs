use crate::error::{ParseError, RuntimeError};

/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Parses a scalar literal such as `3`, `2.5` or `1e3`.
///
/// ## Errors
/// Returns `ParseError::MalformedNumber` if the literal is not a finite
/// floating-point number.
///
/// ## Example
/// ```
/// use calmat::util::num::parse_scalar;
///
/// assert_eq!(parse_scalar("2.5").unwrap(), 2.5);
/// assert!(parse_scalar("2x").is_err());
/// ```
pub fn parse_scalar(literal: &str) -> Result<f64, ParseError> {
    literal.parse::<f64>()
           .ok()
           .filter(|v| v.is_finite())
           .ok_or_else(|| ParseError::MalformedNumber { literal: literal.to_string() })
}

/// Parses a matrix dimension literal: a strictly positive integer.
///
/// ## Errors
/// Returns `ParseError::InvalidDimension` for zero, negative, fractional or
/// non-numeric literals.
///
/// ## Example
/// ```
/// use calmat::util::num::parse_dimension;
///
/// assert_eq!(parse_dimension("12").unwrap(), 12);
/// assert!(parse_dimension("0").is_err());
/// assert!(parse_dimension("1.5").is_err());
/// ```
pub fn parse_dimension(literal: &str) -> Result<usize, ParseError> {
    literal.parse::<usize>()
           .ok()
           .filter(|&n| n > 0)
           .ok_or_else(|| ParseError::InvalidDimension { literal: literal.to_string() })
}

/// Checks a requested shape against the element budget.
///
/// ## Errors
/// Returns `RuntimeError::TooManyElements` if `rows * cols` overflows or is
/// larger than `max`.
///
/// ## Returns
/// The element count `rows * cols`.
pub const fn checked_elements(rows: usize, cols: usize, max: usize) -> Result<usize, RuntimeError> {
    match rows.checked_mul(cols) {
        Some(n) if n <= max => Ok(n),
        _ => Err(RuntimeError::TooManyElements { rows, cols, max }),
    }
}

/// Converts a count to `f64`.
///
/// Counts in this crate are bounded by the element budget, far below
/// [`MAX_SAFE_U64_INT`], so the conversion is exact.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn count_to_f64(value: usize) -> f64 {
    debug_assert!(value as u64 <= MAX_SAFE_U64_INT);
    value as f64
}
