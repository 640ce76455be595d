/// Numeric conversion helpers.
///
/// This module provides checked conversions between script literals, counts
/// and floating-point values, plus the element budget check shared by every
/// routine that creates a matrix from user-supplied dimensions.
pub mod num;
