/// Elementwise and product operators.
///
/// Declares `+`, `-`, `|` (union), `&` (intersection), `*` (real product)
/// and `^` (max-min product). Every routine borrows its operands and
/// returns a fresh matrix.
pub mod arith;
/// Correspondence-analysis projections.
///
/// Declares principal coordinates, absolute and relative contributions for
/// active and supplementary points.
pub mod correspondence;
/// Symmetric eigendecomposition.
///
/// Declares Householder tridiagonalisation followed by implicit-shift QL
/// iteration, with eigenvalues sorted in descending order.
pub mod eigen;
/// Cholesky-based inverse of symmetric positive-definite matrices.
pub mod inverse;
/// The partial order used by `if` and `while` conditions.
pub mod order;
/// Statistical normalisations.
///
/// Declares column centering and reduction, column profiles, chi-square
/// distances and distance-to-factor double-centering.
pub mod profile;
/// Transpose, Boolean complement and scalar multiplication.
pub mod transform;
