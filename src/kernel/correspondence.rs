use crate::{error::RuntimeError, interpreter::value::matrix::Matrix};

/// Principal coordinates and contributions of the active points.
///
/// Every matrix has one row per point, column points first then row
/// points, and one column per non-trivial axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// Principal coordinates.
    pub coordinates: Matrix,
    /// Share of each axis' inertia contributed by each point.
    pub absolute:    Matrix,
    /// Squared cosine between each point and each axis.
    pub relative:    Matrix,
}

/// Explained inertia of one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisInertia {
    /// Axis number, starting at 1.
    pub axis:       usize,
    /// Share of the total inertia.
    pub proportion: f64,
    /// Share of the total inertia up to and including this axis.
    pub cumulative: f64,
}

/// Eigenvalues are read from column 0 of `values`; axis 0 is the trivial
/// one and is skipped.
fn axis_values(values: &Matrix) -> Result<Vec<f64>, RuntimeError> {
    if values.rows() < 2 {
        return Err(RuntimeError::ShapeError { op:      "compocor",
                                              details: format!("need at least 2 eigenvalues, got {}", values.rows()), });
    }
    Ok(values.rows_iter().skip(1).map(|row| row[0]).collect())
}

/// Inverse square root of an eigenvalue, zero for a null axis.
fn inverse_root(lambda: f64) -> f64 {
    if lambda == 0.0 { 0.0 } else { 1.0 / lambda.sqrt() }
}

/// Explained inertia per non-trivial axis.
///
/// # Errors
/// Returns `RuntimeError::ShapeError` if fewer than two eigenvalues are
/// given.
///
/// # Example
/// ```
/// use calmat::{interpreter::value::matrix::Matrix, kernel::correspondence::explained_inertia};
///
/// let values = Matrix::from_rows(&[vec![1.0], vec![0.3], vec![0.1]]).unwrap();
/// let axes = explained_inertia(&values).unwrap();
/// assert_eq!(axes.len(), 2);
/// assert!((axes[0].proportion - 0.75).abs() < 1e-12);
/// assert!((axes[1].cumulative - 1.0).abs() < 1e-12);
/// ```
pub fn explained_inertia(values: &Matrix) -> Result<Vec<AxisInertia>, RuntimeError> {
    let lambdas = axis_values(values)?;
    let total: f64 = lambdas.iter().sum();
    let mut cumulative = 0.0;
    Ok(lambdas.iter()
              .enumerate()
              .map(|(k, &lambda)| {
                  cumulative += lambda;
                  AxisInertia { axis:       k + 1,
                                proportion: lambda / total,
                                cumulative: cumulative / total, }
              })
              .collect())
}

/// Correspondence analysis of a contingency table.
///
/// `table` is `n x m`, `vectors` holds the eigenvectors of
/// [`chi_deux`](crate::kernel::profile::chi_deux)`(table)` as columns
/// (`m x m`) and `values` the matching eigenvalues in column 0.
///
/// With `ss` the grand total, `sl` the row sums and `sc` the column sums:
/// - column point `j` on axis `k`: `sqrt(l_k) * sqrt(ss / sc[j]) * V[j,k]`;
/// - row point `i` on axis `k`: `sum_j (N[i,j] / sl[i]) * Fc[j,k] / sqrt(l_k)`;
/// - absolute contribution: `mass * F^2 / l_k`;
/// - relative contribution: `F^2 / d^2`, `d` being the chi-square distance
///   of the profile to the centroid.
///
/// # Errors
/// Returns `RuntimeError::ShapeError` when the three matrices do not fit
/// together.
pub fn analyse(table: &Matrix, vectors: &Matrix, values: &Matrix) -> Result<Analysis, RuntimeError> {
    let (n, m) = table.dims();
    let lambdas = axis_values(values)?;
    let axes = lambdas.len();
    if vectors.rows() != m || vectors.cols() <= axes {
        return Err(RuntimeError::ShapeError { op:      "compocor",
                                              details: format!("eigenvectors are {}x{}, expected {m} rows and more than {axes} columns",
                                                               vectors.rows(),
                                                               vectors.cols()), });
    }

    let row_sums = table.row_sums();
    let col_sums = table.column_sums();
    let total: f64 = row_sums.iter().sum();

    let columns = Matrix::from_fn(m, axes, |j, k| {
        let lambda = lambdas[k];
        if lambda == 0.0 {
            0.0
        } else {
            lambda.sqrt() * (total / col_sums[j]).sqrt() * vectors[(j, k + 1)]
        }
    });
    let rows = Matrix::from_fn(n, axes, |i, k| {
        let weight = inverse_root(lambdas[k]);
        (0..m).map(|j| weight * (table[(i, j)] / row_sums[i]) * columns[(j, k)])
              .sum()
    });

    let coordinates = Matrix::from_fn(m + n, axes, |p, k| {
        if p < m { columns[(p, k)] } else { rows[(p - m, k)] }
    });

    let absolute = Matrix::from_fn(m + n, axes, |p, k| {
        let mass = (if p < m { col_sums[p] } else { row_sums[p - m] }) / total;
        let lambda = lambdas[k];
        if lambda == 0.0 {
            0.0
        } else {
            mass * coordinates[(p, k)] * coordinates[(p, k)] / lambda
        }
    });

    let column_distances: Vec<f64> = (0..m).map(|j| {
                                               (0..n).map(|i| {
                                                         let gap = table[(i, j)] / col_sums[j] - row_sums[i] / total;
                                                         total / row_sums[i] * gap * gap
                                                     })
                                                     .sum()
                                           })
                                           .collect();
    let row_distances: Vec<f64> = (0..n).map(|i| {
                                            (0..m).map(|j| {
                                                      let gap = table[(i, j)] / row_sums[i] - col_sums[j] / total;
                                                      total / col_sums[j] * gap * gap
                                                  })
                                                  .sum()
                                        })
                                        .collect();
    let relative = Matrix::from_fn(m + n, axes, |p, k| {
        let distance = if p < m { column_distances[p] } else { row_distances[p - m] };
        coordinates[(p, k)] * coordinates[(p, k)] / distance
    });

    Ok(Analysis { coordinates,
                  absolute,
                  relative })
}

/// Projects supplementary rows onto the axes of a previous analysis.
///
/// `rows` is `k x m` over the active columns, `coordinates` the coordinate
/// matrix written by [`analyse`], whose first `m` rows are the column
/// points.
///
/// # Errors
/// Returns `RuntimeError::ShapeError` when the matrices do not fit together.
pub fn supplementary_rows(rows: &Matrix, coordinates: &Matrix, values: &Matrix) -> Result<Matrix, RuntimeError> {
    let lambdas = axis_values(values)?;
    let axes = lambdas.len();
    let m = rows.cols();
    if coordinates.rows() < m || coordinates.cols() < axes {
        return Err(RuntimeError::ShapeError { op:      "composupp",
                                              details: format!("coordinates are {}x{}, expected at least {m}x{axes}",
                                                               coordinates.rows(),
                                                               coordinates.cols()), });
    }
    let sums = rows.row_sums();
    Ok(Matrix::from_fn(rows.rows(), axes, |i, k| {
        let weight = inverse_root(lambdas[k]);
        (0..m).map(|j| weight * (rows[(i, j)] / sums[i]) * coordinates[(j, k)])
              .sum()
    }))
}

/// Projects supplementary columns onto the axes of a previous analysis.
///
/// `columns` is `n x k` over the active rows, `coordinates` the coordinate
/// matrix written by [`analyse`], whose last `n` rows are the row points.
///
/// # Errors
/// Returns `RuntimeError::ShapeError` when the matrices do not fit together.
pub fn supplementary_columns(columns: &Matrix, coordinates: &Matrix, values: &Matrix) -> Result<Matrix, RuntimeError> {
    let lambdas = axis_values(values)?;
    let axes = lambdas.len();
    let n = columns.rows();
    if coordinates.rows() < n || coordinates.cols() < axes {
        return Err(RuntimeError::ShapeError { op:      "compocsupp",
                                              details: format!("coordinates are {}x{}, expected at least {n}x{axes}",
                                                               coordinates.rows(),
                                                               coordinates.cols()), });
    }
    let offset = coordinates.rows() - n;
    let sums = columns.column_sums();
    Ok(Matrix::from_fn(columns.cols(), axes, |j, k| {
        let weight = inverse_root(lambdas[k]);
        (0..n).map(|i| weight * (columns[(i, j)] / sums[j]) * coordinates[(offset + i, k)])
              .sum()
    }))
}
