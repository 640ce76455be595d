use crate::{interpreter::value::matrix::Matrix, util::num::count_to_f64};

/// Centers every column on its mean and divides it by its population
/// standard deviation.
///
/// A constant column has zero spread; its entries become NaN.
///
/// # Example
/// ```
/// use calmat::{interpreter::value::matrix::Matrix, kernel::profile::cent_red};
///
/// let a = Matrix::from_rows(&[vec![1.0], vec![3.0]]).unwrap();
/// assert_eq!(cent_red(&a).data(), &[-1.0, 1.0]);
/// ```
#[must_use]
pub fn cent_red(m: &Matrix) -> Matrix {
    let n = count_to_f64(m.rows());
    let means: Vec<f64> = m.column_sums().iter().map(|s| s / n).collect();
    let mut spread = vec![0.0; m.cols()];
    for row in m.rows_iter() {
        for ((v, x), mean) in spread.iter_mut().zip(row).zip(&means) {
            *v += (x - mean) * (x - mean) / n;
        }
    }
    let deviations: Vec<f64> = spread.into_iter().map(f64::sqrt).collect();
    Matrix::from_fn(m.rows(), m.cols(), |i, j| (m[(i, j)] - means[j]) / deviations[j])
}

/// Divides every element by its column sum, turning each column into a
/// distribution.
///
/// # Example
/// ```
/// use calmat::{interpreter::value::matrix::Matrix, kernel::profile::cprofil};
///
/// let a = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 2.0]]).unwrap();
/// assert_eq!(cprofil(&a).data(), &[0.25, 0.5, 0.75, 0.5]);
/// ```
#[must_use]
pub fn cprofil(m: &Matrix) -> Matrix {
    let sums = m.column_sums();
    Matrix::from_fn(m.rows(), m.cols(), |i, j| m[(i, j)] / sums[j])
}

/// Chi-square similarity between the columns of a contingency table.
///
/// With row sums `sl` and column sums `sc`, entry `(j, k)` of the
/// `cols x cols` result is `sum_i x[i,j] * x[i,k] / (sl[i] * sqrt(sc[j] * sc[k]))`.
/// Its eigendecomposition is the starting point of correspondence analysis.
#[must_use]
pub fn chi_deux(m: &Matrix) -> Matrix {
    let row_sums = m.row_sums();
    let col_sums = m.column_sums();
    Matrix::from_fn(m.cols(), m.cols(), |j, k| {
        let scale = (col_sums[j] * col_sums[k]).sqrt();
        m.rows_iter()
         .zip(&row_sums)
         .map(|(row, sl)| row[j] * row[k] / (sl * scale))
         .sum()
    })
}

/// Torgerson double-centering of a distance table:
/// `r[i,j] = -1/2 * (x[i,j] - rowmean[i] - colmean[j] + grandmean)`.
///
/// # Example
/// ```
/// use calmat::{interpreter::value::matrix::Matrix, kernel::profile::dist_fact};
///
/// let d = Matrix::from_rows(&[vec![0.0, 4.0], vec![4.0, 0.0]]).unwrap();
/// assert_eq!(dist_fact(&d).data(), &[1.0, -1.0, -1.0, 1.0]);
/// ```
#[must_use]
pub fn dist_fact(m: &Matrix) -> Matrix {
    let rows = count_to_f64(m.rows());
    let cols = count_to_f64(m.cols());
    let row_means: Vec<f64> = m.row_sums().iter().map(|s| s / cols).collect();
    let col_means: Vec<f64> = m.column_sums().iter().map(|s| s / rows).collect();
    let grand_mean = row_means.iter().sum::<f64>() / rows;
    Matrix::from_fn(m.rows(), m.cols(), |i, j| {
        -0.5 * (m[(i, j)] - (row_means[i] + col_means[j]) + grand_mean)
    })
}
