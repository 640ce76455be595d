use ordered_float::OrderedFloat;

use crate::{config::Limits, error::RuntimeError, interpreter::value::matrix::Matrix};

/// Eigenvalues and eigenvectors of a symmetric matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Eigen {
    /// Eigenvalues in descending order.
    pub values:  Vec<f64>,
    /// Eigenvectors as columns, column `k` belonging to `values[k]`.
    pub vectors: Matrix,
}

/// Diagonalises a symmetric matrix.
///
/// Householder reduction to tridiagonal form accumulates the orthogonal
/// transform, then implicit-shift QL iteration drives the off-diagonal to
/// zero. An off-diagonal element is negligible once it falls below
/// `limits.eigen_tolerance` times the sum of the magnitudes of its two
/// neighbouring diagonal elements.
/// Eigenvalues are sorted in descending order and the eigenvector columns
/// permuted to match.
///
/// # Errors
/// - `RuntimeError::NotSquare` if `m` is not square.
/// - `RuntimeError::NoConvergence` if an eigenvalue needs more than
///   `limits.max_eigen_iterations` QL iterations.
///
/// # Example
/// ```
/// use calmat::{config::Limits, interpreter::value::matrix::Matrix, kernel::eigen::decompose};
///
/// let a = Matrix::from_rows(&[vec![2.0, 1.0], vec![1.0, 2.0]]).unwrap();
/// let eigen = decompose(&a, &Limits::default()).unwrap();
/// assert!((eigen.values[0] - 3.0).abs() < 1e-9);
/// assert!((eigen.values[1] - 1.0).abs() < 1e-9);
/// ```
pub fn decompose(m: &Matrix, limits: &Limits) -> Result<Eigen, RuntimeError> {
    if !m.is_square() {
        return Err(RuntimeError::NotSquare { op:   "tridiag",
                                             rows: m.rows(),
                                             cols: m.cols(), });
    }
    let n = m.rows();
    let mut v = m.clone();
    let mut d = vec![0.0; n];
    let mut e = vec![0.0; n];

    tridiagonalize(&mut v, &mut d, &mut e);
    diagonalize(&mut v, &mut d, &mut e, limits)?;

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by_key(|&k| std::cmp::Reverse(OrderedFloat(d[k])));

    Ok(Eigen { values:  order.iter().map(|&k| d[k]).collect(),
               vectors: Matrix::from_fn(n, n, |i, j| v[(i, order[j])]), })
}

/// Householder reduction of `v` to tridiagonal form.
///
/// On return `d` holds the diagonal, `e[1..]` the subdiagonal and `v` the
/// accumulated orthogonal transform.
#[allow(clippy::many_single_char_names)]
fn tridiagonalize(v: &mut Matrix, d: &mut [f64], e: &mut [f64]) {
    let n = d.len();
    for j in 0..n {
        d[j] = v[(n - 1, j)];
    }

    for i in (1..n).rev() {
        let scale: f64 = d[..i].iter().map(|x| x.abs()).sum();
        let mut h = 0.0;

        if scale == 0.0 {
            e[i] = d[i - 1];
            for j in 0..i {
                d[j] = v[(i - 1, j)];
                v[(i, j)] = 0.0;
                v[(j, i)] = 0.0;
            }
        } else {
            for x in &mut d[..i] {
                *x /= scale;
                h += *x * *x;
            }
            let mut f = d[i - 1];
            let mut g = if f > 0.0 { -h.sqrt() } else { h.sqrt() };
            e[i] = scale * g;
            h -= f * g;
            d[i - 1] = f - g;
            e[..i].fill(0.0);

            for j in 0..i {
                f = d[j];
                v[(j, i)] = f;
                g = e[j] + v[(j, j)] * f;
                for k in j + 1..i {
                    g += v[(k, j)] * d[k];
                    e[k] += v[(k, j)] * f;
                }
                e[j] = g;
            }

            f = 0.0;
            for j in 0..i {
                e[j] /= h;
                f += e[j] * d[j];
            }
            let hh = f / (h + h);
            for j in 0..i {
                e[j] -= hh * d[j];
            }
            for j in 0..i {
                f = d[j];
                g = e[j];
                for k in j..i {
                    v[(k, j)] -= f * e[k] + g * d[k];
                }
                d[j] = v[(i - 1, j)];
                v[(i, j)] = 0.0;
            }
        }
        d[i] = h;
    }

    // Accumulate the transformations.
    for i in 0..n.saturating_sub(1) {
        v[(n - 1, i)] = v[(i, i)];
        v[(i, i)] = 1.0;
        let h = d[i + 1];
        if h != 0.0 {
            for k in 0..=i {
                d[k] = v[(k, i + 1)] / h;
            }
            for j in 0..=i {
                let g: f64 = (0..=i).map(|k| v[(k, i + 1)] * v[(k, j)]).sum();
                for k in 0..=i {
                    v[(k, j)] -= g * d[k];
                }
            }
        }
        for k in 0..=i {
            v[(k, i + 1)] = 0.0;
        }
    }
    for j in 0..n {
        d[j] = v[(n - 1, j)];
        v[(n - 1, j)] = 0.0;
    }
    v[(n - 1, n - 1)] = 1.0;
    e[0] = 0.0;
}

/// Whether `e[m]` is zero relative to its neighbours `d[m]` and `d[m + 1]`.
fn negligible(d: &[f64], e: &[f64], m: usize, relative: f64) -> bool {
    e[m].abs() <= relative * (d[m].abs() + d[m + 1].abs())
}

/// Implicit-shift QL iteration on the tridiagonal form.
///
/// The subdiagonal entry `e[m]` counts as zero once it is at most
/// `tolerance * (|d[m]| + |d[m + 1]|)`. `d` always holds unshifted values,
/// so small eigenvalues keep their precision next to large ones.
#[allow(clippy::many_single_char_names)]
fn diagonalize(v: &mut Matrix, d: &mut [f64], e: &mut [f64], limits: &Limits) -> Result<(), RuntimeError> {
    let n = d.len();
    for i in 1..n {
        e[i - 1] = e[i];
    }
    e[n - 1] = 0.0;

    let relative = limits.eigen_tolerance.max(f64::EPSILON);

    for l in 0..n {
        let mut iterations = 0;
        loop {
            let mut m = l;
            while m < n - 1 && !negligible(d, e, m, relative) {
                m += 1;
            }
            if m == l {
                break;
            }

            iterations += 1;
            if iterations > limits.max_eigen_iterations {
                return Err(RuntimeError::NoConvergence { index: l,
                                                         iterations: limits.max_eigen_iterations });
            }

            let mut g = (d[l + 1] - d[l]) / (2.0 * e[l]);
            let mut r = g.hypot(1.0);
            g = d[m] - d[l] + e[l] / (g + r.copysign(g));
            let mut s = 1.0;
            let mut c = 1.0;
            let mut p = 0.0;
            let mut deflated = false;

            for i in (l..m).rev() {
                let f = s * e[i];
                let b = c * e[i];
                r = f.hypot(g);
                e[i + 1] = r;
                if r == 0.0 {
                    d[i + 1] -= p;
                    e[m] = 0.0;
                    deflated = true;
                    break;
                }
                s = f / r;
                c = g / r;
                g = d[i + 1] - p;
                r = (d[i] - g) * s + 2.0 * c * b;
                p = s * r;
                d[i + 1] = g + p;
                g = c * r - b;

                for k in 0..n {
                    let h = v[(k, i + 1)];
                    v[(k, i + 1)] = s * v[(k, i)] + c * h;
                    v[(k, i)] = c * v[(k, i)] - s * h;
                }
            }
            if deflated {
                continue;
            }
            d[l] -= p;
            e[l] = g;
            e[m] = 0.0;
        }
        log::debug!("eigenvalue {l}: {iterations} iteration(s)");
    }
    Ok(())
}
