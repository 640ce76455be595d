use calmat::{
    config::Limits,
    error::RuntimeError,
    interpreter::value::matrix::Matrix,
    kernel::{
        arith, correspondence, eigen,
        inverse::inv_sym,
        order::{Comparison, compare},
        profile, transform,
    },
};

const EPSILON: f64 = 1e-9;

fn matrix(rows: &[&[f64]]) -> Matrix {
    Matrix::from_rows(&rows.iter().map(|row| row.to_vec()).collect::<Vec<_>>()).unwrap()
}

fn assert_close(left: &Matrix, right: &Matrix, tolerance: f64) {
    assert_eq!(left.dims(), right.dims());
    for (a, b) in left.data().iter().zip(right.data()) {
        assert!((a - b).abs() < tolerance, "{left}\n!=\n{right}");
    }
}

fn symmetric_positive_definite() -> Matrix {
    let b = matrix(&[&[2.0, -1.0, 0.5, 0.0], &[1.0, 3.0, 0.0, 1.0], &[0.0, 1.5, 1.0, -2.0], &[1.0, 0.0, 2.0, 1.0]]);
    let product = arith::matmul(&b, &transform::transpose(&b)).unwrap();
    arith::add(&product, &Matrix::identity(4, 4)).unwrap()
}

fn contingency() -> Matrix {
    matrix(&[&[20.0, 10.0, 5.0], &[10.0, 25.0, 10.0], &[5.0, 10.0, 30.0], &[15.0, 5.0, 10.0]])
}

#[test]
fn addition_and_subtraction_cancel() {
    let a = matrix(&[&[1.5, -2.0, 3.0], &[0.0, 4.25, -1.0]]);
    let b = matrix(&[&[0.5, 7.0, -3.0], &[2.0, 0.25, 8.0]]);
    let sum = arith::add(&a, &b).unwrap();
    assert_close(&arith::sub(&sum, &b).unwrap(), &a, EPSILON);
}

#[test]
fn lattice_operators_are_idempotent() {
    let a = matrix(&[&[1.0, 0.0], &[0.3, -2.0]]);
    assert_eq!(arith::union(&a, &a).unwrap(), a);
    assert_eq!(arith::intersection(&a, &a).unwrap(), a);
}

#[test]
fn elementwise_operators_reject_mismatched_shapes() {
    let a = Matrix::zeros(2, 3);
    let b = Matrix::zeros(3, 2);
    assert!(matches!(arith::add(&a, &b), Err(RuntimeError::DimensionMismatch { .. })));
    assert!(matches!(arith::union(&a, &b), Err(RuntimeError::DimensionMismatch { .. })));
    assert!(arith::matmul(&a, &b).is_ok());
    assert!(arith::matmul(&a, &a).is_err());
}

#[test]
fn boolean_product_of_adjacency_matrices() {
    let path = matrix(&[&[0.0, 1.0, 0.0], &[0.0, 0.0, 1.0], &[0.0, 0.0, 0.0]]);
    let two_steps = arith::bool_product(&path, &path).unwrap();
    assert_eq!(two_steps, matrix(&[&[0.0, 0.0, 1.0], &[0.0, 0.0, 0.0], &[0.0, 0.0, 0.0]]));
}

#[test]
fn transforms_are_involutive() {
    let a = matrix(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
    let t = transform::transpose(&a);
    assert_eq!(t.dims(), (3, 2));
    assert_eq!(t[(2, 1)], 6.0);
    assert_eq!(transform::transpose(&t), a);

    let b = matrix(&[&[1.0, 0.0], &[0.0, 0.0]]);
    assert_eq!(transform::complement(&b), matrix(&[&[0.0, 1.0], &[1.0, 1.0]]));
    assert_eq!(transform::complement(&transform::complement(&b)), b);
}

#[test]
fn comparison_is_a_partial_order() {
    let a = matrix(&[&[1.0, 2.0], &[3.0, 4.0]]);
    let b = matrix(&[&[1.0, 5.0], &[3.0, 4.0]]);
    let c = matrix(&[&[0.0, 9.0], &[3.0, 4.0]]);

    assert!(compare(&a, &a, Comparison::Equal).unwrap());
    assert!(!compare(&a, &a, Comparison::Less).unwrap());
    assert!(!compare(&a, &a, Comparison::Greater).unwrap());
    assert!(compare(&a, &b, Comparison::Less).unwrap());
    assert!(compare(&b, &a, Comparison::Greater).unwrap());
    assert!(!compare(&a, &c, Comparison::Less).unwrap());
    assert!(!compare(&a, &c, Comparison::Greater).unwrap());
    assert!(compare(&a, &Matrix::zeros(1, 1), Comparison::Equal).is_err());
}

#[test]
fn inverse_of_symmetric_positive_definite_matrix() {
    let a = symmetric_positive_definite();
    let inverse = inv_sym(&a).unwrap();
    assert_close(&arith::matmul(&inverse, &a).unwrap(), &Matrix::identity(4, 4), 1e-9);
    assert_close(&inverse, &transform::transpose(&inverse), 1e-12);
}

#[test]
fn inverse_rejects_unsuitable_matrices() {
    assert!(matches!(inv_sym(&Matrix::zeros(2, 3)), Err(RuntimeError::NotSquare { .. })));
    let indefinite = matrix(&[&[1.0, 2.0], &[2.0, 1.0]]);
    assert!(matches!(inv_sym(&indefinite), Err(RuntimeError::NotPositiveDefinite { .. })));
}

#[test]
fn eigendecomposition_properties() {
    let a = symmetric_positive_definite();
    let eigen = eigen::decompose(&a, &Limits::default()).unwrap();

    assert!(eigen.values.windows(2).all(|w| w[0] >= w[1]));
    assert!((eigen.values.iter().sum::<f64>() - a.trace()).abs() < 1e-9);

    for (k, &lambda) in eigen.values.iter().enumerate() {
        let v = Matrix::from_fn(4, 1, |i, _| eigen.vectors[(i, k)]);
        let av = arith::matmul(&a, &v).unwrap();
        assert_close(&av, &transform::scale(&v, lambda), 1e-8);
    }

    let gram = arith::matmul(&transform::transpose(&eigen.vectors), &eigen.vectors).unwrap();
    assert_close(&gram, &Matrix::identity(4, 4), 1e-9);
}

#[test]
fn eigendecomposition_of_small_and_diagonal_matrices() {
    let single = eigen::decompose(&matrix(&[&[-2.5]]), &Limits::default()).unwrap();
    assert_eq!(single.values.len(), 1);
    assert!((single.values[0] + 2.5).abs() < EPSILON);

    let diagonal = matrix(&[&[1.0, 0.0, 0.0], &[0.0, 5.0, 0.0], &[0.0, 0.0, 3.0]]);
    let eigen = eigen::decompose(&diagonal, &Limits::default()).unwrap();
    for (value, expected) in eigen.values.iter().zip([5.0, 3.0, 1.0]) {
        assert!((value - expected).abs() < EPSILON);
    }
    assert!((eigen.vectors[(1, 0)].abs() - 1.0).abs() < EPSILON);
}

#[test]
fn eigendecomposition_resolves_small_eigenvalues_next_to_large_ones() {
    let cases: [(Matrix, &[f64]); 2] =
        [(matrix(&[&[1e10, 0.0, 0.0], &[0.0, 1.0, 0.1], &[0.0, 0.1, 1.0]]), &[1e10, 1.1, 0.9]),
         (matrix(&[&[1e10, 1.0, 0.0, 0.0], &[1.0, 2.0, 0.0, 0.0], &[0.0, 0.0, 1.0, 0.1], &[0.0, 0.0, 0.1, 1.0]]),
          &[1e10, 2.0, 1.1, 0.9])];

    for (a, expected) in &cases {
        let eigen = eigen::decompose(a, &Limits::default()).unwrap();
        for (value, target) in eigen.values.iter().zip(expected.iter()) {
            assert!((value - target).abs() <= 1e-9 * target.abs().max(1.0), "{:?} != {expected:?}", eigen.values);
        }

        let gram = arith::matmul(&transform::transpose(&eigen.vectors), &eigen.vectors).unwrap();
        assert_close(&gram, &Matrix::identity(a.rows(), a.rows()), 1e-9);
    }
}

#[test]
fn eigendecomposition_errors() {
    assert!(matches!(eigen::decompose(&Matrix::zeros(2, 3), &Limits::default()),
                     Err(RuntimeError::NotSquare { .. })));

    let limits = Limits::default().with_max_eigen_iterations(0);
    let a = matrix(&[&[2.0, 1.0], &[1.0, 2.0]]);
    assert!(matches!(eigen::decompose(&a, &limits), Err(RuntimeError::NoConvergence { .. })));
}

#[test]
fn column_profiles_sum_to_one() {
    let p = profile::cprofil(&contingency());
    for sum in p.column_sums() {
        assert!((sum - 1.0).abs() < EPSILON);
    }
}

#[test]
fn standardised_columns_have_zero_mean_and_unit_spread() {
    let z = profile::cent_red(&contingency());
    let n = 4.0;
    for j in 0..z.cols() {
        let column: Vec<f64> = z.rows_iter().map(|row| row[j]).collect();
        let mean = column.iter().sum::<f64>() / n;
        let variance = column.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / n;
        assert!(mean.abs() < EPSILON);
        assert!((variance - 1.0).abs() < EPSILON);
    }
}

#[test]
fn double_centering_has_null_margins() {
    let d = matrix(&[&[0.0, 4.0, 9.0], &[4.0, 0.0, 1.0], &[9.0, 1.0, 0.0]]);
    let r = profile::dist_fact(&d);
    for sum in r.column_sums().into_iter().chain(r.row_sums()) {
        assert!(sum.abs() < EPSILON);
    }
}

#[test]
fn chi_square_similarity_has_unit_trivial_eigenvalue() {
    let c = profile::chi_deux(&contingency());
    assert_close(&c, &transform::transpose(&c), 1e-12);
    let eigen = eigen::decompose(&c, &Limits::default()).unwrap();
    assert!((eigen.values[0] - 1.0).abs() < EPSILON);
    assert!(eigen.values.iter().all(|&v| v > -EPSILON && v <= 1.0 + EPSILON));
}

#[test]
fn correspondence_analysis_contributions() {
    let table = contingency();
    let eigen = eigen::decompose(&profile::chi_deux(&table), &Limits::default()).unwrap();
    let values = Matrix::from_fn(eigen.values.len(), 1, |i, _| eigen.values[i]);
    let analysis = correspondence::analyse(&table, &eigen.vectors, &values).unwrap();

    assert_eq!(analysis.coordinates.dims(), (7, 2));
    for k in 0..2 {
        let columns: f64 = (0..3).map(|p| analysis.absolute[(p, k)]).sum();
        let rows: f64 = (3..7).map(|p| analysis.absolute[(p, k)]).sum();
        assert!((columns - 1.0).abs() < 1e-8);
        assert!((rows - 1.0).abs() < 1e-8);
    }
    for p in 0..7 {
        let quality: f64 = (0..2).map(|k| analysis.relative[(p, k)]).sum();
        assert!((quality - 1.0).abs() < 1e-8);
    }

    let inertia = correspondence::explained_inertia(&values).unwrap();
    assert_eq!(inertia.len(), 2);
    assert!((inertia[1].cumulative - 1.0).abs() < EPSILON);
}

#[test]
fn active_points_project_onto_themselves() {
    let table = contingency();
    let eigen = eigen::decompose(&profile::chi_deux(&table), &Limits::default()).unwrap();
    let values = Matrix::from_fn(eigen.values.len(), 1, |i, _| eigen.values[i]);
    let analysis = correspondence::analyse(&table, &eigen.vectors, &values).unwrap();

    let first_row = Matrix::from_fn(1, 3, |_, j| table[(0, j)]);
    let projected = correspondence::supplementary_rows(&first_row, &analysis.coordinates, &values).unwrap();
    assert_close(&projected, &Matrix::from_fn(1, 2, |_, k| analysis.coordinates[(3, k)]), 1e-8);

    let last_column = Matrix::from_fn(4, 1, |i, _| table[(i, 2)]);
    let projected = correspondence::supplementary_columns(&last_column, &analysis.coordinates, &values).unwrap();
    assert_close(&projected, &Matrix::from_fn(1, 2, |_, k| analysis.coordinates[(2, k)]), 1e-8);
}

#[test]
fn correspondence_analysis_rejects_inconsistent_shapes() {
    let table = contingency();
    let values = matrix(&[&[1.0]]);
    assert!(correspondence::explained_inertia(&values).is_err());
    let values = matrix(&[&[1.0], &[0.2], &[0.1]]);
    assert!(correspondence::analyse(&table, &Matrix::identity(2, 2), &values).is_err());
    assert!(correspondence::supplementary_rows(&Matrix::zeros(1, 9), &Matrix::zeros(7, 2), &values).is_err());
}
