//! tests/lll_properties.rs
//! Reduction keeps the lattice, is (near) idempotent and leaves a basis that
//! satisfies both LLL conditions.

use lattice_vis::core::lattice::{coefficients, orthogonalize, reduce, Basis, LllReducer, DEFAULT_DELTA};
use lattice_vis::core::numerics::linear_algebra::{determinant, dot};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn full_rank_basis(n: usize, seed: u64) -> Basis {
    let mut rng = StdRng::seed_from_u64(seed);
    loop {
        let b = Basis::random(n, n, 40, &mut rng).unwrap();
        if determinant(b.rows()).unwrap().abs() > 0.5 {
            return b;
        }
    }
}

/// Coefficients of `row` in the basis `b`, by Cramer's rule.
fn coordinates(b: &Basis, row: &[f64]) -> Vec<f64> {
    let det = determinant(b.rows()).unwrap();
    (0..b.nrows())
        .map(|j| {
            let mut m = b.rows().to_vec();
            m[j] = row.to_vec();
            determinant(&m).unwrap() / det
        })
        .collect()
}

fn gram_determinant(b: &Basis) -> f64 {
    let gram: Vec<Vec<f64>> = b
        .rows()
        .iter()
        .map(|x| b.rows().iter().map(|y| dot(x, y)).collect())
        .collect();
    determinant(&gram).unwrap()
}

fn assert_integral(values: &[f64], what: &str) {
    for v in values {
        assert!((v - v.round()).abs() < 1e-6, "{what}: {v} is not an integer");
    }
}

#[test]
fn reduction_spans_the_same_lattice() {
    for seed in 0..6 {
        let original = full_rank_basis(4, seed);
        let reduced = reduce(original.clone(), DEFAULT_DELTA);

        let d0 = determinant(original.rows()).unwrap();
        let d1 = determinant(reduced.rows()).unwrap();
        assert!(((d1 / d0).abs() - 1.0).abs() < 1e-9, "seed {seed}: det ratio {}", d1 / d0);

        for row in reduced.rows() {
            assert_integral(row, "reduced entry");
            assert_integral(&coordinates(&original, row), "coordinates in original");
        }
        for row in original.rows() {
            assert_integral(&coordinates(&reduced, row), "coordinates in reduced");
        }
    }
}

#[test]
fn reduced_basis_meets_lll_conditions() {
    let delta = 0.75;
    for seed in 10..14 {
        let reduced = LllReducer::new(delta).unwrap().reduce(full_rank_basis(5, seed)).basis;
        let u = orthogonalize(reduced.rows());
        let mu = coefficients(reduced.rows(), &u);
        for k in 1..reduced.nrows() {
            for j in 0..k {
                assert!(mu[k][j].abs() <= 0.5 + 1e-9, "seed {seed}: |mu[{k}][{j}]| = {}", mu[k][j]);
            }
            let lhs = dot(&u[k], &u[k]);
            let rhs = (delta - mu[k][k - 1].powi(2)) * dot(&u[k - 1], &u[k - 1]);
            assert!(lhs >= rhs - 1e-6, "seed {seed}: Lovász fails at k={k}");
        }
    }
}

#[test]
fn second_reduction_is_near_idempotent() {
    let once = reduce(full_rank_basis(5, 99), DEFAULT_DELTA);
    let twice = reduce(once.clone(), DEFAULT_DELTA);
    for (a, b) in once.row_norms().iter().zip(twice.row_norms()) {
        assert!((a - b).abs() <= 1e-9 * a.max(1.0), "{a} vs {b}");
    }
}

#[test]
fn single_vector_is_unchanged() {
    let b = Basis::from_integers(&[vec![12, -5, 7, 0]]).unwrap();
    assert_eq!(reduce(b.clone(), DEFAULT_DELTA), b);
}

#[test]
fn rectangular_basis_reduces() {
    // three vectors in five dimensions
    let b = Basis::from_integers(&[
        vec![1, 0, 0, 31, 7],
        vec![0, 1, 0, 52, 3],
        vec![0, 0, 1, 14, 90],
    ])
    .unwrap();
    let r = reduce(b.clone(), DEFAULT_DELTA);
    assert_eq!((r.nrows(), r.ncols()), (3, 5));
    let (g0, g1) = (gram_determinant(&b), gram_determinant(&r));
    assert!((g0 - g1).abs() <= 1e-9 * g0, "{g0} vs {g1}");
}
