//! Classical Gram–Schmidt without normalization, and the projection
//! coefficients μ that LLL works from.
//!
//! Neither function guards against a zero orthogonal vector: a linearly
//! dependent basis yields NaN/Inf, which flows through to the caller.
#![allow(clippy::needless_range_loop)]

use crate::core::numerics::linear_algebra::dot;

/// `U[0] = B[0]`, `U[i] = B[i] - Σ_{j<i} (B[i]·U[j] / U[j]·U[j]) U[j]`.
pub fn orthogonalize(basis: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let mut u: Vec<Vec<f64>> = Vec::with_capacity(basis.len());
    for (i, b) in basis.iter().enumerate() {
        let mut ui = b.clone();
        for j in 0..i {
            let c = dot(b, &u[j]) / dot(&u[j], &u[j]);
            for (t, uj) in ui.iter_mut().zip(&u[j]) {
                *t -= c * uj;
            }
        }
        u.push(ui);
    }
    u
}

/// Overwrite `mu[i][j] = B[i]·U[j] / U[j]·U[j]` for every `j < i`.
/// Entries on or above the diagonal are left as they were.
pub fn compute_coefficients(basis: &[Vec<f64>], u: &[Vec<f64>], mu: &mut [Vec<f64>]) {
    for i in 0..basis.len() {
        for j in 0..i {
            mu[i][j] = dot(&basis[i], &u[j]) / dot(&u[j], &u[j]);
        }
    }
}

/// Fresh `n x n` coefficient matrix, zero on and above the diagonal.
pub fn coefficients(basis: &[Vec<f64>], u: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let n = basis.len();
    let mut mu = vec![vec![0.0; n]; n];
    compute_coefficients(basis, u, &mut mu);
    mu
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_are_pairwise_orthogonal() {
        let b = vec![
            vec![3.0, 1.0, 2.0],
            vec![1.0, 4.0, 0.0],
            vec![2.0, 2.0, 5.0],
        ];
        let u = orthogonalize(&b);
        assert_eq!(u[0], b[0]);
        for i in 0..3 {
            for j in 0..i {
                assert!(dot(&u[i], &u[j]).abs() < 1e-9, "U[{i}]·U[{j}]");
            }
        }
    }

    #[test]
    fn test_not_normalized() {
        let u = orthogonalize(&[vec![2.0, 0.0], vec![5.0, 3.0]]);
        assert_eq!(u, vec![vec![2.0, 0.0], vec![0.0, 3.0]]);
    }

    #[test]
    fn test_coefficients_lower_triangle_only() {
        let b = vec![vec![2.0, 0.0], vec![5.0, 3.0]];
        let u = orthogonalize(&b);
        let mut mu = vec![vec![9.0, 9.0], vec![9.0, 9.0]];
        compute_coefficients(&b, &u, &mut mu);
        assert_eq!(mu, vec![vec![9.0, 9.0], vec![2.5, 9.0]]);
        assert_eq!(coefficients(&b, &u), vec![vec![0.0, 0.0], vec![2.5, 0.0]]);
    }

    #[test]
    fn test_dependent_rows_go_non_finite() {
        let b = vec![vec![0.0, 0.0], vec![1.0, 1.0]];
        let u = orthogonalize(&b);
        assert!(u[1].iter().all(|v| !v.is_finite()));
    }
}
