//! Angles between basis vectors and their complementary subspaces.
//!
//! For row `i`, the normal of the span of the other rows is the cofactor
//! vector `n_j = (-1)^(i+j) det(B without row i, column j)`. The reported
//! angle is `|θ(b_i, n_i) - 90|` in degrees.

use tracing::warn;

use super::basis::Basis;
use crate::core::error::LatticeError;
use crate::core::numerics::linear_algebra::{determinant, dot, minor, norm};

fn require_square(basis: &Basis) -> Result<(), LatticeError> {
    if basis.is_square() {
        Ok(())
    } else {
        Err(LatticeError::NotSquare { rows: basis.nrows(), cols: basis.ncols() })
    }
}

/// One cofactor normal per row, each component rounded to the nearest integer.
pub fn normal_vectors(basis: &Basis) -> Result<Vec<Vec<f64>>, LatticeError> {
    require_square(basis)?;
    let rows = basis.rows();
    let n = basis.nrows();
    let mut normals = Vec::with_capacity(n);
    for i in 0..n {
        let mut normal = vec![0.0; n];
        for (j, slot) in normal.iter_mut().enumerate() {
            let sign = if (i + j) % 2 == 0 { 1.0 } else { -1.0 };
            *slot = (sign * determinant(&minor(rows, i, j))?).round_ties_even();
        }
        normals.push(normal);
    }
    Ok(normals)
}

/// Angle in whole degrees between `b` and `n`, or `None` when either has zero length.
fn angle_between(b: &[f64], n: &[f64]) -> Option<f64> {
    let (nb, nn) = (norm(b), norm(n));
    if nb == 0.0 || nn == 0.0 {
        return None;
    }
    let cos = (dot(b, n) / (nb * nn)).clamp(-1.0, 1.0);
    Some(cos.acos().to_degrees().round_ties_even())
}

fn row_angles(basis: &Basis, normals: &[Vec<f64>]) -> Vec<Option<f64>> {
    basis
        .rows()
        .iter()
        .zip(normals)
        .enumerate()
        .map(|(i, (b, n))| {
            let angle = angle_between(b, n);
            if angle.is_none() {
                warn!(row = i, "zero norm encountered for basis vector, angle set to 0");
            }
            angle
        })
        .collect()
}

/// Raw angle (degrees, rounded) between each row and its normal; 0.0 for degenerate rows.
pub fn vector_angles(basis: &Basis, normals: &[Vec<f64>]) -> Vec<f64> {
    row_angles(basis, normals)
        .into_iter()
        .map(|a| a.unwrap_or(0.0))
        .collect()
}

/// `|θ - 90|` per row: how far each vector leans out of the orthogonal
/// complement of the others. Degenerate rows (zero vector or zero normal)
/// report 0.0. Requires a square basis.
///
/// Non-finite input entries propagate to the output; run [`sanitize`] before
/// handing the result to a display.
pub fn complementary_angles(basis: &Basis) -> Result<Vec<f64>, LatticeError> {
    let normals = normal_vectors(basis)?;
    Ok(row_angles(basis, &normals)
        .into_iter()
        .map(|a| a.map_or(0.0, |theta| (theta - 90.0).abs()))
        .collect())
}

/// Replace NaN and ±Inf with 0.0.
pub fn sanitize(values: &[f64]) -> Vec<f64> {
    values
        .iter()
        .map(|&v| if v.is_finite() { v } else { 0.0 })
        .collect()
}
