#![allow(clippy::needless_range_loop)]
use crate::core::error::LatticeError;

/// Dot product over the common prefix of two vectors. Callers pass rows of one
/// validated matrix, so lengths already agree.
pub fn dot(v1: &[f64], v2: &[f64]) -> f64 {
    v1.iter().zip(v2.iter()).map(|(a, b)| a * b).sum()
}

/// Euclidean norm.
pub fn norm(v: &[f64]) -> f64 {
    dot(v, v).sqrt()
}

/// Copy of `matrix` with row `skip_row` and column `skip_col` removed.
pub fn minor(matrix: &[Vec<f64>], skip_row: usize, skip_col: usize) -> Vec<Vec<f64>> {
    matrix
        .iter()
        .enumerate()
        .filter(|&(r, _)| r != skip_row)
        .map(|(_, row)| {
            row.iter()
                .enumerate()
                .filter(|&(c, _)| c != skip_col)
                .map(|(_, &v)| v)
                .collect::<Vec<f64>>()
        })
        .collect()
}

/// Determinant of a square matrix by LU elimination with partial pivoting.
///
/// The empty (0x0) matrix has determinant 1, so cofactors of a 1x1 basis are
/// well defined. A zero pivot column short-circuits to 0.
pub fn determinant(matrix: &[Vec<f64>]) -> Result<f64, LatticeError> {
    let n = matrix.len();
    if let Some(row) = matrix.iter().find(|row| row.len() != n) {
        return Err(LatticeError::NotSquare { rows: n, cols: row.len() });
    }
    if n == 0 {
        return Ok(1.0);
    }
    if n == 1 {
        return Ok(matrix[0][0]);
    }
    if n == 2 {
        return Ok(matrix[0][0] * matrix[1][1] - matrix[0][1] * matrix[1][0]);
    }

    let mut a = matrix.to_vec();
    let mut det = 1.0;
    for j in 0..n {
        // pivot: largest magnitude in column j at or below the diagonal
        let mut pivot = j;
        for i in j + 1..n {
            if a[i][j].abs() > a[pivot][j].abs() {
                pivot = i;
            }
        }
        if a[pivot][j] == 0.0 {
            return Ok(0.0);
        }
        if pivot != j {
            a.swap(pivot, j);
            det = -det;
        }
        let p = a[j][j];
        det *= p;
        for i in j + 1..n {
            let factor = a[i][j] / p;
            if factor == 0.0 {
                continue;
            }
            for k in j..n {
                a[i][k] -= factor * a[j][k];
            }
        }
    }
    Ok(det)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_and_norm() {
        assert_eq!(dot(&[1.0, 2.0, 3.0], &[4.0, -5.0, 6.0]), 12.0);
        assert_eq!(norm(&[3.0, 4.0]), 5.0);
    }

    #[test]
    fn test_minor_removes_row_and_column() {
        let m = vec![
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
            vec![7.0, 8.0, 9.0],
        ];
        assert_eq!(minor(&m, 1, 0), vec![vec![2.0, 3.0], vec![8.0, 9.0]]);
        assert_eq!(minor(&m, 0, 2), vec![vec![4.0, 5.0], vec![7.0, 8.0]]);
    }

    #[test]
    fn test_determinant_small() {
        assert_eq!(determinant(&[]).unwrap(), 1.0);
        assert_eq!(determinant(&[vec![-4.0]]).unwrap(), -4.0);
        assert_eq!(determinant(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap(), -2.0);
    }

    #[test]
    fn test_determinant_needs_pivoting() {
        let m = vec![
            vec![0.0, 2.0, 1.0],
            vec![1.0, 0.0, 0.0],
            vec![0.0, 1.0, 3.0],
        ];
        // expand along row 1: -1 * (2*3 - 1*1) = -5
        assert!((determinant(&m).unwrap() + 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_determinant_singular_and_shape() {
        let singular = vec![
            vec![1.0, 2.0, 3.0],
            vec![2.0, 4.0, 6.0],
            vec![0.0, 1.0, 1.0],
        ];
        assert!(determinant(&singular).unwrap().abs() < 1e-12);
        assert!(matches!(
            determinant(&[vec![1.0, 2.0]]),
            Err(LatticeError::NotSquare { rows: 1, cols: 2 })
        ));
    }
}
