//! Validated basis matrix: rows are basis vectors, columns are components.

use std::ops::Index;

use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::error::LatticeError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct Basis {
    rows: Vec<Vec<f64>>,
}

impl Basis {
    /// Rejects an empty matrix and rows of differing length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, LatticeError> {
        let cols = match rows.first() {
            Some(r) if !r.is_empty() => r.len(),
            _ => return Err(LatticeError::EmptyBasis),
        };
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(LatticeError::RaggedBasis { row, expected: cols, found: r.len() });
        }
        Ok(Self { rows })
    }

    pub fn from_integers(rows: &[Vec<i64>]) -> Result<Self, LatticeError> {
        Self::from_rows(
            rows.iter()
                .map(|r| r.iter().map(|&v| v as f64).collect())
                .collect(),
        )
    }

    /// Square diagonal basis `scale * I`.
    pub fn scaled_identity(n: usize, scale: f64) -> Result<Self, LatticeError> {
        Self::from_rows(
            (0..n)
                .map(|i| (0..n).map(|j| if i == j { scale } else { 0.0 }).collect())
                .collect(),
        )
    }

    /// Integer entries drawn uniformly from `[0, max_entry)`.
    pub fn random<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        max_entry: u32,
        rng: &mut R,
    ) -> Result<Self, LatticeError> {
        if max_entry == 0 {
            return Err(LatticeError::invalid_config("max_entry must be positive"));
        }
        let dist = Uniform::new(0, max_entry);
        Self::from_rows(
            (0..rows)
                .map(|_| (0..cols).map(|_| dist.sample(rng) as f64).collect())
                .collect(),
        )
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    pub fn ncols(&self) -> usize {
        self.rows[0].len()
    }

    pub fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<f64>> {
        self.rows
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) {
        self.rows.swap(a, b);
    }

    /// `row[target] -= factor * row[source]`
    pub fn subtract_multiple(&mut self, target: usize, source: usize, factor: f64) {
        let src = self.rows[source].clone();
        for (t, s) in self.rows[target].iter_mut().zip(src) {
            *t -= factor * s;
        }
    }

    /// Element-wise absolute value, the form the display layer plots.
    pub fn abs(&self) -> Basis {
        Basis {
            rows: self
                .rows
                .iter()
                .map(|r| r.iter().map(|v| v.abs()).collect())
                .collect(),
        }
    }

    /// Euclidean length of every row.
    pub fn row_norms(&self) -> Vec<f64> {
        self.rows
            .iter()
            .map(|r| crate::core::numerics::linear_algebra::norm(r))
            .collect()
    }
}

impl Index<usize> for Basis {
    type Output = Vec<f64>;

    fn index(&self, i: usize) -> &Vec<f64> {
        &self.rows[i]
    }
}

impl TryFrom<Vec<Vec<f64>>> for Basis {
    type Error = LatticeError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Basis::from_rows(rows)
    }
}

impl From<Basis> for Vec<Vec<f64>> {
    fn from(b: Basis) -> Self {
        b.rows
    }
}
