//! LLL reduction (size reduction + Lovász swap) over row bases.
//!
//! The orthogonal basis and μ are rebuilt from scratch after every row change
//! instead of being updated incrementally.
//!
//! There is no iteration cap. For δ < 1 on integer or rational input the
//! standard potential argument bounds the loop; bases carrying NaN/Inf
//! (e.g. linearly dependent rows) can cycle forever.

use serde::Serialize;
use tracing::debug;

use super::basis::Basis;
use super::gram_schmidt::{compute_coefficients, orthogonalize};
use crate::core::error::LatticeError;
use crate::core::numerics::linear_algebra::dot;

pub const DEFAULT_DELTA: f64 = 0.99;

/// Counters collected while reducing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReductionStats {
    /// Passes of the outer loop (one per visit of an index `k`)
    pub iterations: usize,
    /// Row combinations `b_k -= r * b_j`
    pub size_reductions: usize,
    /// Lovász swaps of `b_k` and `b_{k-1}`
    pub swaps: usize,
    /// Full orthogonalizations performed
    pub gso_updates: usize,
}

#[derive(Debug, Clone)]
pub struct Reduction {
    pub basis: Basis,
    pub stats: ReductionStats,
}

/// Reducer with a checked Lovász constant.
#[derive(Debug, Clone, Copy)]
pub struct LllReducer {
    delta: f64,
}

impl Default for LllReducer {
    fn default() -> Self {
        Self { delta: DEFAULT_DELTA }
    }
}

impl LllReducer {
    /// `delta` must lie in (0.25, 1.0); (0.5, 1.0) is the usual working range.
    pub fn new(delta: f64) -> Result<Self, LatticeError> {
        if delta > 0.25 && delta < 1.0 {
            Ok(Self { delta })
        } else {
            Err(LatticeError::InvalidDelta(delta))
        }
    }

    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Takes ownership of `basis` and returns its reduced form.
    pub fn reduce(&self, basis: Basis) -> Reduction {
        run(basis, self.delta)
    }
}

/// Unchecked entry point: reduce `basis` with Lovász constant `delta`.
///
/// Callers that still need the original basis clone it first.
pub fn reduce(basis: Basis, delta: f64) -> Basis {
    run(basis, delta).basis
}

fn run(mut basis: Basis, delta: f64) -> Reduction {
    let n = basis.nrows();
    let mut stats = ReductionStats::default();
    let mut u = orthogonalize(basis.rows());
    stats.gso_updates += 1;
    let mut mu = vec![vec![0.0; n]; n];

    let mut k = 1usize;
    while k < n {
        stats.iterations += 1;

        // size reduction: j = k-1 down to 0
        for j in (0..k).rev() {
            compute_coefficients(basis.rows(), &u, &mut mu);
            if mu[k][j].abs() > 0.5 {
                let r = mu[k][j].round_ties_even();
                basis.subtract_multiple(k, j, r);
                u = orthogonalize(basis.rows());
                stats.size_reductions += 1;
                stats.gso_updates += 1;
            }
        }

        // Lovász condition
        compute_coefficients(basis.rows(), &u, &mut mu);
        let c = mu[k][k - 1];
        let norm_k = dot(&u[k], &u[k]);
        let norm_k1 = dot(&u[k - 1], &u[k - 1]);
        if norm_k >= (delta - c * c) * norm_k1 {
            k += 1;
        } else {
            basis.swap_rows(k, k - 1);
            u = orthogonalize(basis.rows());
            stats.swaps += 1;
            stats.gso_updates += 1;
            debug!(k, "lovász swap");
            k = (k - 1).max(1);
        }
    }

    debug!(
        rows = n,
        iterations = stats.iterations,
        swaps = stats.swaps,
        size_reductions = stats.size_reductions,
        "lll reduction finished"
    );
    Reduction { basis, stats }
}
