//! The bundle a display layer needs: both bases, their angles and the
//! resampled curves, computed once up front.

use chrono::Local;
use serde::Serialize;
use tracing::info;

use crate::config::Config;
use crate::core::error::LatticeError;
use crate::core::lattice::basis::Basis;
use crate::core::lattice::geometry::{complementary_angles, sanitize};
use crate::core::lattice::lll::{LllReducer, ReductionStats};
use crate::core::numerics::spline::{linspace, resample_with, InterpolationMethod};
use crate::core::transition::Easing;

#[derive(Debug, Clone, Serialize)]
pub struct DisplayCurves {
    /// Shared sampling grid over `[1, cols]`
    pub x: Vec<f64>,
    pub original: Vec<Vec<f64>>,
    pub target: Vec<Vec<f64>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LatticeSnapshot {
    pub generated_at: String,
    pub delta: f64,
    pub original_basis: Basis,
    /// Absolute value of the reduced basis
    pub target_basis: Basis,
    pub vec_dimension: Vec<f64>,
    pub scale: usize,
    pub method: InterpolationMethod,
    pub total_frames: usize,
    pub easing: Easing,
    pub angles_basis_complementary: Vec<f64>,
    pub target_angles_basis_complementary: Vec<f64>,
    pub curves: DisplayCurves,
    pub stats: ReductionStats,
}

fn curves_for(basis: &Basis, grid_x: &[f64], scale: usize, method: InterpolationMethod) -> Vec<Vec<f64>> {
    basis
        .rows()
        .iter()
        .map(|row| resample_with(grid_x, row, scale, method).1)
        .collect()
}

/// Reduce `basis` (a copy; the argument is untouched) and derive everything
/// the animation needs. The basis must be square.
pub fn build_snapshot(basis: &Basis, config: &Config) -> Result<LatticeSnapshot, LatticeError> {
    if !basis.is_square() {
        return Err(LatticeError::NotSquare { rows: basis.nrows(), cols: basis.ncols() });
    }
    let reducer = LllReducer::new(config.reduction.delta)?;
    let display = &config.display;

    let reduction = reducer.reduce(basis.clone());
    let angles = sanitize(&complementary_angles(basis)?);
    let target_angles = sanitize(&complementary_angles(&reduction.basis)?);
    let target_basis = reduction.basis.abs();

    let vec_dimension: Vec<f64> = (1..=basis.ncols()).map(|d| d as f64).collect();
    let curves = DisplayCurves {
        x: linspace(1.0, basis.ncols() as f64, display.scale),
        original: curves_for(basis, &vec_dimension, display.scale, display.method),
        target: curves_for(&target_basis, &vec_dimension, display.scale, display.method),
    };

    info!(
        rows = basis.nrows(),
        swaps = reduction.stats.swaps,
        size_reductions = reduction.stats.size_reductions,
        "snapshot built"
    );

    Ok(LatticeSnapshot {
        generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        delta: reducer.delta(),
        original_basis: basis.clone(),
        target_basis,
        vec_dimension,
        scale: display.scale,
        method: display.method,
        total_frames: display.total_frames,
        easing: display.easing,
        angles_basis_complementary: angles,
        target_angles_basis_complementary: target_angles,
        curves,
        stats: reduction.stats,
    })
}
