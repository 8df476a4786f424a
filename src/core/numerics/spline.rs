//! Cubic spline fitting and the resampling pass that feeds display curves.
//!
//! End conditions are "not-a-knot": the third derivative is continuous across
//! the second and the second-to-last knot. Two points give the straight line,
//! three points the interpolating parabola.
#![allow(clippy::needless_range_loop)]

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::error::LatticeError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InterpolationMethod {
    #[default]
    #[serde(rename = "cubicspline")]
    CubicSpline,
}

impl InterpolationMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            InterpolationMethod::CubicSpline => "cubicspline",
        }
    }
}

impl fmt::Display for InterpolationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InterpolationMethod {
    type Err = LatticeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cubicspline" => Ok(InterpolationMethod::CubicSpline),
            other => Err(LatticeError::UnsupportedMethod(other.to_string())),
        }
    }
}

/// Piecewise cubic through the knots `(x[i], y[i])`, stored as knot values
/// plus first-derivative slopes.
#[derive(Clone, Debug)]
pub struct CubicSpline {
    x: Vec<f64>,
    y: Vec<f64>,
    slopes: Vec<f64>,
}

impl CubicSpline {
    /// Fit a not-a-knot spline. `x` must be strictly increasing and every value finite.
    pub fn fit(x: &[f64], y: &[f64]) -> Result<Self, LatticeError> {
        if x.len() != y.len() {
            return Err(LatticeError::Interpolation(format!(
                "x and y lengths differ ({} vs {})",
                x.len(),
                y.len()
            )));
        }
        let n = x.len();
        if n < 2 {
            return Err(LatticeError::interpolation("at least two points are required"));
        }
        if x.iter().chain(y.iter()).any(|v| !v.is_finite()) {
            return Err(LatticeError::interpolation("sample values must be finite"));
        }
        if x.windows(2).any(|w| w[1] <= w[0]) {
            return Err(LatticeError::interpolation("x must be strictly increasing"));
        }

        let h: Vec<f64> = x.windows(2).map(|w| w[1] - w[0]).collect();
        let m: Vec<f64> = (0..n - 1).map(|i| (y[i + 1] - y[i]) / h[i]).collect();

        let slopes = if n == 2 {
            vec![m[0], m[0]]
        } else if n == 3 {
            let sub = [0.0, h[1], 1.0];
            let diag = [1.0, 2.0 * (h[0] + h[1]), 1.0];
            let sup = [1.0, h[0], 0.0];
            let rhs = [2.0 * m[0], 3.0 * (h[0] * m[1] + h[1] * m[0]), 2.0 * m[1]];
            solve_tridiagonal(&sub, &diag, &sup, &rhs)?
        } else {
            let mut sub = vec![0.0; n];
            let mut diag = vec![0.0; n];
            let mut sup = vec![0.0; n];
            let mut rhs = vec![0.0; n];

            for i in 1..n - 1 {
                sub[i] = h[i];
                diag[i] = 2.0 * (h[i - 1] + h[i]);
                sup[i] = h[i - 1];
                rhs[i] = 3.0 * (h[i] * m[i - 1] + h[i - 1] * m[i]);
            }

            let d = x[2] - x[0];
            diag[0] = h[1];
            sup[0] = d;
            rhs[0] = ((h[0] + 2.0 * d) * h[1] * m[0] + h[0] * h[0] * m[1]) / d;

            let d = x[n - 1] - x[n - 3];
            diag[n - 1] = h[n - 3];
            sub[n - 1] = d;
            rhs[n - 1] =
                (h[n - 2] * h[n - 2] * m[n - 3] + (2.0 * d + h[n - 2]) * h[n - 3] * m[n - 2]) / d;

            solve_tridiagonal(&sub, &diag, &sup, &rhs)?
        };

        Ok(Self { x: x.to_vec(), y: y.to_vec(), slopes })
    }

    /// Evaluate at `t`. Points outside the knot range extrapolate the end pieces.
    pub fn evaluate(&self, t: f64) -> f64 {
        let n = self.x.len();
        let i = self
            .x
            .partition_point(|&xi| xi <= t)
            .saturating_sub(1)
            .min(n - 2);
        let h = self.x[i + 1] - self.x[i];
        let m = (self.y[i + 1] - self.y[i]) / h;
        let (s0, s1) = (self.slopes[i], self.slopes[i + 1]);
        let c2 = (3.0 * m - 2.0 * s0 - s1) / h;
        let c3 = (s0 + s1 - 2.0 * m) / (h * h);
        let dt = t - self.x[i];
        self.y[i] + dt * (s0 + dt * (c2 + dt * c3))
    }
}

/// Thomas algorithm for a tridiagonal system. `sub[0]` and `sup[n-1]` are ignored.
pub fn solve_tridiagonal(
    sub: &[f64],
    diag: &[f64],
    sup: &[f64],
    rhs: &[f64],
) -> Result<Vec<f64>, LatticeError> {
    let n = diag.len();
    if n == 0 {
        return Ok(Vec::new());
    }
    let mut cprime = vec![0.0; n];
    let mut dprime = vec![0.0; n];

    let mut denom = diag[0];
    if denom == 0.0 {
        return Err(LatticeError::interpolation("singular spline system"));
    }
    cprime[0] = sup[0] / denom;
    dprime[0] = rhs[0] / denom;
    for i in 1..n {
        denom = diag[i] - sub[i] * cprime[i - 1];
        if denom == 0.0 || !denom.is_finite() {
            return Err(LatticeError::interpolation("singular spline system"));
        }
        cprime[i] = sup[i] / denom;
        dprime[i] = (rhs[i] - sub[i] * dprime[i - 1]) / denom;
    }

    let mut out = vec![0.0; n];
    out[n - 1] = dprime[n - 1];
    for i in (0..n - 1).rev() {
        out[i] = dprime[i] - cprime[i] * out[i + 1];
    }
    Ok(out)
}

/// `count` evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            let mut out: Vec<f64> = (0..count).map(|i| start + step * i as f64).collect();
            out[count - 1] = end;
            out
        }
    }
}

/// Resample `y(x)` onto `scale` evenly spaced points spanning `[min(x), max(x)]`.
/// Returns only the resampled Y values.
pub fn resample(x: &[f64], y: &[f64], scale: usize, method: &str) -> Result<Vec<f64>, LatticeError> {
    resample_xy(x, y, scale, method).map(|(_, ys)| ys)
}

/// Same as [`resample`] but also returns the sampling grid.
///
/// An unknown `method` is an error. Fitting failures are not: they are logged
/// and produce a zero-filled Y sequence of the requested length.
pub fn resample_xy(
    x: &[f64],
    y: &[f64],
    scale: usize,
    method: &str,
) -> Result<(Vec<f64>, Vec<f64>), LatticeError> {
    let method: InterpolationMethod = method.parse()?;
    Ok(resample_with(x, y, scale, method))
}

/// Typed form of [`resample_xy`]; never fails.
pub fn resample_with(x: &[f64], y: &[f64], scale: usize, method: InterpolationMethod) -> (Vec<f64>, Vec<f64>) {
    let (lo, hi) = if x.is_empty() {
        (0.0, 0.0)
    } else {
        (
            x.iter().copied().fold(f64::INFINITY, f64::min),
            x.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        )
    };
    let grid = linspace(lo, hi, scale);

    let fitted = match method {
        InterpolationMethod::CubicSpline => CubicSpline::fit(x, y),
    };
    let ys = match fitted {
        Ok(spline) => {
            let mut ys: Vec<f64> = grid.iter().map(|&t| spline.evaluate(t)).collect();
            if ys.iter().any(|v| !v.is_finite()) {
                warn!("non-finite values in interpolation result, replacing with zeros");
                for v in ys.iter_mut().filter(|v| !v.is_finite()) {
                    *v = 0.0;
                }
            }
            ys
        }
        Err(e) => {
            warn!("interpolation failed: {e}");
            vec![0.0; scale]
        }
    };
    (grid, ys)
}
