//! Frame-by-frame blending from the original basis to its reduced form.

use serde::{Deserialize, Serialize};

use crate::core::snapshot::LatticeSnapshot;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Easing {
    #[default]
    Linear,
    Smoothstep,
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Easing::Linear => t,
            Easing::Smoothstep => smoothstep(t),
        }
    }
}

/// `t² (3 - 2t)`
pub fn smoothstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

/// Position of `frame` in `[0, 1]`; a single-frame animation sits at its end.
pub fn frame_progress(frame: usize, total_frames: usize) -> f64 {
    if total_frames <= 1 {
        return 1.0;
    }
    let last = total_frames - 1;
    frame.min(last) as f64 / last as f64
}

fn lerp(a: f64, b: f64, alpha: f64) -> f64 {
    let v = (1.0 - alpha) * a + alpha * b;
    if v.is_finite() { v } else { 0.0 }
}

fn blend(start: &[f64], end: &[f64], alpha: f64) -> Vec<f64> {
    start.iter().zip(end).map(|(&a, &b)| lerp(a, b, alpha)).collect()
}

fn blend_rows(start: &[Vec<f64>], end: &[Vec<f64>], alpha: f64) -> Vec<Vec<f64>> {
    start.iter().zip(end).map(|(a, b)| blend(a, b, alpha)).collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct Frame {
    pub index: usize,
    pub alpha: f64,
    /// Per-dimension magnitudes of every basis vector
    pub magnitudes: Vec<Vec<f64>>,
    pub angles: Vec<f64>,
    /// Resampled display curve per basis vector
    pub curves: Vec<Vec<f64>>,
}

/// View over a snapshot that produces blended frames.
pub struct Transition<'a> {
    snapshot: &'a LatticeSnapshot,
    start: Vec<Vec<f64>>,
}

impl<'a> Transition<'a> {
    pub fn new(snapshot: &'a LatticeSnapshot) -> Self {
        let start = snapshot.original_basis.abs().into_rows();
        Self { snapshot, start }
    }

    pub fn len(&self) -> usize {
        self.snapshot.total_frames
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Frame `index`; indices past the end clamp to the final state.
    pub fn frame(&self, index: usize) -> Frame {
        let s = self.snapshot;
        let alpha = s.easing.apply(frame_progress(index, s.total_frames));
        Frame {
            index,
            alpha,
            magnitudes: blend_rows(&self.start, s.target_basis.rows(), alpha),
            angles: blend(
                &s.angles_basis_complementary,
                &s.target_angles_basis_complementary,
                alpha,
            ),
            curves: blend_rows(&s.curves.original, &s.curves.target, alpha),
        }
    }

    pub fn frames(&self) -> impl Iterator<Item = Frame> + '_ {
        (0..self.len()).map(move |i| self.frame(i))
    }
}
