pub mod linear_algebra;
pub mod spline;

pub use spline::{resample, resample_xy, CubicSpline, InterpolationMethod};
