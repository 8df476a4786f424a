//! LLL reduction and complementary-subspace geometry for visualizing how a
//! lattice basis changes under reduction.
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;
pub mod logging;

pub use crate::core::error::LatticeError;
pub use crate::core::lattice::{complementary_angles, reduce, Basis};
pub use crate::core::numerics::{resample, resample_xy};
