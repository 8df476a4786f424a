//! Reduction and geometry engine behind the visualizer.
//! Everything here is synchronous and allocation-local; no global state.

pub mod error;
pub mod lattice;
pub mod numerics;
pub mod snapshot;
pub mod transition;

pub use error::LatticeError;
