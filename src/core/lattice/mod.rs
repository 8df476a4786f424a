//! Lattice bases, Gram–Schmidt, LLL and complementary-subspace geometry.

pub mod basis;
pub mod geometry;
pub mod gram_schmidt;
pub mod lll;

pub use basis::Basis;
pub use geometry::{complementary_angles, normal_vectors, sanitize, vector_angles};
pub use gram_schmidt::{coefficients, compute_coefficients, orthogonalize};
pub use lll::{reduce, LllReducer, Reduction, ReductionStats, DEFAULT_DELTA};
