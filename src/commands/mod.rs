//! One module per subcommand. Each returns `anyhow::Result` and prints to stdout.

pub mod angles;
pub mod config;
pub mod frames;
pub mod reduce;
pub mod resample;
pub mod snapshot;

use anyhow::Result;
use tracing::info;

use crate::cli::BasisSource;
use crate::config::Config;
use crate::core::error::LatticeError;
use crate::core::lattice::Basis;
use crate::io::basis_file::read_basis;

/// Read `--input`, or generate from the `[basis]` section (with `--seed` applied).
pub fn load_basis(source: &BasisSource, cfg: &Config) -> Result<Basis> {
    if let Some(path) = &source.input {
        let basis = read_basis(path)?;
        info!(rows = basis.nrows(), cols = basis.ncols(), path = %path.display(), "basis loaded");
        return Ok(basis);
    }
    let mut cfg = cfg.clone();
    if source.seed.is_some() {
        cfg.basis.seed = source.seed;
    }
    let basis = cfg.random_basis()?;
    info!(rows = basis.nrows(), cols = basis.ncols(), seed = ?cfg.basis.seed, "basis generated");
    Ok(basis)
}

/// Integral values print without a fractional part; `-0` prints as `0`.
pub fn format_value(v: f64) -> String {
    format!("{}", v + 0.0)
}

pub fn format_row(row: &[f64]) -> String {
    let cells: Vec<String> = row.iter().map(|&v| format_value(v)).collect();
    format!("[{}]", cells.join(", "))
}

/// 2 for configuration mistakes (bad method tag, δ out of range, bad config file), 1 otherwise.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    let config_error = err.chain().any(|cause| {
        cause
            .downcast_ref::<LatticeError>()
            .map(LatticeError::is_configuration)
            .unwrap_or(false)
            || cause.is::<toml::de::Error>()
    });
    if config_error { 2 } else { 1 }
}
