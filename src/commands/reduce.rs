use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;

use super::{format_row, load_basis};
use crate::cli::BasisSource;
use crate::config::Config;
use crate::core::lattice::LllReducer;
use crate::io::atomic::write_json;

pub fn main(source: BasisSource, delta: Option<f64>, out: Option<PathBuf>, cfg: &Config) -> Result<()> {
    let reducer = match delta {
        Some(d) => LllReducer::new(d)?,
        None => cfg.reducer()?,
    };
    let basis = load_basis(&source, cfg)?;
    let reduction = reducer.reduce(basis);

    println!("reduced basis (delta = {}):", reducer.delta());
    for row in reduction.basis.rows() {
        println!("  {}", format_row(row));
    }
    let s = &reduction.stats;
    println!(
        "stats: iterations={} size_reductions={} swaps={} gso_updates={}",
        s.iterations, s.size_reductions, s.swaps, s.gso_updates
    );

    if let Some(out) = out {
        write_json(&out, &reduction.basis)?;
        println!("{} wrote {}", "ok:".green().bold(), out.display());
    }
    Ok(())
}
