use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::Colorize;

use super::load_basis;
use crate::cli::BasisSource;
use crate::config::Config;
use crate::core::snapshot::build_snapshot;
use crate::io::atomic::write_json;

pub fn main(source: BasisSource, out: Option<PathBuf>, cfg: &Config) -> Result<()> {
    let basis = load_basis(&source, cfg)?;
    let snapshot = build_snapshot(&basis, cfg).context("build snapshot")?;
    match out {
        Some(out) => {
            write_json(&out, &snapshot)?;
            println!("{} wrote {}", "ok:".green().bold(), out.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&snapshot)?),
    }
    Ok(())
}
