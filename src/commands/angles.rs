use anyhow::{Context, Result};

use super::{format_value, load_basis};
use crate::cli::BasisSource;
use crate::config::Config;
use crate::core::lattice::{complementary_angles, sanitize};

pub fn main(source: BasisSource, cfg: &Config) -> Result<()> {
    let basis = load_basis(&source, cfg)?;
    let angles = complementary_angles(&basis).context("complementary angles")?;
    for (i, a) in sanitize(&angles).iter().enumerate() {
        println!("b{}: {}", i + 1, format_value(*a));
    }
    Ok(())
}
