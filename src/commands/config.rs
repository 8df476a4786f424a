use std::path::PathBuf;

use anyhow::{anyhow, Result};
use colored::Colorize;

use crate::cli::ConfigAction;
use crate::config::{ensure_parent_dir, Config};
use crate::io::atomic::atomic_write;

pub fn main(action: ConfigAction, path: Option<PathBuf>, cfg: &Config) -> Result<()> {
    match action {
        ConfigAction::Init { force } => {
            let path = path.ok_or_else(|| anyhow!("no config path: pass --config or set a home directory"))?;
            if path.exists() && !force {
                eprintln!(
                    "{} '{}' already exists (leaving unchanged, use --force to overwrite)",
                    "warn:".yellow().bold(),
                    path.display()
                );
                return Ok(());
            }
            ensure_parent_dir(&path)?;
            atomic_write(&path, Config::default().to_toml_string()?)?;
            println!("{} wrote {}", "ok:".green().bold(), path.display());
            Ok(())
        }
        ConfigAction::Show => {
            print!("{}", cfg.to_toml_string()?);
            Ok(())
        }
    }
}
