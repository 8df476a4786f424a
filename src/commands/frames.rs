use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

use super::load_basis;
use crate::cli::BasisSource;
use crate::config::Config;
use crate::core::snapshot::build_snapshot;
use crate::core::transition::{Frame, Transition};
use crate::io::atomic::write_json;

#[derive(Serialize)]
struct FrameDump {
    total_frames: usize,
    x: Vec<f64>,
    frames: Vec<Frame>,
}

pub fn main(source: BasisSource, out: Option<PathBuf>, cfg: &Config) -> Result<()> {
    let basis = load_basis(&source, cfg)?;
    let snapshot = build_snapshot(&basis, cfg).context("build snapshot")?;
    let transition = Transition::new(&snapshot);
    let dump = FrameDump {
        total_frames: transition.len(),
        x: snapshot.curves.x.clone(),
        frames: transition.frames().collect(),
    };
    match out {
        Some(out) => {
            write_json(&out, &dump)?;
            println!("{} wrote {} frames to {}", "ok:".green().bold(), dump.total_frames, out.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&dump)?),
    }
    Ok(())
}
