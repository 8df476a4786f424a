use anyhow::{Context, Result};

use super::format_value;
use crate::config::Config;
use crate::core::numerics::resample_xy;

pub fn main(
    x: Vec<f64>,
    y: Vec<f64>,
    scale: Option<usize>,
    method: Option<String>,
    with_x: bool,
    cfg: &Config,
) -> Result<()> {
    let scale = scale.unwrap_or(cfg.display.scale);
    let method = method.unwrap_or_else(|| cfg.display.method.to_string());
    let (xs, ys) = resample_xy(&x, &y, scale, &method).context("resample")?;
    for (xv, yv) in xs.iter().zip(&ys) {
        if with_x {
            println!("{} {}", format_value(*xv), format_value(*yv));
        } else {
            println!("{}", format_value(*yv));
        }
    }
    Ok(())
}
