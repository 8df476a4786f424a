use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::error::LatticeError;
use crate::core::lattice::{Basis, LllReducer, DEFAULT_DELTA};
use crate::core::numerics::InterpolationMethod;
use crate::core::transition::Easing;

pub fn default_config_path() -> Option<PathBuf> {
    // ~/.lattice_vis/config.toml
    dirs_next::home_dir().map(|h| h.join(".lattice_vis").join("config.toml"))
}

pub fn resolve_config_path(cli_path: &Option<PathBuf>) -> Option<PathBuf> {
    if let Some(p) = cli_path {
        return Some(p.clone());
    }
    default_config_path()
}

pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Create config parent dir {}", parent.display()))?;
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReductionConfig {
    /// Lovász constant
    pub delta: f64,
}

impl Default for ReductionConfig {
    fn default() -> Self {
        Self { delta: DEFAULT_DELTA }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Samples per resampled curve
    pub scale: usize,
    pub method: InterpolationMethod,
    pub total_frames: usize,
    pub easing: Easing,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            scale: 100,
            method: InterpolationMethod::CubicSpline,
            total_frames: 100,
            easing: Easing::Linear,
        }
    }
}

/// Shape and range of generated example bases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BasisConfig {
    pub rows: usize,
    pub cols: usize,
    /// Exclusive upper bound for entries
    pub max_entry: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for BasisConfig {
    fn default() -> Self {
        Self { rows: 10, cols: 10, max_entry: 1000, seed: None }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub reduction: ReductionConfig,
    pub display: DisplayConfig,
    pub basis: BasisConfig,
}

impl Config {
    /// Load from `path`; a missing file gives the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Read config {}", path.display()))?;
        let cfg = Self::from_toml(&text).with_context(|| format!("Parse config {}", path.display()))?;
        Ok(cfg)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let cfg: Config = toml::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), LatticeError> {
        LllReducer::new(self.reduction.delta)?;
        if self.display.total_frames == 0 {
            return Err(LatticeError::invalid_config("display.total_frames must be at least 1"));
        }
        if self.basis.rows == 0 || self.basis.cols == 0 {
            return Err(LatticeError::invalid_config("basis.rows and basis.cols must be positive"));
        }
        if self.basis.max_entry == 0 {
            return Err(LatticeError::invalid_config("basis.max_entry must be positive"));
        }
        Ok(())
    }

    pub fn reducer(&self) -> Result<LllReducer, LatticeError> {
        LllReducer::new(self.reduction.delta)
    }

    /// Seeded when `basis.seed` is set, otherwise from OS entropy.
    pub fn basis_rng(&self) -> StdRng {
        match self.basis.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    pub fn random_basis(&self) -> Result<Basis, LatticeError> {
        let b = &self.basis;
        Basis::random(b.rows, b.cols, b.max_entry, &mut self.basis_rng())
    }
}
