//! Solver configuration stored in `advent.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Solver configuration (TOML).
///
/// Intended to be edited by humans; missing fields default to the reference
/// puzzle values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SolverConfig {
    pub grid: GridConfig,
}

/// Dimensions of the day-6 light grid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GridConfig {
    pub height: usize,
    pub width: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            height: 1000,
            width: 1000,
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
        }
    }
}

impl SolverConfig {
    pub fn validate(&self) -> Result<()> {
        if self.grid.height == 0 {
            return Err(anyhow!("grid.height must be > 0"));
        }
        if self.grid.width == 0 {
            return Err(anyhow!("grid.width must be > 0"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `SolverConfig::default()`.
pub fn load_config(path: &Path) -> Result<SolverConfig> {
    if !path.exists() {
        let cfg = SolverConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: SolverConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, SolverConfig::default());
        assert_eq!((cfg.grid.height, cfg.grid.width), (1000, 1000));
    }

    #[test]
    fn load_parses_partial_overrides() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("advent.toml");
        fs::write(&path, "[grid]\nheight = 10\n").expect("write config");

        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.grid.height, 10);
        assert_eq!(cfg.grid.width, 1000);
    }

    #[test]
    fn validate_rejects_zero_dimensions() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("advent.toml");
        fs::write(&path, "[grid]\nwidth = 0\n").expect("write config");

        assert!(load_config(&path).is_err());
    }
}
