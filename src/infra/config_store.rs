// ============================================================
// Layer 6 — Config Store
// ============================================================
// Loads and saves AnalysisConfig as pretty JSON.

use anyhow::{Context, Result};
use std::path::Path;

use crate::application::config::AnalysisConfig;

pub struct ConfigStore;

impl ConfigStore {
    /// Read a config file. Missing fields take their defaults;
    /// a missing or malformed file is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<AnalysisConfig> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read config '{}'", path.display()))?;
        let cfg: AnalysisConfig = serde_json::from_str(&text)
            .with_context(|| format!("Invalid config JSON in '{}'", path.display()))?;
        tracing::info!("Loaded config from '{}'", path.display());
        Ok(cfg)
    }

    /// `load()` when a path was given, defaults otherwise
    pub fn load_or_default(path: Option<&str>) -> Result<AnalysisConfig> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(AnalysisConfig::default()),
        }
    }

    pub fn save(path: impl AsRef<Path>, cfg: &AnalysisConfig) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(cfg)?;
        std::fs::write(path, json)
            .with_context(|| format!("Cannot write config '{}'", path.display()))?;
        tracing::debug!("Saved config to '{}'", path.display());
        Ok(())
    }
}
