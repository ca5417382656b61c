use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level Hermes configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct HermesConfig {
    /// Training settings.
    #[serde(default)]
    pub train: TrainToml,
}

/// `[train]` section of the configuration file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrainToml {
    /// Zero-count policy: "additive" or "none".
    #[serde(default = "default_smoothing")]
    pub smoothing: String,
    /// Pseudo-count for additive smoothing.
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,
}

fn default_smoothing() -> String {
    "additive".to_string()
}
fn default_epsilon() -> f64 {
    1.0
}

impl Default for TrainToml {
    fn default() -> Self {
        Self {
            smoothing: default_smoothing(),
            epsilon: default_epsilon(),
        }
    }
}

impl HermesConfig {
    /// Loads configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("failed to parse config: {}", path.display()))
    }
}
