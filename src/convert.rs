//! Mapping TOML configuration into library configs, and model persistence.

use std::path::Path;

use anyhow::{Context, Result, bail};

use hermes_hmm::{EstimatorConfig, HmmModel, Smoothing};

use crate::config::TrainToml;

/// Builds an [`EstimatorConfig`] from the `[train]` TOML section.
pub fn build_estimator_config(toml: &TrainToml) -> Result<EstimatorConfig> {
    let smoothing = match toml.smoothing.as_str() {
        "none" => Smoothing::None,
        "additive" => Smoothing::Additive(toml.epsilon),
        other => bail!("unknown smoothing '{other}' (expected 'none' or 'additive')"),
    };
    let config = EstimatorConfig::new().with_smoothing(smoothing);
    config.validate()?;
    Ok(config)
}

/// Loads and re-validates a model from a JSON file.
pub fn load_model(path: &Path) -> Result<HmmModel> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read model: {}", path.display()))?;
    let model: HmmModel = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse model: {}", path.display()))?;
    model
        .validate()
        .with_context(|| format!("model failed validation: {}", path.display()))?;
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn additive_default() {
        let config = build_estimator_config(&TrainToml::default()).unwrap();
        assert_eq!(config.smoothing(), Smoothing::Additive(1.0));
    }

    #[test]
    fn none_smoothing() {
        let toml = TrainToml {
            smoothing: "none".to_string(),
            epsilon: 1.0,
        };
        let config = build_estimator_config(&toml).unwrap();
        assert_eq!(config.smoothing(), Smoothing::None);
    }

    #[test]
    fn unknown_smoothing_rejected() {
        let toml = TrainToml {
            smoothing: "kneser-ney".to_string(),
            epsilon: 1.0,
        };
        assert!(build_estimator_config(&toml).is_err());
    }

    #[test]
    fn bad_epsilon_rejected() {
        let toml = TrainToml {
            smoothing: "additive".to_string(),
            epsilon: 0.0,
        };
        assert!(build_estimator_config(&toml).is_err());
    }
}
