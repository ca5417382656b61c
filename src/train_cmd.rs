use anyhow::{Context, Result};
use tracing::info;

use hermes_corpus::read_corpus;
use hermes_hmm::estimate_model;

use crate::cli::TrainArgs;
use crate::config::HermesConfig;
use crate::convert;

/// Run the `train` subcommand: corpus -> estimator -> model JSON.
pub fn run(args: TrainArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => HermesConfig::load(path)?,
        None => HermesConfig::default(),
    };
    let estimator_cfg = convert::build_estimator_config(&config.train)?;

    info!(path = %args.corpus.display(), "reading corpus");
    let sentences = read_corpus(&args.corpus)
        .with_context(|| format!("failed to read corpus: {}", args.corpus.display()))?;

    let model = estimate_model(&sentences, &estimator_cfg).context("estimation failed")?;
    info!(
        n_states = model.n_states(),
        n_symbols = model.n_symbols(),
        "model estimated"
    );

    let json = serde_json::to_string_pretty(&model).context("failed to serialise model")?;
    std::fs::write(&args.output, json)
        .with_context(|| format!("failed to write model: {}", args.output.display()))?;
    info!(path = %args.output.display(), "model written");

    Ok(())
}
