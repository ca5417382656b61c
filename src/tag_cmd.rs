use std::io::{BufRead, BufReader, Read};

use anyhow::{Context, Result};
use tracing::{info, warn};

use hermes_hmm::{HmmError, HmmModel, decode_tokens};

use crate::cli::TagArgs;
use crate::convert;

/// Run the `tag` subcommand: decode one sentence per input line.
///
/// A line with an out-of-vocabulary token is reported and skipped; the
/// remaining lines are still tagged.
pub fn run(args: TagArgs) -> Result<()> {
    let model = convert::load_model(&args.model)?;
    info!(
        n_states = model.n_states(),
        n_symbols = model.n_symbols(),
        "model loaded"
    );

    let reader: Box<dyn Read> = match &args.input {
        Some(path) => Box::new(
            std::fs::File::open(path)
                .with_context(|| format!("failed to open input: {}", path.display()))?,
        ),
        None => Box::new(std::io::stdin()),
    };

    for line in BufReader::new(reader).lines() {
        let line = line.context("failed to read input line")?;
        if line.trim().is_empty() {
            continue;
        }
        match tag_line(&model, &line) {
            Ok(output) => println!("{output}"),
            Err(HmmError::UnknownObservation { symbol }) => {
                warn!(token = %symbol, line = %line, "skipping line with out-of-vocabulary token");
            }
            Err(e) => return Err(e).context("decoding failed"),
        }
    }

    Ok(())
}

/// Tags one whitespace-tokenized sentence as `word/TAG ...  (p = ...)`.
fn tag_line(model: &HmmModel, line: &str) -> Result<String, HmmError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let decoded = decode_tokens(model, &tokens)?;
    let tagged: Vec<String> = tokens
        .iter()
        .zip(model.state_names(&decoded.path))
        .map(|(word, tag)| format!("{word}/{tag}"))
        .collect();
    Ok(format!("{}  (p = {:.6e})", tagged.join(" "), decoded.prob))
}
