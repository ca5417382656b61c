use anyhow::{Context, Result};

use hermes_hmm::{Decoded, HmmModel, decode_tokens};

use crate::cli::TraceArgs;
use crate::convert;

/// Run the `trace` subcommand: decode one sequence and print the trellis.
pub fn run(args: TraceArgs) -> Result<()> {
    let model = convert::load_model(&args.model)?;
    let tokens: Vec<&str> = args.tokens.iter().map(String::as_str).collect();
    let decoded = decode_tokens(&model, &tokens).context("decoding failed")?;

    for row in format_trellis(&model, &decoded, &tokens) {
        println!("{row}");
    }
    println!();
    println!(
        "path: {}  (p = {:.6e})",
        model.state_names(&decoded.path).join(" -> "),
        decoded.prob
    );

    Ok(())
}

/// Renders the trellis as one header row plus one row per state.
///
/// Pure presentation over the trellis read accessors; column width adapts to
/// the longest token and state name.
fn format_trellis(model: &HmmModel, decoded: &Decoded, tokens: &[&str]) -> Vec<String> {
    let tr = &decoded.trellis;
    let label_width = model
        .states()
        .iter()
        .map(str::len)
        .max()
        .unwrap_or(0)
        .max("state".len());
    let col_width = tokens.iter().map(|t| t.len()).max().unwrap_or(0).max(9);

    let mut rows = Vec::with_capacity(tr.n_states() + 1);
    let header: Vec<String> = tokens
        .iter()
        .map(|t| format!("{t:>col_width$}"))
        .collect();
    rows.push(format!("{:<label_width$}  {}", "state", header.join("  ")));

    for s in 0..tr.n_states() {
        let cells: Vec<String> = (0..tr.len())
            .map(|t| format!("{:>col_width$.5}", tr.prob(t, s)))
            .collect();
        rows.push(format!(
            "{:<label_width$}  {}",
            model.states().symbol(s),
            cells.join("  ")
        ));
    }
    rows
}
