use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Hermes hidden Markov model tagger.
#[derive(Parser)]
#[command(
    name = "hermes",
    version,
    about = "Hidden Markov model part-of-speech tagger"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Estimate model parameters from a tagged corpus.
    Train(TrainArgs),
    /// Tag sentences with a trained model.
    Tag(TagArgs),
    /// Decode one sequence and print the full Viterbi trellis.
    Trace(TraceArgs),
}

/// Arguments for the `train` subcommand.
#[derive(clap::Args)]
pub struct TrainArgs {
    /// Path to the tab-separated word/tag corpus.
    #[arg(short = 'i', long)]
    pub corpus: PathBuf,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path for the trained model JSON.
    #[arg(short, long, default_value = "model.json")]
    pub output: PathBuf,
}

/// Arguments for the `tag` subcommand.
#[derive(clap::Args)]
pub struct TagArgs {
    /// Path to a trained model JSON file.
    #[arg(short, long)]
    pub model: PathBuf,

    /// File of sentences to tag, one per line; stdin if omitted.
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

/// Arguments for the `trace` subcommand.
#[derive(clap::Args)]
pub struct TraceArgs {
    /// Path to a trained model JSON file.
    #[arg(short, long)]
    pub model: PathBuf,

    /// Observation tokens to decode.
    #[arg(required = true)]
    pub tokens: Vec<String>,
}
