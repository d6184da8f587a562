//! CLI argument definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mediasearch")]
#[command(
    author,
    version,
    about = "Compute learning-to-rank feature parameters for media search queries"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "cli")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the feature parameters of a nested JSON query
    Features(FeaturesArgs),

    /// List available LTR models
    Models,

    /// Show the effective configuration
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct FeaturesArgs {
    /// File containing the query as JSON ("-" or omitted reads stdin)
    pub file: Option<PathBuf>,

    /// Query as an inline JSON string
    #[arg(short, long, conflicts_with = "file")]
    pub query: Option<String>,

    /// Language code passed to the model
    #[arg(short, long, env = "MEDIASEARCH_LANGUAGE")]
    pub language: Option<String>,

    /// LTR model version
    #[arg(short, long, env = "MEDIASEARCH_LTR_MODEL")]
    pub model: Option<String>,

    /// Only print parameters holding a real term
    #[arg(long)]
    pub terms_only: bool,
}

#[derive(Args)]
pub struct ConfigArgs {
    /// Print the config file path instead of its contents
    #[arg(long)]
    pub path: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Cli,
    Json,
    Csv,
}
