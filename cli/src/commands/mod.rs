pub mod analyze;
pub mod config;
pub mod explain;
pub mod progress;
pub mod ui;
pub mod utils;

pub use analyze::{handle_analyze, AnalyzeArgs};
pub use config::{handle_config, ConfigCommand};
pub use explain::{handle_explain, ExplainArgs};

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "repolens")]
#[command(about = "LLM-generated overviews of source repositories")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Project configuration file (defaults to .repolens.{toml,yml,yaml,json})
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Debug logging and intermediate responses
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Summarize a repository into a Markdown overview
    Analyze(AnalyzeArgs),
    /// Explain a single file
    Explain(ExplainArgs),
    /// Manage LLM endpoint profiles
    #[command(subcommand)]
    Config(ConfigCommand),
}
