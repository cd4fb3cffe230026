//! CLI interface for csp-advisor
//!
//! Provides subcommands for:
//! - `score`: Score a prepared signal input
//! - `select`: Pick the target put from an options chain
//! - `evaluate`: Select and score one or more ticker snapshots
//! - `config`: Show the effective configuration

mod evaluate;
mod format;
mod score;
mod select;

pub use evaluate::EvaluateArgs;
pub use format::{format_evaluations, format_output, OutputFormat};
pub use score::ScoreArgs;
pub use select::SelectArgs;

use crate::telemetry::LogFormat;
use clap::{Parser, Subcommand};
use std::path::Path;

#[derive(Parser, Debug)]
#[command(name = "csp-advisor")]
#[command(about = "Cash-secured put attractiveness scoring")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml", global = true)]
    pub config: String,

    /// Log output format (pretty or json), overrides the config file
    #[arg(long, global = true)]
    pub log_format: Option<LogFormat>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a prepared signal input
    Score(ScoreArgs),
    /// Select the target put from an options chain
    Select(SelectArgs),
    /// Select and score ticker snapshots
    Evaluate(EvaluateArgs),
    /// Show the effective configuration
    Config,
}

/// Read and deserialize a JSON file
pub(crate) async fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
    serde_json::from_str(&content)
        .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))
}
