//! Score command implementation

use super::{format_output, read_json, OutputFormat};
use crate::config::Config;
use crate::signal::{CompositeScorer, SignalInput, SignalOutput};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// JSON file holding a signal input
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

impl ScoreArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let output = self.run(config).await?;
        print!("{}", format_output(&output, self.format)?);
        Ok(())
    }

    /// Read the input file and score it
    pub async fn run(&self, config: &Config) -> anyhow::Result<SignalOutput> {
        let input: SignalInput = read_json(&self.input).await?;
        tracing::info!(input = %self.input.display(), "Scoring signal input");

        Ok(CompositeScorer::new(config.scoring).compute(&input))
    }
}
