//! Select command implementation

use super::read_json;
use crate::chain::{ContractSelector, OptionContract, OptionsData};
use crate::config::Config;
use chrono::{DateTime, Utc};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct SelectArgs {
    /// JSON file holding an options chain
    #[arg(long)]
    pub chain: PathBuf,

    /// Evaluation time (RFC 3339), defaults to now
    #[arg(long)]
    pub as_of: Option<DateTime<Utc>>,
}

impl SelectArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        match self.run(config).await? {
            Some(contract) => println!("{}", serde_json::to_string_pretty(&contract)?),
            None => println!("No target contract"),
        }
        Ok(())
    }

    /// Read the chain file and select its target contract
    pub async fn run(&self, config: &Config) -> anyhow::Result<Option<OptionContract>> {
        let chain: OptionsData = read_json(&self.chain).await?;
        let as_of = self.as_of.unwrap_or_else(Utc::now);
        tracing::info!(chain = %self.chain.display(), %as_of, "Selecting target contract");

        let selector = ContractSelector::new(config.selection, config.filter.clone());
        Ok(selector.select(&chain, as_of))
    }
}
