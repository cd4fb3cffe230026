//! Evaluate command implementation

use super::{format_evaluations, read_json, OutputFormat};
use crate::advisor::{Advisor, Evaluation, TickerSnapshot};
use crate::config::Config;
use chrono::{DateTime, Utc};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::task::JoinSet;

#[derive(Args, Debug)]
pub struct EvaluateArgs {
    /// Ticker snapshot JSON files
    #[arg(required = true)]
    pub snapshots: Vec<PathBuf>,

    /// VIX level applied to every snapshot
    #[arg(long)]
    pub vix: Option<f64>,

    /// Evaluation time (RFC 3339), defaults to now
    #[arg(long)]
    pub as_of: Option<DateTime<Utc>>,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

impl EvaluateArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let evals = self.run(config).await?;
        print!("{}", format_evaluations(&evals, self.format)?);
        Ok(())
    }

    /// Evaluate every snapshot concurrently, preserving input order
    pub async fn run(&self, config: &Config) -> anyhow::Result<Vec<Evaluation>> {
        let advisor = Arc::new(Advisor::new(config));
        let as_of = self.as_of.unwrap_or_else(Utc::now);
        tracing::info!(count = self.snapshots.len(), %as_of, "Evaluating snapshots");

        let mut tasks = JoinSet::new();
        for (index, path) in self.snapshots.iter().cloned().enumerate() {
            let advisor = Arc::clone(&advisor);
            let vix = self.vix;
            tasks.spawn(async move {
                let mut snapshot: TickerSnapshot = read_json(&path).await?;
                if vix.is_some() {
                    snapshot.vix = vix;
                }
                anyhow::Ok((index, advisor.evaluate(&snapshot, as_of)))
            });
        }

        let mut evals: Vec<Option<Evaluation>> = vec![None; self.snapshots.len()];
        while let Some(joined) = tasks.join_next().await {
            let (index, eval) = joined??;
            evals[index] = Some(eval);
        }

        Ok(evals.into_iter().flatten().collect())
    }
}
