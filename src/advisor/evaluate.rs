//! Single-ticker evaluation

use super::snapshot::{build_signal_input, ContractInfo, TickerSnapshot, DEFAULT_VIX};
use crate::chain::ContractSelector;
use crate::config::Config;
use crate::signal::{CompositeScorer, SignalOutput};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Scoring result for one ticker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub ticker: String,
    /// Target contract, `None` when the chain had nothing tradeable
    pub contract: Option<ContractInfo>,
    pub output: SignalOutput,
}

/// Contract selection plus composite scoring under one configuration
#[derive(Debug, Clone, Default)]
pub struct Advisor {
    selector: ContractSelector,
    scorer: CompositeScorer,
}

impl Advisor {
    pub fn new(config: &Config) -> Self {
        Self {
            selector: ContractSelector::new(config.selection, config.filter.clone()),
            scorer: CompositeScorer::new(config.scoring),
        }
    }

    /// Select a target contract and score it
    ///
    /// A chain with no qualifying contract produces
    /// [`SignalOutput::insufficient_data`].
    pub fn evaluate(&self, snapshot: &TickerSnapshot, as_of: DateTime<Utc>) -> Evaluation {
        let Some(target) = self.selector.select(&snapshot.chain, as_of) else {
            tracing::debug!(ticker = %snapshot.ticker, "No target contract");
            return Evaluation {
                ticker: snapshot.ticker.clone(),
                contract: None,
                output: SignalOutput::insufficient_data(),
            };
        };

        let vix = snapshot.vix.unwrap_or(DEFAULT_VIX);
        let input = build_signal_input(
            &snapshot.chain,
            &target,
            &snapshot.closing_prices,
            vix,
            as_of,
        );
        let output = self.scorer.compute(&input);

        tracing::debug!(
            ticker = %snapshot.ticker,
            strike = %target.strike,
            dte = input.dte,
            composite = output.composite_score,
            signal = %output.signal,
            "Evaluated ticker"
        );

        Evaluation {
            ticker: snapshot.ticker.clone(),
            contract: Some(ContractInfo::from_contract(&target, as_of)),
            output,
        }
    }
}

/// Evaluate a snapshot with the default configuration
pub fn evaluate(snapshot: &TickerSnapshot, as_of: DateTime<Utc>) -> Evaluation {
    Advisor::default().evaluate(snapshot, as_of)
}
