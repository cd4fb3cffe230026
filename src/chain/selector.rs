//! Target contract selection
//!
//! Picks the expiry closest to the target DTE inside the allowed window, then
//! the surviving put whose strike is nearest the underlying price.

use super::filter::{ContractFilter, FilterConfig};
use super::types::fractional_days_until;
use super::{OptionContract, OptionsData};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Expiry window for target selection, in days to expiration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    pub min_dte: f64,
    pub max_dte: f64,
    pub target_dte: f64,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            min_dte: 21.0,
            max_dte: 45.0,
            target_dte: 30.0,
        }
    }
}

/// Selects the single target put for an underlying
#[derive(Debug, Clone, Default)]
pub struct ContractSelector {
    config: SelectionConfig,
    filter: ContractFilter,
}

impl ContractSelector {
    pub fn new(config: SelectionConfig, filter: FilterConfig) -> Self {
        Self {
            config,
            filter: ContractFilter::new(filter),
        }
    }

    /// Expiration inside the DTE window closest to the target DTE
    ///
    /// On equal distance the earlier entry in `expiration_dates` wins.
    pub fn best_expiration(
        &self,
        chain: &OptionsData,
        as_of: DateTime<Utc>,
    ) -> Option<DateTime<Utc>> {
        let mut best: Option<(DateTime<Utc>, f64)> = None;

        for &expiration in &chain.expiration_dates {
            let dte = fractional_days_until(expiration, as_of);
            if dte < self.config.min_dte || dte > self.config.max_dte {
                continue;
            }
            let distance = (dte - self.config.target_dte).abs();
            if best.map_or(true, |(_, d)| distance < d) {
                best = Some((expiration, distance));
            }
        }

        best.map(|(expiration, _)| expiration)
    }

    /// Select the target contract, or `None` when nothing qualifies
    ///
    /// Among filtered puts of the chosen expiry the strike nearest the
    /// underlying wins. Equidistant strikes resolve to the first one in chain
    /// order.
    pub fn select(&self, chain: &OptionsData, as_of: DateTime<Utc>) -> Option<OptionContract> {
        let Some(expiration) = self.best_expiration(chain, as_of) else {
            tracing::debug!(
                expirations = chain.expiration_dates.len(),
                "No expiration inside DTE window"
            );
            return None;
        };

        let candidates = chain.puts_expiring(expiration);
        let survivors = self
            .filter
            .apply(&candidates, chain.underlying_price, as_of);

        tracing::debug!(
            %expiration,
            candidates = candidates.len(),
            survivors = survivors.len(),
            "Filtered puts for target expiration"
        );

        let mut best: Option<OptionContract> = None;
        for contract in survivors {
            let distance = (contract.strike - chain.underlying_price).abs();
            let closer = best
                .as_ref()
                .map_or(true, |b| distance < (b.strike - chain.underlying_price).abs());
            if closer {
                best = Some(contract);
            }
        }
        best
    }
}

/// Select the target contract with the default window and filters
pub fn select_target_contract(
    chain: &OptionsData,
    as_of: DateTime<Utc>,
) -> Option<OptionContract> {
    ContractSelector::default().select(chain, as_of)
}
