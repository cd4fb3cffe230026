//! Contract quality filtering
//!
//! Drops contracts that are illiquid, too wide, or outside the CSP delta band.

use super::OptionContract;
use crate::model::put_delta;
use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Result of checking one contract
#[derive(Debug, Clone, PartialEq)]
pub enum FilterResult {
    /// Contract passed; carries its computed put delta
    Pass(f64),
    /// Contract rejected
    Reject(RejectReason),
}

/// Reason a contract was rejected
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RejectReason {
    /// Volume below minimum
    LowVolume(u64),
    /// Open interest below minimum
    LowOpenInterest(u64),
    /// Bid below minimum
    BidTooLow(Decimal),
    /// Mid price is not positive or not representable
    NoMidPrice,
    /// Bid-ask spread wider than allowed fraction of mid
    SpreadTooWide(Decimal),
    /// Put delta outside the configured band
    DeltaOutOfRange(f64),
}

/// Thresholds for contract filtering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub min_volume: u64,
    pub min_open_interest: u64,
    pub min_bid: Decimal,
    /// Maximum `(ask - bid) / mid`
    pub max_spread_pct: Decimal,
    /// Most negative acceptable put delta
    pub min_delta: f64,
    /// Least negative acceptable put delta
    pub max_delta: f64,
    /// Annual rate used in the delta approximation
    pub risk_free_rate: f64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            min_volume: 10,
            min_open_interest: 10,
            min_bid: dec!(0.10),
            max_spread_pct: dec!(0.15),
            min_delta: -0.50,
            max_delta: -0.20,
            risk_free_rate: crate::model::RISK_FREE_RATE,
        }
    }
}

/// Contract filter chain
#[derive(Debug, Clone, Default)]
pub struct ContractFilter {
    config: FilterConfig,
}

impl ContractFilter {
    pub fn new(config: FilterConfig) -> Self {
        Self { config }
    }

    /// Check a single contract against every filter
    pub fn check(
        &self,
        contract: &OptionContract,
        underlying_price: Decimal,
        as_of: DateTime<Utc>,
    ) -> FilterResult {
        let config = &self.config;

        if contract.volume < config.min_volume {
            return FilterResult::Reject(RejectReason::LowVolume(contract.volume));
        }
        if contract.open_interest < config.min_open_interest {
            return FilterResult::Reject(RejectReason::LowOpenInterest(contract.open_interest));
        }
        if contract.bid < config.min_bid {
            return FilterResult::Reject(RejectReason::BidTooLow(contract.bid));
        }

        let Some(spread) = contract.spread_pct() else {
            return FilterResult::Reject(RejectReason::NoMidPrice);
        };
        if spread > config.max_spread_pct {
            return FilterResult::Reject(RejectReason::SpreadTooWide(spread));
        }

        // Unconvertible prices become 0, which yields a zero delta and a rejection
        let delta = put_delta(
            underlying_price.to_f64().unwrap_or(0.0),
            contract.strike.to_f64().unwrap_or(0.0),
            contract.implied_volatility,
            contract.dte(as_of),
            config.risk_free_rate,
        );
        // A NaN delta falls outside every band
        if !(config.min_delta..=config.max_delta).contains(&delta) {
            return FilterResult::Reject(RejectReason::DeltaOutOfRange(delta));
        }

        FilterResult::Pass(delta)
    }

    /// Keep contracts that pass every filter, with `delta` populated
    pub fn apply(
        &self,
        contracts: &[OptionContract],
        underlying_price: Decimal,
        as_of: DateTime<Utc>,
    ) -> Vec<OptionContract> {
        contracts
            .iter()
            .filter_map(|c| match self.check(c, underlying_price, as_of) {
                FilterResult::Pass(delta) => Some(OptionContract {
                    delta: Some(delta),
                    ..c.clone()
                }),
                FilterResult::Reject(reason) => {
                    tracing::trace!(strike = %c.strike, ?reason, "Contract rejected");
                    None
                }
            })
            .collect()
    }
}

/// Filter contracts with the default thresholds
pub fn filter_contracts(
    contracts: &[OptionContract],
    underlying_price: Decimal,
    as_of: DateTime<Utc>,
) -> Vec<OptionContract> {
    ContractFilter::default().apply(contracts, underlying_price, as_of)
}
