//! Per-ticker market snapshot and signal input assembly

use crate::chain::{OptionContract, OptionsData};
use crate::signal::SignalInput;
use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// VIX level assumed when none is available
pub const DEFAULT_VIX: f64 = 20.0;

/// Everything fetched for one ticker in a refresh cycle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickerSnapshot {
    pub ticker: String,
    pub chain: OptionsData,
    /// Daily closes, oldest first
    #[serde(default)]
    pub closing_prices: Vec<f64>,
    /// VIX level at fetch time, if it could be fetched
    #[serde(default)]
    pub vix: Option<f64>,
}

/// Selected contract details for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractInfo {
    pub strike: rust_decimal::Decimal,
    pub expiration: DateTime<Utc>,
    pub dte: u32,
    pub delta: Option<f64>,
}

impl ContractInfo {
    pub fn from_contract(contract: &OptionContract, as_of: DateTime<Utc>) -> Self {
        Self {
            strike: contract.strike,
            expiration: contract.expiration,
            dte: contract.dte(as_of),
            delta: contract.delta,
        }
    }
}

/// Observed IV range: min and max over the target IV and every positive put IV
///
/// The range comes from the current chain, not a year of IV history.
pub fn put_iv_range(chain: &OptionsData, current_iv: f64) -> (f64, f64) {
    chain
        .puts
        .iter()
        .map(|p| p.implied_volatility)
        .filter(|&iv| iv > 0.0)
        .fold((current_iv, current_iv), |(low, high), iv| {
            (low.min(iv), high.max(iv))
        })
}

/// Build the scoring input for a selected target contract
pub fn build_signal_input(
    chain: &OptionsData,
    target: &OptionContract,
    closing_prices: &[f64],
    vix: f64,
    as_of: DateTime<Utc>,
) -> SignalInput {
    let current_iv = target.implied_volatility;
    let (iv_low_52w, iv_high_52w) = put_iv_range(chain, current_iv);

    SignalInput {
        vix,
        current_iv,
        iv_high_52w,
        iv_low_52w,
        closing_prices: closing_prices.to_vec(),
        total_put_volume: chain.total_put_volume() as f64,
        total_call_volume: chain.total_call_volume() as f64,
        put_premium: target.mid().and_then(|m| m.to_f64()).unwrap_or(0.0),
        strike_price: target.strike.to_f64().unwrap_or(0.0),
        dte: target.dte(as_of),
    }
}
