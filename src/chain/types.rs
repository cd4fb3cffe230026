//! Options chain types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const SECONDS_PER_DAY: i64 = 86_400;

/// A single listed option contract
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionContract {
    pub strike: Decimal,
    pub last_price: Decimal,
    pub bid: Decimal,
    pub ask: Decimal,
    pub volume: u64,
    pub open_interest: u64,
    /// Annualized implied volatility as a decimal (0.30 = 30%)
    pub implied_volatility: f64,
    pub expiration: DateTime<Utc>,
    /// Put delta, populated by the contract filter
    #[serde(default)]
    pub delta: Option<f64>,
}

impl OptionContract {
    /// Midpoint of bid and ask, `None` when the sum is not representable
    pub fn mid(&self) -> Option<Decimal> {
        self.bid.checked_add(self.ask)?.checked_div(Decimal::TWO)
    }

    /// Bid-ask spread relative to mid, `None` when mid is not positive or
    /// cannot be computed
    pub fn spread_pct(&self) -> Option<Decimal> {
        let mid = self.mid()?;
        if mid <= Decimal::ZERO {
            return None;
        }
        self.ask.checked_sub(self.bid)?.checked_div(mid)
    }

    /// Whole days until expiration as of `as_of`
    pub fn dte(&self, as_of: DateTime<Utc>) -> u32 {
        days_until(self.expiration, as_of)
    }
}

/// Parsed options chain for one underlying
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionsData {
    pub underlying_price: Decimal,
    #[serde(default)]
    pub puts: Vec<OptionContract>,
    #[serde(default)]
    pub calls: Vec<OptionContract>,
    #[serde(default)]
    pub expiration_dates: Vec<DateTime<Utc>>,
}

impl OptionsData {
    /// Puts expiring exactly at `expiration`
    pub fn puts_expiring(&self, expiration: DateTime<Utc>) -> Vec<OptionContract> {
        self.puts
            .iter()
            .filter(|p| p.expiration == expiration)
            .cloned()
            .collect()
    }

    pub fn total_put_volume(&self) -> u64 {
        saturating_volume(&self.puts)
    }

    pub fn total_call_volume(&self) -> u64 {
        saturating_volume(&self.calls)
    }
}

fn saturating_volume(contracts: &[OptionContract]) -> u64 {
    contracts
        .iter()
        .fold(0u64, |total, c| total.saturating_add(c.volume))
}

/// Whole days from `as_of` until `expiration`, floored and never negative
pub fn days_until(expiration: DateTime<Utc>, as_of: DateTime<Utc>) -> u32 {
    let secs = (expiration - as_of).num_seconds();
    if secs <= 0 {
        return 0;
    }
    u32::try_from(secs / SECONDS_PER_DAY).unwrap_or(u32::MAX)
}

/// Fractional days from `as_of` until `expiration`, negative once expired
pub fn fractional_days_until(expiration: DateTime<Utc>, as_of: DateTime<Utc>) -> f64 {
    (expiration - as_of).num_seconds() as f64 / SECONDS_PER_DAY as f64
}
