//! Scoring input and output types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw market data for one ticker at one point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalInput {
    /// Volatility index level
    pub vix: f64,
    /// Implied volatility of the selected contract
    pub current_iv: f64,
    /// Highest observed IV
    pub iv_high_52w: f64,
    /// Lowest observed IV
    pub iv_low_52w: f64,
    /// Daily closes, oldest first
    pub closing_prices: Vec<f64>,
    /// Aggregate put volume across the chain
    pub total_put_volume: f64,
    /// Aggregate call volume across the chain
    pub total_call_volume: f64,
    /// Mid premium of the selected put
    pub put_premium: f64,
    /// Strike of the selected put
    pub strike_price: f64,
    /// Days to expiration of the selected put
    pub dte: u32,
}

/// CSP attractiveness label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Signal {
    Strong,
    Moderate,
    Weak,
}

impl Signal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Signal::Strong => "STRONG",
            Signal::Moderate => "MODERATE",
            Signal::Weak => "WEAK",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Computed sub-scores, raw metrics and the composite
///
/// `None` marks a metric that could not be computed. It is kept as `None` so
/// that display code can render it as N/A.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalOutput {
    pub vix_score: Option<f64>,
    pub iv_rank_score: Option<f64>,
    pub rsi_score: Option<f64>,
    pub put_call_ratio_score: Option<f64>,
    pub premium_yield_score: Option<f64>,

    pub raw_vix: Option<f64>,
    pub raw_iv_rank: Option<f64>,
    pub raw_rsi: Option<f64>,
    pub raw_put_call_ratio: Option<f64>,
    pub raw_premium_yield: Option<f64>,

    /// Weighted composite in 0-100
    pub composite_score: f64,
    pub signal: Signal,
}

impl SignalOutput {
    /// Output for a ticker with no usable data: everything undefined, composite 0
    pub fn insufficient_data() -> Self {
        Self {
            vix_score: None,
            iv_rank_score: None,
            rsi_score: None,
            put_call_ratio_score: None,
            premium_yield_score: None,
            raw_vix: None,
            raw_iv_rank: None,
            raw_rsi: None,
            raw_put_call_ratio: None,
            raw_premium_yield: None,
            composite_score: 0.0,
            signal: Signal::Weak,
        }
    }

    /// Sub-scores in weight order: VIX, IV rank, RSI, P/C ratio, premium yield
    pub fn sub_scores(&self) -> [Option<f64>; 5] {
        [
            self.vix_score,
            self.iv_rank_score,
            self.rsi_score,
            self.put_call_ratio_score,
            self.premium_yield_score,
        ]
    }

    /// Number of sub-scores that contributed to the composite
    pub fn defined_count(&self) -> usize {
        self.sub_scores().iter().flatten().count()
    }
}
