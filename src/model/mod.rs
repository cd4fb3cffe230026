//! Market metric calculators
//!
//! RSI, IV rank, premium yield and put delta. All functions are pure.

mod delta;
mod iv_rank;
mod premium;
mod rsi;

pub use delta::{calculate_delta, normal_cdf, put_delta, RISK_FREE_RATE};
pub use iv_rank::calculate_iv_rank;
pub use premium::{calculate_premium_yield, put_call_ratio};
pub use rsi::{calculate_rsi, RSI_PERIOD};
