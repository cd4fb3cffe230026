//! Ticker evaluation
//!
//! Turns a fetched snapshot (chain, closes, VIX) into a scored evaluation.

mod evaluate;
mod snapshot;

pub use evaluate::{evaluate, Advisor, Evaluation};
pub use snapshot::{build_signal_input, put_iv_range, ContractInfo, TickerSnapshot, DEFAULT_VIX};
