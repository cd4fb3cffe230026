//! CSP signal scoring
//!
//! Maps raw market metrics to 0-100 sub-scores and combines them into a
//! composite score with a STRONG / MODERATE / WEAK label.

mod composite;
mod curve;
mod types;

pub use composite::{
    compute_signals, weighted_composite, ClassificationThresholds, CompositeScorer,
    ScoringConfig, SignalWeights,
};
pub use curve::{
    interpolate, score_iv_rank, score_premium_yield, score_put_call_ratio, score_rsi, score_vix,
    ScoreCurve, ScoreCurves, MAX_SCORE, MIN_SCORE,
};
pub use types::{Signal, SignalInput, SignalOutput};
