//! Composite CSP score
//!
//! Combines the five sub-scores with fixed weights. Undefined sub-scores drop
//! out of both the weighted sum and the weight total, so the remaining weights
//! are scaled back up to 1.

use super::curve::{ScoreCurves, MAX_SCORE, MIN_SCORE};
use super::{Signal, SignalInput, SignalOutput};
use crate::model::{calculate_iv_rank, calculate_premium_yield, calculate_rsi, put_call_ratio};
use serde::{Deserialize, Serialize};

/// Relative weight of each sub-score; must sum to 1
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalWeights {
    pub vix: f64,
    pub iv_rank: f64,
    pub rsi: f64,
    pub put_call_ratio: f64,
    pub premium_yield: f64,
}

impl SignalWeights {
    /// Weights in sub-score order: VIX, IV rank, RSI, P/C ratio, premium yield
    pub fn as_array(&self) -> [f64; 5] {
        [
            self.vix,
            self.iv_rank,
            self.rsi,
            self.put_call_ratio,
            self.premium_yield,
        ]
    }

    pub fn total(&self) -> f64 {
        self.as_array().iter().sum()
    }
}

impl Default for SignalWeights {
    fn default() -> Self {
        Self {
            vix: 0.20,
            iv_rank: 0.25,
            rsi: 0.20,
            put_call_ratio: 0.15,
            premium_yield: 0.20,
        }
    }
}

/// Composite score boundaries between labels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassificationThresholds {
    /// Composite strictly above this is STRONG
    pub strong_above: f64,
    /// Composite at or above this (and not STRONG) is MODERATE
    pub moderate_from: f64,
}

impl ClassificationThresholds {
    pub fn classify(&self, composite: f64) -> Signal {
        if composite > self.strong_above {
            Signal::Strong
        } else if composite >= self.moderate_from {
            Signal::Moderate
        } else {
            Signal::Weak
        }
    }
}

impl Default for ClassificationThresholds {
    fn default() -> Self {
        Self {
            strong_above: 70.0,
            moderate_from: 50.0,
        }
    }
}

/// Everything the composite scorer needs
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub weights: SignalWeights,
    pub curves: ScoreCurves,
    pub thresholds: ClassificationThresholds,
}

/// Weighted mean over the defined scores
///
/// Returns 0 when no score is defined (or all defined weights are zero).
pub fn weighted_composite(weighted: &[(f64, Option<f64>)]) -> f64 {
    let (sum, total_weight) = weighted
        .iter()
        .filter_map(|&(weight, score)| score.map(|s| (weight, s)))
        .fold((0.0, 0.0), |(sum, total), (weight, score)| {
            (sum + weight * score, total + weight)
        });

    if total_weight > 0.0 {
        (sum / total_weight).clamp(MIN_SCORE, MAX_SCORE)
    } else {
        0.0
    }
}

/// Stateless composite scorer
#[derive(Debug, Clone, Default)]
pub struct CompositeScorer {
    config: ScoringConfig,
}

impl CompositeScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Compute every sub-score, the composite and its label
    pub fn compute(&self, input: &SignalInput) -> SignalOutput {
        let curves = &self.config.curves;

        let iv_rank = calculate_iv_rank(input.current_iv, input.iv_low_52w, input.iv_high_52w);
        let rsi = calculate_rsi(&input.closing_prices);
        let pcr = put_call_ratio(input.total_put_volume, input.total_call_volume);
        let premium_yield =
            calculate_premium_yield(input.put_premium, input.strike_price, input.dte);

        let vix_score = curves.vix.score(input.vix);
        let iv_rank_score = iv_rank.map(|r| curves.iv_rank.score(r));
        let rsi_score = rsi.map(|r| curves.rsi.score(r));
        let pcr_score = curves.put_call_ratio.score(pcr);
        let yield_score = curves.premium_yield.score(premium_yield);

        let scores = [
            Some(vix_score),
            iv_rank_score,
            rsi_score,
            Some(pcr_score),
            Some(yield_score),
        ];
        let weighted: Vec<(f64, Option<f64>)> = self
            .config
            .weights
            .as_array()
            .into_iter()
            .zip(scores)
            .collect();

        let composite_score = weighted_composite(&weighted);
        let signal = self.config.thresholds.classify(composite_score);

        tracing::debug!(
            composite = composite_score,
            signal = %signal,
            defined = scores.iter().flatten().count(),
            iv_rank_defined = iv_rank.is_some(),
            rsi_defined = rsi.is_some(),
            "Computed CSP signals"
        );

        SignalOutput {
            vix_score: Some(vix_score),
            iv_rank_score,
            rsi_score,
            put_call_ratio_score: Some(pcr_score),
            premium_yield_score: Some(yield_score),
            raw_vix: Some(input.vix),
            raw_iv_rank: iv_rank,
            raw_rsi: rsi,
            raw_put_call_ratio: Some(pcr),
            raw_premium_yield: Some(premium_yield),
            composite_score,
            signal,
        }
    }
}

/// Compute signals with the default weights, curves and thresholds
pub fn compute_signals(input: &SignalInput) -> SignalOutput {
    CompositeScorer::default().compute(input)
}
