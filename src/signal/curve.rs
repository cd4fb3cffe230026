//! Piecewise-linear score curves
//!
//! Each raw metric maps onto 0-100 through three control points. Inputs beyond
//! the outer points take the outer score.

use serde::{Deserialize, Serialize};

/// Lowest possible sub-score
pub const MIN_SCORE: f64 = 0.0;
/// Highest possible sub-score
pub const MAX_SCORE: f64 = 100.0;

/// Three `(x, score)` control points with strictly ascending x
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreCurve {
    points: [(f64, f64); 3],
}

impl ScoreCurve {
    /// VIX: 15 -> 0, 20 -> 50, 30 -> 100
    pub const VIX: Self = Self::new([(15.0, 0.0), (20.0, 50.0), (30.0, 100.0)]);
    /// IV rank: identity on 0-100
    pub const IV_RANK: Self = Self::new([(0.0, 0.0), (50.0, 50.0), (100.0, 100.0)]);
    /// RSI, inverted: 20 -> 100, 40 -> 50, 70 -> 0
    pub const RSI: Self = Self::new([(20.0, 100.0), (40.0, 50.0), (70.0, 0.0)]);
    /// Put/call ratio: 0.5 -> 0, 1.0 -> 50, 1.5 -> 100
    pub const PUT_CALL_RATIO: Self = Self::new([(0.5, 0.0), (1.0, 50.0), (1.5, 100.0)]);
    /// Annualized premium yield in percent: 0 -> 0, 15 -> 50, 30 -> 100
    pub const PREMIUM_YIELD: Self = Self::new([(0.0, 0.0), (15.0, 50.0), (30.0, 100.0)]);

    /// Create a curve from control points ordered by x
    pub const fn new(points: [(f64, f64); 3]) -> Self {
        Self { points }
    }

    /// Control points
    pub fn points(&self) -> &[(f64, f64); 3] {
        &self.points
    }

    /// Whether x strictly increases across the control points
    pub fn is_ascending(&self) -> bool {
        let [(x0, _), (x1, _), (x2, _)] = self.points;
        x0 < x1 && x1 < x2
    }

    /// Score a raw value
    pub fn score(&self, x: f64) -> f64 {
        interpolate(x, &self.points)
    }
}

/// Linear interpolation through three control points, clamped to 0-100
pub fn interpolate(x: f64, points: &[(f64, f64); 3]) -> f64 {
    let [(x0, y0), (x1, y1), (x2, y2)] = *points;

    let score = if x <= x0 {
        y0
    } else if x <= x1 {
        y0 + (x - x0) / (x1 - x0) * (y1 - y0)
    } else if x <= x2 {
        y1 + (x - x1) / (x2 - x1) * (y2 - y1)
    } else {
        y2
    };

    score.clamp(MIN_SCORE, MAX_SCORE)
}

/// The five curves used by the composite scorer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreCurves {
    pub vix: ScoreCurve,
    pub iv_rank: ScoreCurve,
    pub rsi: ScoreCurve,
    pub put_call_ratio: ScoreCurve,
    pub premium_yield: ScoreCurve,
}

impl ScoreCurves {
    /// Name and curve pairs, for validation and display
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ScoreCurve)> {
        [
            ("vix", &self.vix),
            ("iv_rank", &self.iv_rank),
            ("rsi", &self.rsi),
            ("put_call_ratio", &self.put_call_ratio),
            ("premium_yield", &self.premium_yield),
        ]
        .into_iter()
    }
}

impl Default for ScoreCurves {
    fn default() -> Self {
        Self {
            vix: ScoreCurve::VIX,
            iv_rank: ScoreCurve::IV_RANK,
            rsi: ScoreCurve::RSI,
            put_call_ratio: ScoreCurve::PUT_CALL_RATIO,
            premium_yield: ScoreCurve::PREMIUM_YIELD,
        }
    }
}

/// Score a VIX level
pub fn score_vix(vix: f64) -> f64 {
    ScoreCurve::VIX.score(vix)
}

/// Score an IV rank (0-100)
pub fn score_iv_rank(iv_rank: f64) -> f64 {
    ScoreCurve::IV_RANK.score(iv_rank)
}

/// Score an RSI reading; overbought readings score low
pub fn score_rsi(rsi: f64) -> f64 {
    ScoreCurve::RSI.score(rsi)
}

/// Score a put/call volume ratio
pub fn score_put_call_ratio(pcr: f64) -> f64 {
    ScoreCurve::PUT_CALL_RATIO.score(pcr)
}

/// Score an annualized premium yield in percent
pub fn score_premium_yield(annualized_pct: f64) -> f64 {
    ScoreCurve::PREMIUM_YIELD.score(annualized_pct)
}
