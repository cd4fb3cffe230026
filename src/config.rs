//! Configuration types for csp-advisor

use crate::chain::{FilterConfig, SelectionConfig};
use crate::signal::{ScoreCurve, ScoringConfig};
use crate::telemetry::LogFormat;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Allowed deviation of the weight total from 1
const WEIGHT_TOLERANCE: f64 = 1e-9;

/// Root configuration structure
///
/// Every section falls back to its defaults when absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub filter: FilterConfig,
    pub selection: SelectionConfig,
    pub telemetry: TelemetryConfig,
}

/// Telemetry configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

/// Invalid configuration values
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be a finite number")]
    NonFinite(&'static str),
    #[error("Signal weights must sum to 1.0, got {0}")]
    WeightsNotNormalized(f64),
    #[error("Signal weight for {0} is negative")]
    NegativeWeight(&'static str),
    #[error("Score curve {0} must have strictly ascending control points")]
    CurveNotAscending(&'static str),
    #[error("Delta band [{min}, {max}] must be ordered and negative")]
    InvalidDeltaBand { min: f64, max: f64 },
    #[error("DTE window requires min {min} <= target {target} <= max {max}")]
    InvalidDteWindow { min: f64, target: f64, max: f64 },
    #[error("Classification thresholds require moderate {moderate} <= strong {strong}")]
    InvalidThresholds { moderate: f64, strong: f64 },
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check internal consistency of every section
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.check_finite()?;

        let weights = &self.scoring.weights;
        let named = [
            ("vix", weights.vix),
            ("iv_rank", weights.iv_rank),
            ("rsi", weights.rsi),
            ("put_call_ratio", weights.put_call_ratio),
            ("premium_yield", weights.premium_yield),
        ];
        if let Some((name, _)) = named.iter().find(|(_, w)| *w < 0.0) {
            return Err(ConfigError::NegativeWeight(*name));
        }
        let total = weights.total();
        if (total - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(ConfigError::WeightsNotNormalized(total));
        }

        if let Some((name, _)) = self.scoring.curves.iter().find(|(_, c)| !c.is_ascending()) {
            return Err(ConfigError::CurveNotAscending(name));
        }

        let filter = &self.filter;
        if !(filter.min_delta <= filter.max_delta && filter.max_delta < 0.0) {
            return Err(ConfigError::InvalidDeltaBand {
                min: filter.min_delta,
                max: filter.max_delta,
            });
        }

        let sel = &self.selection;
        if !(sel.min_dte <= sel.target_dte && sel.target_dte <= sel.max_dte) {
            return Err(ConfigError::InvalidDteWindow {
                min: sel.min_dte,
                target: sel.target_dte,
                max: sel.max_dte,
            });
        }

        let thresholds = &self.scoring.thresholds;
        if thresholds.moderate_from > thresholds.strong_above {
            return Err(ConfigError::InvalidThresholds {
                moderate: thresholds.moderate_from,
                strong: thresholds.strong_above,
            });
        }

        Ok(())
    }

    /// Reject NaN and infinite values, which slip through ordered comparisons
    fn check_finite(&self) -> Result<(), ConfigError> {
        let weights = &self.scoring.weights;
        let thresholds = &self.scoring.thresholds;
        let filter = &self.filter;
        let sel = &self.selection;
        let values = [
            ("scoring.weights.vix", weights.vix),
            ("scoring.weights.iv_rank", weights.iv_rank),
            ("scoring.weights.rsi", weights.rsi),
            ("scoring.weights.put_call_ratio", weights.put_call_ratio),
            ("scoring.weights.premium_yield", weights.premium_yield),
            ("scoring.thresholds.strong_above", thresholds.strong_above),
            ("scoring.thresholds.moderate_from", thresholds.moderate_from),
            ("filter.min_delta", filter.min_delta),
            ("filter.max_delta", filter.max_delta),
            ("filter.risk_free_rate", filter.risk_free_rate),
            ("selection.min_dte", sel.min_dte),
            ("selection.max_dte", sel.max_dte),
            ("selection.target_dte", sel.target_dte),
        ];
        if let Some((name, _)) = values.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NonFinite(*name));
        }

        let finite_curve = |c: &ScoreCurve| {
            c.points()
                .iter()
                .all(|(x, score)| x.is_finite() && score.is_finite())
        };
        if let Some((name, _)) = self.scoring.curves.iter().find(|(_, c)| !finite_curve(*c)) {
            return Err(ConfigError::NonFinite(name));
        }

        Ok(())
    }
}
