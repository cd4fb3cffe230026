//! Implied volatility rank

/// Rank current IV within its observed range as a percentage
///
/// `(current - low) / (high - low) * 100`. The result is not clamped, so an IV
/// outside the observed range ranks below 0 or above 100. A degenerate range
/// (`high == low`) carries no information and yields `None`.
pub fn calculate_iv_rank(current: f64, low: f64, high: f64) -> Option<f64> {
    let range = high - low;
    if range == 0.0 {
        return None;
    }
    Some((current - low) / range * 100.0)
}
