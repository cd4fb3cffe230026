//! Premium yield and put/call ratio

/// Annualized premium yield as a percentage of strike
///
/// `(premium / strike) * (365 / dte) * 100`. A zero strike or zero DTE returns 0
/// instead of dividing by zero.
pub fn calculate_premium_yield(premium: f64, strike: f64, dte: u32) -> f64 {
    if strike == 0.0 || dte == 0 {
        return 0.0;
    }
    (premium / strike) * (365.0 / f64::from(dte)) * 100.0
}

/// Put volume over call volume, 0 when there is no call volume
pub fn put_call_ratio(total_put_volume: f64, total_call_volume: f64) -> f64 {
    if total_call_volume > 0.0 {
        total_put_volume / total_call_volume
    } else {
        0.0
    }
}
