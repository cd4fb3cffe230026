//! Approximate put delta
//!
//! Black-Scholes style closed form, used only to screen contracts by moneyness:
//! d1 = (ln(S/K) + (r + sigma^2/2) * t) / (sigma * sqrt(t)), delta = N(d1) - 1

/// Annual risk-free rate used for delta screening
pub const RISK_FREE_RATE: f64 = 0.05;

/// Put delta at the default risk-free rate
///
/// See [`put_delta`].
pub fn calculate_delta(spot: f64, strike: f64, iv: f64, dte: u32) -> f64 {
    put_delta(spot, strike, iv, dte, RISK_FREE_RATE)
}

/// Put delta for a European put with `dte` days left
///
/// Returns 0 when spot, strike, IV or DTE is not positive. Otherwise the result
/// lies in (-1, 0).
pub fn put_delta(spot: f64, strike: f64, iv: f64, dte: u32, rate: f64) -> f64 {
    if spot <= 0.0 || strike <= 0.0 || iv <= 0.0 || dte == 0 {
        return 0.0;
    }

    let t = f64::from(dte) / 365.0;
    let d1 = ((spot / strike).ln() + (rate + iv * iv / 2.0) * t) / (iv * t.sqrt());

    normal_cdf(d1) - 1.0
}

/// Standard normal CDF via the complementary error function
pub fn normal_cdf(x: f64) -> f64 {
    0.5 * libm::erfc(-x / std::f64::consts::SQRT_2)
}
