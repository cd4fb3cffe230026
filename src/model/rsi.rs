//! Relative Strength Index with Wilder's smoothing

/// Lookback period for RSI
pub const RSI_PERIOD: usize = 14;

/// Calculate the 14-period RSI from daily closes (oldest first)
///
/// The first [`RSI_PERIOD`] changes seed simple averages of gains and losses.
/// Every later change updates them with Wilder's smoothing:
/// `avg = (avg * 13 + value) / 14`.
///
/// Returns `None` when fewer than `RSI_PERIOD + 1` closes are supplied.
pub fn calculate_rsi(closes: &[f64]) -> Option<f64> {
    if closes.len() < RSI_PERIOD + 1 {
        return None;
    }

    let period = RSI_PERIOD as f64;
    let mut changes = closes.windows(2).map(|w| w[1] - w[0]);

    let (mut gain_sum, mut loss_sum) = (0.0, 0.0);
    for change in changes.by_ref().take(RSI_PERIOD) {
        if change > 0.0 {
            gain_sum += change;
        } else {
            loss_sum -= change;
        }
    }

    let mut avg_gain = gain_sum / period;
    let mut avg_loss = loss_sum / period;

    for change in changes {
        let (gain, loss) = if change > 0.0 {
            (change, 0.0)
        } else {
            (0.0, -change)
        };
        avg_gain = (avg_gain * (period - 1.0) + gain) / period;
        avg_loss = (avg_loss * (period - 1.0) + loss) / period;
    }

    if avg_loss == 0.0 {
        return Some(100.0);
    }

    let rs = avg_gain / avg_loss;
    Some(100.0 - 100.0 / (1.0 + rs))
}

#[cfg(test)]
mod tests {
    use super::*;

    const WILDER_CLOSES: [f64; 15] = [
        44.0, 44.34, 44.09, 43.61, 44.33, 44.83, 45.10, 45.42, 45.84, 46.08, 45.89, 46.03, 45.61,
        46.28, 46.28,
    ];

    #[test]
    fn test_rsi_insufficient_data() {
        assert!(calculate_rsi(&[]).is_none());
        assert!(calculate_rsi(&WILDER_CLOSES[..14]).is_none());
    }

    #[test]
    fn test_rsi_wilder_example() {
        let rsi = calculate_rsi(&WILDER_CLOSES).unwrap();
        assert!(rsi >= 60.0 && rsi <= 80.0, "rsi = {rsi}");
        assert!((rsi - 72.98).abs() < 0.01);
    }

    #[test]
    fn test_rsi_all_gains() {
        let closes: Vec<f64> = (0..20).map(|i| 100.0 + i as f64).collect();
        assert_eq!(calculate_rsi(&closes), Some(100.0));
    }

    #[test]
    fn test_rsi_all_losses() {
        let closes: Vec<f64> = (0..20).map(|i| 100.0 - i as f64).collect();
        let rsi = calculate_rsi(&closes).unwrap();
        assert!(rsi.abs() < 1e-12);
    }

    #[test]
    fn test_rsi_flat_prices() {
        // No losses at all, so the ratio is unbounded
        let closes = [50.0; 15];
        assert_eq!(calculate_rsi(&closes), Some(100.0));
    }

    #[test]
    fn test_rsi_known_ratio() {
        // 4 up days, 6 down days, 4 unchanged: RS = 4/6, RSI = 40
        let mut closes = vec![100.0];
        for step in [1.0, 1.0, 1.0, 1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, 0.0, 0.0, 0.0, 0.0] {
            let last = *closes.last().unwrap();
            closes.push(last + step);
        }
        let rsi = calculate_rsi(&closes).unwrap();
        assert!((rsi - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_rsi_smoothing_uses_history() {
        let mut closes = WILDER_CLOSES.to_vec();
        let base = calculate_rsi(&closes).unwrap();
        closes.push(47.0);
        let after_gain = calculate_rsi(&closes).unwrap();
        assert!(after_gain > base);
        closes.push(44.0);
        let after_loss = calculate_rsi(&closes).unwrap();
        assert!(after_loss < after_gain);
    }

    #[test]
    fn test_rsi_bounds() {
        let closes = [
            10.0, 12.0, 9.0, 15.0, 8.0, 16.0, 7.0, 18.0, 6.0, 19.0, 5.0, 20.0, 4.0, 21.0, 3.0, 22.0,
        ];
        let rsi = calculate_rsi(&closes).unwrap();
        assert!((0.0..=100.0).contains(&rsi));
    }
}
