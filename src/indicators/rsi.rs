// =============================================================================
// Relative Strength Index (RSI) — Simple Moving Average variant
// =============================================================================
//
// RSI measures the speed and magnitude of recent price changes to evaluate
// whether an asset is overbought or oversold.
//
// Step 1 — Compute price changes (deltas) from consecutive closes.
// Step 2 — Split each delta into gain (clamped >= 0) and loss (|clamped <= 0|).
// Step 3 — Take the plain trailing mean of the last `period` gains / losses.
// Step 4 — RS  = mean_gain / mean_loss
//          RSI = 100 - 100 / (1 + RS)
//
// This is the SMA variant: no Wilder smoothing, evaluated only at the most
// recent bar.

/// Compute the SMA-variant RSI at the most recent close.
///
/// Returns `None` when there are fewer than `period + 1` closes (need
/// `period` deltas) or `period == 0`.
///
/// # Edge cases
/// Division-by-zero policy when the trailing loss mean is exactly zero:
/// - both means zero (flat market) => RSI 50.0 (neutral);
/// - loss mean zero with positive gain mean (only up moves) => RSI 100.0.
pub fn simple_rsi(closes: &[f64], period: usize) -> Option<f64> {
    if period == 0 || closes.len() < period + 1 {
        return None;
    }

    // Only the trailing `period` deltas matter for the latest value.
    let window = &closes[closes.len() - period - 1..];
    let (sum_gain, sum_loss) = window
        .windows(2)
        .map(|w| w[1] - w[0])
        .fold((0.0_f64, 0.0_f64), |(g, l), d| {
            if d > 0.0 {
                (g + d, l)
            } else {
                (g, l + d.abs())
            }
        });

    let period_f = period as f64;
    rsi_from_means(sum_gain / period_f, sum_loss / period_f)
}

/// Convert trailing gain / loss means into an RSI value in [0, 100].
fn rsi_from_means(mean_gain: f64, mean_loss: f64) -> Option<f64> {
    let rsi = if mean_loss == 0.0 && mean_gain == 0.0 {
        50.0 // No movement at all — neutral.
    } else if mean_loss == 0.0 {
        100.0 // All gains, no losses.
    } else {
        let rs = mean_gain / mean_loss;
        100.0 - 100.0 / (1.0 + rs)
    };

    rsi.is_finite().then_some(rsi)
}
