// =============================================================================
// Simple Moving Average — trailing mean
// =============================================================================
//
// The scanner only ever needs the SMA at the most recent bar (the 200-day
// trend baseline and the 20-day volume mean), so this is a trailing mean
// rather than a full rolling series.

/// Mean of the last `period` values.
///
/// Returns `None` when `period == 0` or there are fewer than `period` values.
pub fn trailing_mean(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    let window = &values[values.len() - period..];
    Some(window.iter().sum::<f64>() / period as f64)
}
