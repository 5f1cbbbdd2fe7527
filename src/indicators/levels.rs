// =============================================================================
// Support / Resistance Levels — trailing extrema
// =============================================================================
//
// Support is the minimum low and resistance the maximum high over a short
// trailing window of bars.  Used as reference levels, not as signals.

use crate::market_data::Bar;

/// `(support, resistance)` over the trailing `window` bars.
///
/// Returns `None` when `bars` is empty or `window == 0`.  A window longer
/// than the series clamps to the full series.
pub fn support_resistance(bars: &[Bar], window: usize) -> Option<(f64, f64)> {
    if bars.is_empty() || window == 0 {
        return None;
    }
    let start = bars.len().saturating_sub(window);
    let tail = &bars[start..];

    let support = tail.iter().map(|b| b.low).fold(f64::INFINITY, f64::min);
    let resistance = tail.iter().map(|b| b.high).fold(f64::NEG_INFINITY, f64::max);
    Some((support, resistance))
}
