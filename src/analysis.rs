// =============================================================================
// Indicator Engine — per-instrument technical snapshot
// =============================================================================
//
// Pure transformation from a daily bar series into the indicator bundle the
// scorer consumes.  Requires 200 bars of history for the SMA(200) trend
// baseline; shorter series yield `None` (absence, not an error).
//
// Windows:
//   RSI            14 bars (simple-mean variant)
//   Volume boost   latest volume > 1.2 x trailing 20-bar mean
//   Levels         min low / max high over trailing 15 bars
//   Stop-loss      min(support, price * 0.97)
//   Trend          close vs SMA(200)
//   Performance    pct change vs close 11 bars back

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::indicators::levels::support_resistance;
use crate::indicators::round2;
use crate::indicators::rsi::simple_rsi;
use crate::indicators::sma::trailing_mean;
use crate::market_data::BarSeries;
use crate::types::Trend;

/// Minimum history for a full analysis (SMA-200 trend baseline).
pub const MIN_BARS: usize = 200;

const RSI_PERIOD: usize = 14;
const VOLUME_WINDOW: usize = 20;
const VOLUME_BOOST_FACTOR: f64 = 1.2;
const LEVELS_WINDOW: usize = 15;
const STOP_LOSS_FACTOR: f64 = 0.97;
const PERF_LOOKBACK: usize = 11;

/// Immutable indicator snapshot for one instrument, derived from a single
/// series snapshot and recomputed fresh each scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorBundle {
    pub price: f64,
    pub rsi: f64,
    pub trend: Trend,
    pub bullish_candle: bool,
    pub volume_boost: bool,
    pub support: f64,
    pub resistance: f64,
    pub stop_loss: f64,
    pub perf_10d: f64,
}

/// Analyze `series` into an [`IndicatorBundle`].
///
/// Returns `None` when the series holds fewer than [`MIN_BARS`] bars.
pub fn analyze(series: &BarSeries) -> Option<IndicatorBundle> {
    if series.len() < MIN_BARS {
        debug!(
            bars = series.len(),
            "analysis skipped: insufficient history (need >= {MIN_BARS} bars)"
        );
        return None;
    }

    let latest = series.latest()?;
    let closes = series.closes();
    let price = latest.close;

    let rsi = round2(simple_rsi(&closes, RSI_PERIOD)?);

    let avg_volume = trailing_mean(&series.volumes(), VOLUME_WINDOW)?;
    let volume_boost = latest.volume > avg_volume * VOLUME_BOOST_FACTOR;

    let (support, resistance) = support_resistance(series.bars(), LEVELS_WINDOW)?;
    let support = round2(support);
    let resistance = round2(resistance);

    // Safety floor: structural support or a fixed 3% drawdown, whichever is
    // tighter.
    let stop_loss = round2(support.min(price * STOP_LOSS_FACTOR));

    let sma200 = trailing_mean(&closes, MIN_BARS)?;
    let trend = if price > sma200 {
        Trend::Bullish
    } else {
        Trend::Bearish
    };

    let bullish_candle = latest.close > latest.open;

    // Unreachable behind the MIN_BARS guard, but kept as a defensive
    // fallback should the guard ever loosen.
    let perf_10d = if closes.len() > PERF_LOOKBACK {
        let base = closes[closes.len() - 1 - PERF_LOOKBACK];
        round2((price - base) / base * 100.0)
    } else {
        0.0
    };

    Some(IndicatorBundle {
        price: round2(price),
        rsi,
        trend,
        bullish_candle,
        volume_boost,
        support,
        resistance,
        stop_loss,
        perf_10d,
    })
}

// =============================================================================
// Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::market_data::Bar;

    fn bar(open: f64, high: f64, low: f64, close: f64, volume: f64) -> Bar {
        Bar {
            timestamp: 0,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    fn flat_series(len: usize, close: f64) -> BarSeries {
        BarSeries::new(vec![bar(close, close, close, close, 1000.0); len])
    }

    #[test]
    fn short_series_yields_none() {
        for len in [0, 1, 50, 199] {
            assert!(
                analyze(&flat_series(len, 100.0)).is_none(),
                "len {len} should be insufficient"
            );
        }
    }

    #[test]
    fn exactly_200_bars_is_enough() {
        assert!(analyze(&flat_series(200, 100.0)).is_some());
    }

    #[test]
    fn constant_closes_exercise_rsi_zero_division_policy() {
        // Gain and loss means are both exactly zero; policy says RSI = 50.
        let bundle = analyze(&flat_series(250, 100.0)).unwrap();
        assert!((bundle.rsi - 50.0).abs() < 1e-10);
    }

    #[test]
    fn flat_series_is_bearish_with_support_at_price() {
        let bundle = analyze(&flat_series(250, 100.0)).unwrap();
        // Close equals SMA200, and the trend rule is strict `>`.
        assert_eq!(bundle.trend, Trend::Bearish);
        assert_eq!(bundle.support, 100.0);
        assert_eq!(bundle.resistance, 100.0);
        // Stop-loss: min(100, 100 * 0.97) = 97.
        assert_eq!(bundle.stop_loss, 97.0);
        assert!(!bundle.bullish_candle);
        assert!(!bundle.volume_boost);
        assert_eq!(bundle.perf_10d, 0.0);
    }

    #[test]
    fn golden_synthetic_250_bar_series() {
        // Closes ramp 1.0, 2.0, ... 250.0; highs sit 1.0 above the close and
        // lows 1.0 below; volume constant except a 2x spike on the last bar.
        let mut bars = Vec::with_capacity(250);
        for i in 1..=250 {
            let c = i as f64;
            let volume = if i == 250 { 2000.0 } else { 1000.0 };
            bars.push(bar(c - 0.5, c + 1.0, c - 1.0, c, volume));
        }
        let bundle = analyze(&BarSeries::new(bars)).unwrap();

        assert_eq!(bundle.price, 250.0);
        // Strictly rising closes: all gains, no losses => RSI 100.
        assert_eq!(bundle.rsi, 100.0);
        // Support: min low over last 15 bars = 236 - 1 = 235.
        assert_eq!(bundle.support, 235.0);
        // Resistance: max high over last 15 bars = 250 + 1 = 251.
        assert_eq!(bundle.resistance, 251.0);
        // Stop-loss: min(235, 250 * 0.97 = 242.5) = 235.
        assert_eq!(bundle.stop_loss, 235.0);
        // SMA200 over closes 51..=250 is 150.5 < 250 => bullish.
        assert_eq!(bundle.trend, Trend::Bullish);
        // Close 250 > open 249.5.
        assert!(bundle.bullish_candle);
        // Volume: 2000 > 1.2 * mean(19 x 1000, 1 x 2000 = 1050).
        assert!(bundle.volume_boost);
        // Perf: (250 - 239) / 239 * 100 = 4.6025.. => 4.6.
        assert_eq!(bundle.perf_10d, 4.6);
    }

    #[test]
    fn trend_flips_bearish_below_sma200() {
        // Declining closes put the latest close under its 200-bar mean.
        let mut bars = Vec::new();
        for i in (1..=250).rev() {
            let c = i as f64;
            bars.push(bar(c, c + 1.0, c - 1.0, c, 1000.0));
        }
        let bundle = analyze(&BarSeries::new(bars)).unwrap();
        assert_eq!(bundle.trend, Trend::Bearish);
        assert_eq!(bundle.rsi, 0.0);
        assert!(!bundle.bullish_candle);
    }
}
