// =============================================================================
// Bar / BarSeries — cleaned daily OHLCV history
// =============================================================================
//
// A `BarSeries` is a chronologically ordered snapshot of daily bars for one
// symbol.  Invariant: every field of every bar is a finite number — rows with
// missing or non-finite values are rejected at construction, so the indicator
// engine never has to re-validate.

use serde::{Deserialize, Serialize};

/// One trading day's OHLCV record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// UNIX timestamp (seconds) of the bar's trading day.
    pub timestamp: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Bar {
    /// True when every price/volume field is a finite number.
    pub fn is_finite(&self) -> bool {
        self.open.is_finite()
            && self.high.is_finite()
            && self.low.is_finite()
            && self.close.is_finite()
            && self.volume.is_finite()
    }
}

/// Chronologically ordered sequence of daily bars (oldest first).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BarSeries {
    bars: Vec<Bar>,
}

impl BarSeries {
    /// Build a series from `bars`, dropping any bar with a non-finite field.
    pub fn new(bars: Vec<Bar>) -> Self {
        Self {
            bars: bars.into_iter().filter(Bar::is_finite).collect(),
        }
    }

    /// An empty series — the repository's degraded result on any failure.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Most recent bar, if any.
    pub fn latest(&self) -> Option<&Bar> {
        self.bars.last()
    }

    /// All bars, oldest first.
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    /// Closing prices, oldest first.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    /// Volumes, oldest first.
    pub fn volumes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.volume).collect()
    }

    /// The most recent `count` bars (fewer when the series is shorter).
    pub fn tail(&self, count: usize) -> &[Bar] {
        let start = self.bars.len().saturating_sub(count);
        &self.bars[start..]
    }
}
