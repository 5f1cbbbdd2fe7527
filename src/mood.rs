// =============================================================================
// Market Mood Evaluator — index-breadth sentiment
// =============================================================================
//
// Counts how many major indices closed up versus their prior close.  An index
// with fewer than two bars is skipped (neither up nor down).  The mood is
// POSITIVE when the up-count reaches the configured threshold (majority of
// the index set by default), else CAUTIOUS.

use tracing::{debug, info};

use crate::market_data::BarSeries;
use crate::types::MarketMood;

/// Evaluate the market mood from per-index bar series.
///
/// `threshold` is the minimum number of "up" indices for a POSITIVE mood.
pub fn evaluate(index_series: &[(String, BarSeries)], threshold: usize) -> MarketMood {
    let mut up_count = 0usize;
    let mut skipped = 0usize;

    for (symbol, series) in index_series {
        let tail = series.tail(2);
        if tail.len() < 2 {
            debug!(symbol, bars = series.len(), "index skipped: need >= 2 bars");
            skipped += 1;
            continue;
        }
        if tail[1].close > tail[0].close {
            up_count += 1;
        }
    }

    let mood = if up_count >= threshold {
        MarketMood::Positive
    } else {
        MarketMood::Cautious
    };

    info!(
        up_count,
        threshold,
        skipped,
        mood = %mood,
        "market mood evaluated"
    );
    mood
}

// =============================================================================
// Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::market_data::Bar;

    fn series_with_closes(closes: &[f64]) -> BarSeries {
        BarSeries::new(
            closes
                .iter()
                .map(|&c| Bar {
                    timestamp: 0,
                    open: c,
                    high: c,
                    low: c,
                    close: c,
                    volume: 0.0,
                })
                .collect(),
        )
    }

    fn index(name: &str, closes: &[f64]) -> (String, BarSeries) {
        (name.to_string(), series_with_closes(closes))
    }

    #[test]
    fn two_of_four_up_is_positive() {
        let indices = vec![
            index("A", &[10.0, 11.0]), // up
            index("B", &[10.0, 12.0]), // up
            index("C", &[10.0, 9.0]),  // down
            index("D", &[10.0, 10.0]), // flat — not up
        ];
        assert_eq!(evaluate(&indices, 2), MarketMood::Positive);
    }

    #[test]
    fn one_of_four_up_is_cautious() {
        let indices = vec![
            index("A", &[10.0, 11.0]),
            index("B", &[10.0, 9.0]),
            index("C", &[10.0, 9.5]),
            index("D", &[10.0, 8.0]),
        ];
        assert_eq!(evaluate(&indices, 2), MarketMood::Cautious);
    }

    #[test]
    fn short_series_are_skipped_not_counted() {
        // Two up indices plus two that cannot be evaluated: still positive.
        let indices = vec![
            index("A", &[10.0, 11.0]),
            index("B", &[10.0, 11.0]),
            index("C", &[10.0]),
            index("D", &[]),
        ];
        assert_eq!(evaluate(&indices, 2), MarketMood::Positive);
    }

    #[test]
    fn empty_index_set_is_cautious() {
        assert_eq!(evaluate(&[], 2), MarketMood::Cautious);
    }

    #[test]
    fn threshold_is_respected() {
        let indices = vec![index("A", &[10.0, 11.0]), index("B", &[10.0, 11.0])];
        assert_eq!(evaluate(&indices, 3), MarketMood::Cautious);
        assert_eq!(evaluate(&indices, 2), MarketMood::Positive);
        assert_eq!(evaluate(&indices, 1), MarketMood::Positive);
    }
}
