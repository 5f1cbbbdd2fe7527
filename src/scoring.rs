// =============================================================================
// Opportunity Scorer — composite score and signal classification
// =============================================================================
//
// Five independent one-point conditions, max score 5:
//   RSI < 45, bullish trend, bullish candle, volume boost, positive mood.
//
// Signal cut-offs (fixed design constants):
//   score >= 4 => STRONG BUY,  2..=3 => WATCH,  < 2 => AVOID.

use serde::{Deserialize, Serialize};

use crate::analysis::IndicatorBundle;
use crate::types::{MarketMood, Signal, Trend};

/// RSI below this level counts as an entry opportunity.
const RSI_OPPORTUNITY_MAX: f64 = 45.0;
const STRONG_BUY_MIN: u8 = 4;
const WATCH_MIN: u8 = 2;

/// Maximum attainable opportunity score.
pub const MAX_SCORE: u8 = 5;

/// One instrument's scored snapshot for the report, never mutated after
/// creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredInstrument {
    pub symbol: String,
    pub name: String,
    pub score: u8,
    pub signal: Signal,
    #[serde(flatten)]
    pub bundle: IndicatorBundle,
}

/// Combine an indicator bundle with the market mood into `(score, signal)`.
pub fn score(bundle: &IndicatorBundle, mood: MarketMood) -> (u8, Signal) {
    let mut score = 0u8;
    if bundle.rsi < RSI_OPPORTUNITY_MAX {
        score += 1;
    }
    if bundle.trend == Trend::Bullish {
        score += 1;
    }
    if bundle.bullish_candle {
        score += 1;
    }
    if bundle.volume_boost {
        score += 1;
    }
    if mood == MarketMood::Positive {
        score += 1;
    }

    (score, classify(score))
}

/// Map a score onto its discrete signal.
pub fn classify(score: u8) -> Signal {
    if score >= STRONG_BUY_MIN {
        Signal::StrongBuy
    } else if score >= WATCH_MIN {
        Signal::Watch
    } else {
        Signal::Avoid
    }
}
