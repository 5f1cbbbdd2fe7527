// =============================================================================
// Shared types used across the Market Pulse scanner
// =============================================================================

use serde::{Deserialize, Serialize};

/// Direction of the 200-day trend baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Bullish,
    Bearish,
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bullish => write!(f, "BULLISH"),
            Self::Bearish => write!(f, "BEARISH"),
        }
    }
}

/// Discrete classification of an instrument's opportunity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Signal {
    StrongBuy,
    Watch,
    Avoid,
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StrongBuy => write!(f, "STRONG BUY"),
            Self::Watch => write!(f, "WATCH"),
            Self::Avoid => write!(f, "AVOID"),
        }
    }
}

/// Aggregate short-term sentiment derived from major index movement.
///
/// Computed once per scan and consumed read-only by every instrument's
/// scoring pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketMood {
    Positive,
    Cautious,
}

impl Default for MarketMood {
    fn default() -> Self {
        Self::Cautious
    }
}

impl std::fmt::Display for MarketMood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Positive => write!(f, "POSITIVE"),
            Self::Cautious => write!(f, "CAUTIOUS"),
        }
    }
}
