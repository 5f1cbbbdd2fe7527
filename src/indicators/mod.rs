// =============================================================================
// Technical Indicators Module
// =============================================================================
//
// Pure, side-effect-free implementations of the indicators used by the
// scanner.  Every public function returns `Option<T>` so callers are forced
// to handle insufficient-data and numerical-edge-case scenarios.

pub mod levels;
pub mod rsi;
pub mod sma;

/// Round to two decimal places (standard round-half-away-from-zero).
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
