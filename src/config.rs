// =============================================================================
// Scan Configuration — instrument basket, index basket, fetch policy
// =============================================================================
//
// Central configuration for a scan cycle.  The reference basket lives in the
// defaults so that tests (and the env override) can substitute their own
// instruments without touching the engine.  All fields carry
// `#[serde(default)]` so a partial JSON document deserialises cleanly.
//
// =============================================================================

use serde::{Deserialize, Serialize};

// =============================================================================
// Default-value helpers (required by serde `default = "..."` attribute)
// =============================================================================

fn default_instruments() -> Vec<Instrument> {
    [
        ("GC=F", "Gold"),
        ("CL=F", "Crude Oil"),
        ("BTC-USD", "Bitcoin"),
        ("ETH-USD", "Ethereum"),
        ("RELIANCE.NS", "Reliance"),
        ("HDFCBANK.NS", "HDFC Bank"),
        ("TCS.NS", "TCS"),
        ("TATAMOTORS.NS", "Tata Motors"),
        ("NVDA", "Nvidia"),
        ("AAPL", "Apple"),
        ("TSLA", "Tesla"),
        ("GOOGL", "Google"),
        ("MSFT", "Microsoft"),
        ("6758.T", "Sony"),
        ("7203.T", "Toyota"),
    ]
    .iter()
    .map(|(sym, name)| Instrument::new(*sym, *name))
    .collect()
}

fn default_indices() -> Vec<Instrument> {
    [
        ("^NSEI", "Nifty 50"),
        ("^GSPC", "S&P 500"),
        ("^N225", "Nikkei 225"),
        ("^FTSE", "FTSE 100"),
    ]
    .iter()
    .map(|(sym, name)| Instrument::new(*sym, *name))
    .collect()
}

fn default_history_range() -> String {
    "300d".to_string()
}

fn default_mood_range() -> String {
    "5d".to_string()
}

fn default_pacing_delay_ms() -> u64 {
    100
}

fn default_mood_up_threshold() -> usize {
    majority_threshold(default_indices().len())
}

/// Majority threshold for `n` indices: at least half, rounded up.
///
/// For the reference 4-index set this is 2, matching the fixed cut-off the
/// mood heuristic was designed around.
pub fn majority_threshold(n: usize) -> usize {
    n.div_ceil(2)
}

// =============================================================================
// Instrument
// =============================================================================

/// A tradable symbol together with its human-readable display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instrument {
    pub symbol: String,
    pub name: String,
}

impl Instrument {
    pub fn new(symbol: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
        }
    }
}

// =============================================================================
// ScanConfig
// =============================================================================

/// Full configuration for one scan cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Instruments to fetch, analyze, and rank.
    #[serde(default = "default_instruments")]
    pub instruments: Vec<Instrument>,

    /// Market indices feeding the mood evaluator.
    #[serde(default = "default_indices")]
    pub indices: Vec<Instrument>,

    /// Lookback range for instrument history (Yahoo range string).
    #[serde(default = "default_history_range")]
    pub history_range: String,

    /// Lookback range for index history used by the mood evaluator.
    #[serde(default = "default_mood_range")]
    pub mood_range: String,

    /// Courtesy delay between consecutive fetches, in milliseconds.
    #[serde(default = "default_pacing_delay_ms")]
    pub pacing_delay_ms: u64,

    /// Minimum number of "up" indices for a POSITIVE market mood.
    #[serde(default = "default_mood_up_threshold")]
    pub mood_up_threshold: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            instruments: default_instruments(),
            indices: default_indices(),
            history_range: default_history_range(),
            mood_range: default_mood_range(),
            pacing_delay_ms: default_pacing_delay_ms(),
            mood_up_threshold: default_mood_up_threshold(),
        }
    }
}

impl ScanConfig {
    /// Apply the `PULSE_SYMBOLS` environment override, if set.
    ///
    /// The variable holds comma-separated entries of the form `SYMBOL=Name`;
    /// a bare `SYMBOL` reuses the symbol as its display name.  Empty entries
    /// are ignored, and an override producing zero instruments leaves the
    /// existing basket untouched.
    pub fn apply_env_override(&mut self) {
        if let Ok(raw) = std::env::var("PULSE_SYMBOLS") {
            let parsed = parse_symbols_override(&raw);
            if !parsed.is_empty() {
                self.instruments = parsed;
            }
        }
    }
}

/// Parse a comma-separated `SYMBOL=Name` override string into instruments.
fn parse_symbols_override(raw: &str) -> Vec<Instrument> {
    raw.split(',')
        .filter_map(|entry| {
            let entry = entry.trim();
            if entry.is_empty() {
                return None;
            }
            match entry.split_once('=') {
                Some((sym, name)) => {
                    Some(Instrument::new(sym.trim().to_uppercase(), name.trim()))
                }
                None => Some(Instrument::new(entry.to_uppercase(), entry.to_uppercase())),
            }
        })
        .collect()
}

// =============================================================================
// Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_reference_baskets() {
        let cfg = ScanConfig::default();
        assert_eq!(cfg.instruments.len(), 15);
        assert_eq!(cfg.instruments[0].symbol, "GC=F");
        assert_eq!(cfg.instruments[0].name, "Gold");
        assert_eq!(cfg.indices.len(), 4);
        assert_eq!(cfg.indices[1].symbol, "^GSPC");
        assert_eq!(cfg.history_range, "300d");
        assert_eq!(cfg.mood_range, "5d");
        assert_eq!(cfg.pacing_delay_ms, 100);
        assert_eq!(cfg.mood_up_threshold, 2);
    }

    #[test]
    fn majority_threshold_rounds_up() {
        assert_eq!(majority_threshold(4), 2);
        assert_eq!(majority_threshold(5), 3);
        assert_eq!(majority_threshold(1), 1);
    }

    #[test]
    fn symbols_override_parses_names_and_bare_symbols() {
        let parsed = parse_symbols_override("nvda=Nvidia, aapl , ,");
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0], Instrument::new("NVDA", "Nvidia"));
        assert_eq!(parsed[1], Instrument::new("AAPL", "AAPL"));
    }

    #[test]
    fn empty_override_is_ignored() {
        let mut cfg = ScanConfig::default();
        let before = cfg.instruments.clone();
        // An all-whitespace override parses to zero instruments.
        assert!(parse_symbols_override("  , ").is_empty());
        cfg.apply_env_override();
        assert_eq!(cfg.instruments, before);
    }

    #[test]
    fn deserialise_empty_json_uses_defaults() {
        let cfg: ScanConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.instruments.len(), 15);
        assert_eq!(cfg.mood_up_threshold, 2);
    }

    #[test]
    fn deserialise_partial_json_fills_defaults() {
        let json = r#"{ "instruments": [ { "symbol": "AAPL", "name": "Apple" } ] }"#;
        let cfg: ScanConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.instruments.len(), 1);
        assert_eq!(cfg.indices.len(), 4);
        assert_eq!(cfg.history_range, "300d");
    }
}
