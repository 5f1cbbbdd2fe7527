// =============================================================================
// Report Builder — ranked console report
// =============================================================================
//
// Pure rendering: ordering is a stable descending sort on score, so
// instruments with equal scores keep their configuration order.  The writer
// is generic so tests can capture the output.

use std::io::{self, Write};

use crate::scoring::{ScoredInstrument, MAX_SCORE};
use crate::types::MarketMood;

const HEADER_RULE_WIDTH: usize = 75;
const ROW_RULE_WIDTH: usize = 70;

/// Order scored instruments by score, best first.
///
/// `sort_by` is stable: ties preserve the input (configuration) order.
pub fn rank(mut scored: Vec<ScoredInstrument>) -> Vec<ScoredInstrument> {
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}

/// Render the ranked report: a mood banner followed by one block per
/// instrument in descending score order.
pub fn render<W: Write>(
    out: &mut W,
    mood: MarketMood,
    ranked: &[ScoredInstrument],
) -> io::Result<()> {
    let rule = "═".repeat(HEADER_RULE_WIDTH);
    writeln!(out, "{rule}")?;
    writeln!(out, "Market Pulse Report (Mood: {mood})")?;
    writeln!(out, "{rule}")?;

    for (i, r) in ranked.iter().enumerate() {
        writeln!(
            out,
            "[{}] {} ({}) -> {} (Score: {}/{MAX_SCORE})",
            i + 1,
            r.name,
            r.symbol,
            r.signal,
            r.score,
        )?;
        writeln!(
            out,
            "Price: {} | Stop-Loss: {}",
            r.bundle.price, r.bundle.stop_loss
        )?;
        writeln!(
            out,
            "Support: {} | Target: {}",
            r.bundle.support, r.bundle.resistance
        )?;
        writeln!(
            out,
            "RSI: {} | Trend: {} | 10d: {}% | Vol: {}",
            r.bundle.rsi,
            r.bundle.trend,
            r.bundle.perf_10d,
            if r.bundle.volume_boost { "High" } else { "Normal" },
        )?;
        writeln!(out, "{}", "─".repeat(ROW_RULE_WIDTH))?;
    }

    Ok(())
}
