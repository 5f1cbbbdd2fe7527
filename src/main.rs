// =============================================================================
// Market Pulse — Main Entry Point
// =============================================================================
//
// One-shot scanner: evaluate the market mood from the index basket, then
// fetch and analyze each instrument sequentially, score against the shared
// mood, and print the ranked report.  A failed fetch never aborts the batch;
// the instrument is simply absent from the report.
// =============================================================================

// ── Module declarations ──────────────────────────────────────────────────────
mod analysis;
mod config;
mod indicators;
mod market_data;
mod mood;
mod report;
mod repository;
mod scoring;
mod types;
mod yahoo;

use chrono::Utc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::config::ScanConfig;
use crate::market_data::BarSeries;
use crate::repository::SeriesRepository;
use crate::scoring::ScoredInstrument;
use crate::yahoo::YahooClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ── 1. Environment & config ──────────────────────────────────────────
    let _ = dotenv::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("╔══════════════════════════════════════════════════════════╗");
    info!("║          Market Pulse — Opportunity Scanner              ║");
    info!("╚══════════════════════════════════════════════════════════╝");

    let mut config = ScanConfig::default();
    config.apply_env_override();

    info!(
        instruments = config.instruments.len(),
        indices = config.indices.len(),
        started_at = %Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
        "scan starting"
    );

    let repo = SeriesRepository::new(YahooClient::new(), config.pacing_delay_ms);

    // ── 2. Market mood (once per scan) ───────────────────────────────────
    let mut index_series: Vec<(String, BarSeries)> = Vec::with_capacity(config.indices.len());
    for index in &config.indices {
        let series = repo.fetch(&index.symbol, &config.mood_range).await;
        index_series.push((index.symbol.clone(), series));
    }
    let market_mood = mood::evaluate(&index_series, config.mood_up_threshold);

    // ── 3. Fetch + analyze + score each instrument ───────────────────────
    let mut scored: Vec<ScoredInstrument> = Vec::with_capacity(config.instruments.len());
    for instrument in &config.instruments {
        let series = repo.fetch(&instrument.symbol, &config.history_range).await;

        match analysis::analyze(&series) {
            Some(bundle) => {
                let (score, signal) = scoring::score(&bundle, market_mood);
                debug!(
                    symbol = %instrument.symbol,
                    score,
                    signal = %signal,
                    "instrument scored"
                );
                scored.push(ScoredInstrument {
                    symbol: instrument.symbol.clone(),
                    name: instrument.name.clone(),
                    score,
                    signal,
                    bundle,
                });
            }
            None => {
                debug!(
                    symbol = %instrument.symbol,
                    bars = series.len(),
                    "instrument omitted: insufficient data"
                );
            }
        }
    }

    // ── 4. Rank and render ───────────────────────────────────────────────
    let ranked = report::rank(scored);
    info!(ranked = ranked.len(), mood = %market_mood, "scan complete");

    let stdout = std::io::stdout();
    report::render(&mut stdout.lock(), market_mood, &ranked)?;

    Ok(())
}
