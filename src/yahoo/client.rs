// =============================================================================
// Yahoo Finance Chart API Client — daily OHLCV history
// =============================================================================
//
// Thin client over the public v8 chart endpoint:
//   GET /v8/finance/chart/{symbol}?range={range}&interval=1d
//
// The endpoint is unauthenticated but rejects requests without a browser-like
// User-Agent.  Quote columns arrive as parallel arrays with per-element
// nulls; rows with any missing field are dropped before they reach the
// engine.
// =============================================================================

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::market_data::{Bar, BarSeries};

/// Per-request timeout (seconds).
const REQUEST_TIMEOUT_SECS: u64 = 15;

// -----------------------------------------------------------------------------
// Wire format
// -----------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<Quote>,
}

/// Parallel OHLCV columns; individual entries may be null on holidays or
/// partial rows.
#[derive(Debug, Deserialize)]
struct Quote {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<f64>>,
}

// -----------------------------------------------------------------------------
// Client
// -----------------------------------------------------------------------------

/// HTTP client for the Yahoo Finance chart endpoint.
#[derive(Debug, Clone)]
pub struct YahooClient {
    base_url: String,
    client: reqwest::Client,
}

impl YahooClient {
    /// Create a new `YahooClient` against the public endpoint.
    pub fn new() -> Self {
        Self::with_base_url("https://query1.finance.yahoo.com")
    }

    /// Create a client against an alternate base URL (used by tests against
    /// a local stub server).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .user_agent("Mozilla/5.0")
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("failed to build reqwest client");

        Self {
            base_url: base_url.into(),
            client,
        }
    }

    /// GET the daily chart for `symbol` over `range` (e.g. "300d", "5d").
    ///
    /// Returns the cleaned bar series; transport errors, non-2xx statuses,
    /// Yahoo error payloads, and malformed shapes all surface as typed
    /// errors for the repository layer to degrade.
    #[instrument(skip(self), name = "yahoo::get_chart")]
    pub async fn get_chart(&self, symbol: &str, range: &str) -> Result<BarSeries> {
        let url = format!(
            "{}/v8/finance/chart/{}?range={}&interval=1d",
            self.base_url, symbol, range
        );

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("GET chart request failed for {symbol}"))?;

        let status = resp.status();
        if !status.is_success() {
            anyhow::bail!("Yahoo chart endpoint returned {status} for {symbol}");
        }

        let body: ChartResponse = resp
            .json()
            .await
            .with_context(|| format!("failed to parse chart response for {symbol}"))?;

        let series = Self::decode_chart(body)?;
        debug!(symbol, range, bars = series.len(), "chart fetched");
        Ok(series)
    }

    /// Assemble a `BarSeries` from the decoded payload, dropping rows with
    /// any missing field.
    fn decode_chart(body: ChartResponse) -> Result<BarSeries> {
        if let Some(err) = body.chart.error {
            anyhow::bail!("Yahoo API error: {} - {}", err.code, err.description);
        }

        let result = body
            .chart
            .result
            .context("chart response missing 'result'")?
            .into_iter()
            .next()
            .context("chart result array is empty")?;

        let quote = result
            .indicators
            .quote
            .into_iter()
            .next()
            .context("chart result missing quote columns")?;

        let mut bars = Vec::with_capacity(result.timestamp.len());
        let mut dropped = 0usize;

        for (i, &ts) in result.timestamp.iter().enumerate() {
            let row = (
                quote.open.get(i).copied().flatten(),
                quote.high.get(i).copied().flatten(),
                quote.low.get(i).copied().flatten(),
                quote.close.get(i).copied().flatten(),
                quote.volume.get(i).copied().flatten(),
            );
            match row {
                (Some(open), Some(high), Some(low), Some(close), Some(volume)) => {
                    bars.push(Bar {
                        timestamp: ts,
                        open,
                        high,
                        low,
                        close,
                        volume,
                    });
                }
                _ => dropped += 1,
            }
        }

        if dropped > 0 {
            warn!(dropped, "dropped chart rows with missing fields");
        }

        // BarSeries::new additionally rejects non-finite values.
        Ok(BarSeries::new(bars))
    }
}

impl Default for YahooClient {
    fn default() -> Self {
        Self::new()
    }
}
