// =============================================================================
// Series Repository — fail-soft boundary over the chart client
// =============================================================================
//
// The engine must never see a transport error: any failure (network, HTTP
// status, malformed payload) collapses to an empty series here, after being
// logged with its typed reason.  An empty or short series simply means
// "insufficient data" downstream.
//
// The courtesy pacing delay between fetches is repository policy; it keeps
// the scanner polite to the upstream API and has no bearing on correctness.

use std::time::Duration;

use tracing::warn;

use crate::market_data::BarSeries;
use crate::yahoo::YahooClient;

/// Fail-soft source of daily bar series.
#[derive(Debug, Clone)]
pub struct SeriesRepository {
    client: YahooClient,
    pacing_delay: Duration,
}

impl SeriesRepository {
    pub fn new(client: YahooClient, pacing_delay_ms: u64) -> Self {
        Self {
            client,
            pacing_delay: Duration::from_millis(pacing_delay_ms),
        }
    }

    /// Fetch the daily series for `symbol` over `range`, degrading every
    /// failure to an empty series.  Applies the pacing delay after the call.
    pub async fn fetch(&self, symbol: &str, range: &str) -> BarSeries {
        let series = match self.client.get_chart(symbol, range).await {
            Ok(series) => series,
            Err(e) => {
                warn!(symbol, range, error = %e, "fetch failed — treating as no data");
                BarSeries::empty()
            }
        };

        if !self.pacing_delay.is_zero() {
            tokio::time::sleep(self.pacing_delay).await;
        }

        series
    }
}
