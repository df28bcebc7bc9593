use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::core::error::MarketDataError;
use crate::core::price::{PriceHistory, PricePoint, PriceProvider};

// YahooFinanceProvider implementation for PriceProvider
pub struct YahooFinanceProvider {
    base_url: Url,
    client: reqwest::Client,
}

fn invalid_base_url(url: &str, reason: impl ToString) -> MarketDataError {
    MarketDataError::InvalidBaseUrl {
        url: url.to_string(),
        reason: reason.to_string(),
    }
}

/// Maps a transport failure, keeping client timeouts distinct.
fn request_error(symbol: &str, e: reqwest::Error) -> MarketDataError {
    if e.is_timeout() {
        MarketDataError::Timeout {
            symbol: symbol.to_string(),
        }
    } else {
        MarketDataError::Request {
            symbol: symbol.to_string(),
            source: e,
        }
    }
}

impl YahooFinanceProvider {
    /// Every request made by this provider gives up after `timeout`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, MarketDataError> {
        let parsed = Url::parse(base_url).map_err(|e| invalid_base_url(base_url, e))?;
        if parsed.cannot_be_a_base() {
            return Err(invalid_base_url(base_url, "not a base URL"));
        }
        let client = reqwest::Client::builder()
            .user_agent("fintrack/0.1")
            .timeout(timeout)
            .build()
            .map_err(MarketDataError::Client)?;
        Ok(YahooFinanceProvider {
            base_url: parsed,
            client,
        })
    }

    /// `<base>/v8/finance/chart/<symbol>?interval=1d&range=1d`, with the
    /// symbol percent-encoded as a single path segment.
    fn chart_url(&self, symbol: &str) -> Result<Url, MarketDataError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| invalid_base_url(self.base_url.as_str(), "not a base URL"))?
            .pop_if_empty()
            .extend(["v8", "finance", "chart", symbol]);
        url.query_pairs_mut()
            .append_pair("interval", "1d")
            .append_pair("range", "1d");
        Ok(url)
    }
}

#[derive(Deserialize, Debug)]
struct YahooPriceResponse {
    chart: PriceChartResult,
}

#[derive(Deserialize, Debug)]
struct PriceChartResult {
    result: Option<Vec<PriceChartItem>>,
}

#[derive(Deserialize, Debug)]
struct Indicators {
    quote: Vec<Quote>,
}

#[derive(Deserialize, Debug)]
struct Quote {
    close: Option<Vec<Option<f64>>>,
}

#[derive(Deserialize, Debug)]
struct PriceChartItem {
    timestamp: Option<Vec<i64>>,
    indicators: Option<Indicators>,
}

fn extract_history(item: &PriceChartItem) -> PriceHistory {
    let (Some(timestamps), Some(closes)) = (
        item.timestamp.as_ref(),
        item.indicators
            .as_ref()
            .and_then(|inds| inds.quote.first())
            .and_then(|q| q.close.as_ref()),
    ) else {
        return PriceHistory::default();
    };

    let points = timestamps
        .iter()
        .zip(closes)
        .filter_map(|(ts, close)| {
            Utc.timestamp_opt(*ts, 0)
                .single()
                .map(|timestamp| PricePoint {
                    timestamp,
                    close: *close,
                })
        })
        .collect();
    PriceHistory::new(points)
}

#[async_trait]
impl PriceProvider for YahooFinanceProvider {
    #[instrument(
        name = "YahooPriceFetch",
        skip(self),
        fields(symbol = %symbol)
    )]
    async fn fetch_history(&self, symbol: &str) -> Result<PriceHistory, MarketDataError> {
        let url = self.chart_url(symbol)?;
        debug!("Requesting price data from {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| request_error(symbol, e))?;

        debug!(status = %response.status(), "Received Yahoo response");

        // Unknown symbols come back as 404 with a null result: no data, not a failure.
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(PriceHistory::default());
        }
        if !response.status().is_success() {
            return Err(MarketDataError::Http {
                symbol: symbol.to_string(),
                status: response.status(),
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| request_error(symbol, e))?;
        let data: YahooPriceResponse =
            serde_json::from_str(&text).map_err(|e| MarketDataError::Parse {
                symbol: symbol.to_string(),
                source: e,
            })?;

        Ok(data
            .chart
            .result
            .as_deref()
            .and_then(<[PriceChartItem]>::first)
            .map(extract_history)
            .unwrap_or_default())
    }
}
