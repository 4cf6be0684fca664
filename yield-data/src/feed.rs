//! Retrieval of the published money-market fund yield feed.
//!
//! The feed is a single JSON document: an array of fund records in the shape
//! [`FundRecord`] deserializes. It can be fetched over HTTP or read from a
//! local copy; both paths produce the same typed records, so the calculators
//! downstream never see raw JSON.

use std::io::Read;

use thiserror::Error;
use tracing::info;
use yield_core::models::FundRecord;

/// Where the feed is published.
pub const DEFAULT_FEED_URL: &str = "https://moneymarket.fun/data/fundYields.json";

/// Errors that can occur when retrieving or decoding the fund feed.
#[derive(Debug, Error)]
pub enum FundFeedError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("feed returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("feed JSON is malformed: {0}")]
    Decode(#[from] serde_json::Error),
}

/// HTTP client for the fund yield feed.
#[derive(Debug, Clone)]
pub struct FundFeedClient {
    url: String,
    client: reqwest::Client,
}

impl FundFeedClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Fetches and deserializes the full fund list.
    pub async fn fetch_funds(&self) -> Result<Vec<FundRecord>, FundFeedError> {
        info!(url = %self.url, "fetching fund yield feed");

        let response = self.client.get(&self.url).send().await?;
        if !response.status().is_success() {
            return Err(FundFeedError::Status(response.status()));
        }

        let body = response.text().await?;
        let funds: Vec<FundRecord> = serde_json::from_str(&body)?;

        info!(count = funds.len(), "fund feed loaded");
        Ok(funds)
    }
}

impl Default for FundFeedClient {
    fn default() -> Self {
        Self::new(DEFAULT_FEED_URL)
    }
}

/// Reads the same JSON document from a local source: a downloaded copy of the
/// feed, or test fixtures.
pub fn load_funds<R: Read>(reader: R) -> Result<Vec<FundRecord>, FundFeedError> {
    Ok(serde_json::from_reader(reader)?)
}
