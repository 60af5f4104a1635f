//! Best-effort client for the search metrics counter service.
//!
//! Metrics never degrade the search flow: the [`MetricsRecorder`] methods
//! log failures and hand back values the caller may ignore. The strict
//! `fetch_trending` / `send_record` variants exist for the CLI.

use async_trait::async_trait;
use reelscout_core::MetricsConfig;
use serde::Deserialize;

use crate::errors::MetricsError;
use crate::providers::MetricsRecorder;
use crate::types::{Movie, SearchRecord, TrendingEntry};

/// Resource name appended to the metrics base URL.
pub const METRICS_RESOURCE: &str = "movie-metrics";

/// Result of a best-effort search record. Dropping it is fine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    /// The service accepted the record
    Recorded,
    /// The record was lost; the reason has already been logged
    Dropped {
        /// Why the record was not delivered
        reason: String,
    },
}

/// Trending payloads come back either bare or wrapped.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TrendingPayload {
    Entries(Vec<TrendingEntry>),
    Wrapped {
        #[serde(alias = "Items")]
        items: Vec<TrendingEntry>,
    },
}

impl TrendingPayload {
    fn into_entries(self) -> Vec<TrendingEntry> {
        match self {
            TrendingPayload::Entries(entries) => entries,
            TrendingPayload::Wrapped { items } => items,
        }
    }
}

/// HTTP client for the metrics service.
#[derive(Debug, Clone)]
pub struct MetricsClient {
    client: reqwest::Client,
    endpoint: String,
    poster_base_url: String,
}

impl MetricsClient {
    /// Creates a metrics client from configuration.
    ///
    /// An empty or malformed base URL is accepted here and fails per request.
    ///
    /// # Errors
    ///
    /// - `MetricsError::Network` - If the HTTP client cannot be built
    pub fn new(config: &MetricsConfig) -> Result<Self, MetricsError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| MetricsError::Network {
                reason: format!("Failed to create HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            endpoint: format!("{}{METRICS_RESOURCE}", config.base_url),
            poster_base_url: config.poster_base_url.clone(),
        })
    }

    /// Full URL of the metrics resource.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Builds the record posted for `movie` found by `search_term`.
    pub fn build_record(&self, search_term: &str, movie: &Movie) -> SearchRecord {
        SearchRecord::new(search_term, movie, &self.poster_base_url)
    }

    /// Reads the trending aggregate, in service order.
    ///
    /// # Errors
    ///
    /// - `MetricsError::Network` - Connection failure or unusable base URL
    /// - `MetricsError::Fetch` - Non-success status
    /// - `MetricsError::Parse` - Body is not a trending list
    pub async fn fetch_trending(&self) -> Result<Vec<TrendingEntry>, MetricsError> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| MetricsError::Network {
                reason: format!("Metrics request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(MetricsError::Fetch { status });
        }

        let payload: TrendingPayload = response.json().await.map_err(|e| MetricsError::Parse {
            reason: format!("Trending JSON parsing failed: {e}"),
        })?;

        Ok(payload.into_entries())
    }

    /// Posts one search record.
    ///
    /// # Errors
    ///
    /// - `MetricsError::Network` - Connection failure or unusable base URL
    /// - `MetricsError::Fetch` - Non-success status
    pub async fn send_record(&self, record: &SearchRecord) -> Result<(), MetricsError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(record)
            .send()
            .await
            .map_err(|e| MetricsError::Network {
                reason: format!("Metrics request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(MetricsError::Fetch { status });
        }

        Ok(())
    }
}

#[async_trait]
impl MetricsRecorder for MetricsClient {
    async fn trending(&self) -> Option<Vec<TrendingEntry>> {
        match self.fetch_trending().await {
            Ok(entries) => {
                tracing::debug!(count = entries.len(), "Fetched trending searches");
                Some(entries)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Trending fetch failed, skipping update");
                None
            }
        }
    }

    async fn record_search(&self, search_term: &str, movie: &Movie) -> RecordOutcome {
        let record = self.build_record(search_term, movie);

        match self.send_record(&record).await {
            Ok(()) => {
                tracing::debug!(search = %search_term, movie_id = movie.id, "Recorded search");
                RecordOutcome::Recorded
            }
            Err(e) => {
                tracing::warn!(search = %search_term, error = %e, "Search record dropped");
                RecordOutcome::Dropped {
                    reason: e.to_string(),
                }
            }
        }
    }
}
