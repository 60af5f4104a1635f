//! Scriptable providers for tests.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use reelscout_core::config::POSTER_CDN_BASE;

use super::{CatalogProvider, MetricsRecorder};
use crate::errors::CatalogError;
use crate::metrics::RecordOutcome;
use crate::types::{Movie, SearchRecord, TrendingEntry};

/// A call observed by [`MockCatalog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogCall {
    /// `search(query)`
    Search(String),
    /// `discover()`
    Discover,
}

#[derive(Debug, Clone)]
struct ScriptedResponse {
    result: Result<Vec<Movie>, CatalogError>,
    delay: Duration,
}

impl Default for ScriptedResponse {
    fn default() -> Self {
        Self {
            result: Ok(Vec::new()),
            delay: Duration::ZERO,
        }
    }
}

/// Catalog whose answers are scripted per query.
///
/// The empty query key scripts `discover()`. Unscripted queries return an
/// empty list immediately.
#[derive(Debug, Default)]
pub struct MockCatalog {
    responses: Mutex<HashMap<String, ScriptedResponse>>,
    calls: Mutex<Vec<CatalogCall>>,
}

impl MockCatalog {
    /// Creates a mock catalog with no scripted responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers `query` with `movies`.
    pub fn with_movies(self, query: &str, movies: Vec<Movie>) -> Self {
        self.responses.lock().entry(query.to_string()).or_default().result = Ok(movies);
        self
    }

    /// Answers `query` with `error`.
    pub fn with_failure(self, query: &str, error: CatalogError) -> Self {
        self.responses.lock().entry(query.to_string()).or_default().result = Err(error);
        self
    }

    /// Delays the answer to `query` by `delay`.
    pub fn with_delay(self, query: &str, delay: Duration) -> Self {
        self.responses.lock().entry(query.to_string()).or_default().delay = delay;
        self
    }

    /// Calls observed so far, in order.
    pub fn calls(&self) -> Vec<CatalogCall> {
        self.calls.lock().clone()
    }

    async fn respond(&self, query: &str, call: CatalogCall) -> Result<Vec<Movie>, CatalogError> {
        self.calls.lock().push(call);
        let scripted = self.responses.lock().get(query).cloned().unwrap_or_default();

        if !scripted.delay.is_zero() {
            tokio::time::sleep(scripted.delay).await;
        }
        scripted.result
    }
}

#[async_trait]
impl CatalogProvider for MockCatalog {
    async fn search(&self, query: &str) -> Result<Vec<Movie>, CatalogError> {
        self.respond(query, CatalogCall::Search(query.to_string())).await
    }

    async fn discover(&self) -> Result<Vec<Movie>, CatalogError> {
        self.respond("", CatalogCall::Discover).await
    }
}

/// Metrics recorder that keeps records in memory.
#[derive(Debug, Default)]
pub struct MockMetrics {
    trending: Mutex<Option<Vec<TrendingEntry>>>,
    trending_calls: Mutex<usize>,
    records: Mutex<Vec<SearchRecord>>,
}

impl MockMetrics {
    /// Creates a recorder whose trending fetch fails.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serves `entries` as the trending list.
    pub fn with_trending(self, entries: Vec<TrendingEntry>) -> Self {
        self.set_trending(Some(entries));
        self
    }

    /// Replaces what later trending fetches return; `None` makes them fail.
    pub fn set_trending(&self, entries: Option<Vec<TrendingEntry>>) {
        *self.trending.lock() = entries;
    }

    /// Number of trending fetches so far.
    pub fn trending_calls(&self) -> usize {
        *self.trending_calls.lock()
    }

    /// Records received so far, in order.
    pub fn records(&self) -> Vec<SearchRecord> {
        self.records.lock().clone()
    }
}

#[async_trait]
impl MetricsRecorder for MockMetrics {
    async fn trending(&self) -> Option<Vec<TrendingEntry>> {
        *self.trending_calls.lock() += 1;
        self.trending.lock().clone()
    }

    async fn record_search(&self, search_term: &str, movie: &Movie) -> RecordOutcome {
        self.records
            .lock()
            .push(SearchRecord::new(search_term, movie, POSTER_CDN_BASE));
        RecordOutcome::Recorded
    }
}
