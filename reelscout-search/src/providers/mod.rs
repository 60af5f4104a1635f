//! Provider traits behind the catalog and metrics clients.

use async_trait::async_trait;

use crate::errors::CatalogError;
use crate::metrics::RecordOutcome;
use crate::types::{Movie, TrendingEntry};

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

#[cfg(any(test, feature = "test-utils"))]
pub use mock::{CatalogCall, MockCatalog, MockMetrics};

/// Source of movie listings.
///
/// Implemented by the HTTP [`crate::CatalogClient`] and by mocks in tests.
#[async_trait]
pub trait CatalogProvider: Send + Sync + std::fmt::Debug {
    /// Keyword search.
    ///
    /// # Errors
    /// - `CatalogError::Fetch` - Non-success status from the catalog
    /// - `CatalogError::Network` - Connectivity issues
    /// - `CatalogError::Parse` - Malformed response body
    async fn search(&self, query: &str) -> Result<Vec<Movie>, CatalogError>;

    /// Default popularity-sorted page.
    ///
    /// # Errors
    /// Same as [`CatalogProvider::search`].
    async fn discover(&self) -> Result<Vec<Movie>, CatalogError>;

    /// Discovery for an empty query, keyword search otherwise.
    ///
    /// # Errors
    /// Same as [`CatalogProvider::search`].
    async fn fetch(&self, query: &str) -> Result<Vec<Movie>, CatalogError> {
        if query.is_empty() {
            self.discover().await
        } else {
            self.search(query).await
        }
    }
}

/// Best-effort sink and source for search metrics.
///
/// Neither method reports failure to the caller beyond a value it may drop.
#[async_trait]
pub trait MetricsRecorder: Send + Sync + std::fmt::Debug {
    /// Trending entries, or `None` when they could not be fetched.
    async fn trending(&self) -> Option<Vec<TrendingEntry>>;

    /// Records that `search_term` led to `movie`.
    async fn record_search(&self, search_term: &str, movie: &Movie) -> RecordOutcome;
}
