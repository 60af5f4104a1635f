//! TMDB catalog client: keyword search and popularity-sorted discovery.

use async_trait::async_trait;
use reelscout_core::CatalogConfig;
use reqwest::header::{ACCEPT, CONTENT_TYPE};

use crate::errors::CatalogError;
use crate::providers::CatalogProvider;
use crate::types::{CatalogPage, Movie};

/// Query string for the default discovery page.
pub const DISCOVER_QUERY: &str =
    "include_adult=false&include_video=false&language=en-US&page=1&sort_by=popularity.desc";

/// Authenticated client for the movie catalog.
///
/// Every request carries `Authorization: Bearer <token>` taken from the
/// injected configuration. The token is never checked locally.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: reqwest::Client,
    base_url: String,
    api_token: String,
}

impl CatalogClient {
    /// Creates a catalog client from configuration.
    ///
    /// # Errors
    ///
    /// - `CatalogError::Network` - If the HTTP client cannot be built
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| CatalogError::Network {
                reason: format!("Failed to create HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_token: config.api_token.clone(),
        })
    }

    /// Search endpoint URL with `query` percent-encoded.
    pub fn search_url(&self, query: &str) -> String {
        format!(
            "{}/search/movie?query={}",
            self.base_url,
            urlencoding::encode(query)
        )
    }

    /// Discovery endpoint URL with the default popularity sort.
    pub fn discover_url(&self) -> String {
        format!("{}/discover/movie?{DISCOVER_QUERY}", self.base_url)
    }

    async fn fetch_page(&self, url: &str) -> Result<CatalogPage, CatalogError> {
        let response = self
            .client
            .get(url)
            .bearer_auth(&self.api_token)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| CatalogError::Network {
                reason: format!("Catalog request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Fetch { status });
        }

        response.json().await.map_err(|e| CatalogError::Parse {
            reason: format!("Catalog JSON parsing failed: {e}"),
        })
    }
}

#[async_trait]
impl CatalogProvider for CatalogClient {
    async fn search(&self, query: &str) -> Result<Vec<Movie>, CatalogError> {
        tracing::debug!(query = %query, "Searching catalog");
        let page = self.fetch_page(&self.search_url(query)).await?;
        Ok(page.results)
    }

    async fn discover(&self) -> Result<Vec<Movie>, CatalogError> {
        tracing::debug!("Fetching catalog discovery page");
        let page = self.fetch_page(&self.discover_url()).await?;
        Ok(page.results)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn client(base_url: &str) -> CatalogClient {
        CatalogClient::new(&CatalogConfig {
            base_url: base_url.to_string(),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_urls() {
        let catalog = client("https://api.themoviedb.org/3/");

        assert_eq!(
            catalog.search_url("the dark knight"),
            "https://api.themoviedb.org/3/search/movie?query=the%20dark%20knight"
        );
        assert_eq!(
            catalog.discover_url(),
            "https://api.themoviedb.org/3/discover/movie?include_adult=false&include_video=false&language=en-US&page=1&sort_by=popularity.desc"
        );
    }

    proptest! {
        #[test]
        fn search_url_round_trips_any_query(query in "\\PC{1,40}") {
            let catalog = client("http://catalog");
            let url = catalog.search_url(&query);
            let encoded = url.strip_prefix("http://catalog/search/movie?query=").unwrap();

            prop_assert!(encoded
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || "-_.~%".contains(c)));
            prop_assert_eq!(urlencoding::decode(encoded).unwrap(), query);
        }
    }
}
