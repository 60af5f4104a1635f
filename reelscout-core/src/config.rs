//! Centralized configuration for Reelscout.
//!
//! Built once at startup and handed to the catalog client, the metrics
//! client and the search session. Nothing reads the process environment
//! after construction.

use std::net::SocketAddr;
use std::time::Duration;

use crate::ReelscoutError;

/// Base URL for poster images, w500 rendition.
pub const POSTER_CDN_BASE: &str = "https://image.tmdb.org/t/p/w500";

/// Central configuration for all Reelscout components.
#[derive(Debug, Clone, Default)]
pub struct ReelscoutConfig {
    pub catalog: CatalogConfig,
    pub metrics: MetricsConfig,
    pub search: SearchConfig,
    pub web: WebConfig,
}

/// Movie catalog (TMDB) access.
///
/// The bearer token is not validated locally; a missing or wrong token
/// surfaces as an HTTP error from the catalog service.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Catalog API base, without trailing slash
    pub base_url: String,
    /// Bearer token attached to every request
    pub api_token: String,
    /// Per-request timeout
    pub request_timeout: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.themoviedb.org/3".to_string(),
            api_token: String::new(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Metrics counter service access.
#[derive(Debug, Clone)]
pub struct MetricsConfig {
    /// Service base; endpoints are appended verbatim, so it should end in `/`
    pub base_url: String,
    /// Prefix joined with a movie's poster path to build `PosterUrl`
    pub poster_base_url: String,
    /// Per-request timeout
    pub request_timeout: Duration,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            poster_base_url: POSTER_CDN_BASE.to_string(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Search session behavior.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Quiet period after the last keystroke before a fetch
    pub debounce_interval: Duration,
    /// Number of trending entries rendered
    pub trending_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_interval: Duration::from_millis(500),
            trending_limit: 5,
        }
    }
}

/// Web UI bind settings.
#[derive(Debug, Clone)]
pub struct WebConfig {
    pub host: String,
    pub port: u16,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl WebConfig {
    /// Resolves host and port into a socket address.
    ///
    /// # Errors
    ///
    /// - `ReelscoutError::Configuration` - If host is not an IP address
    pub fn socket_addr(&self) -> Result<SocketAddr, ReelscoutError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| ReelscoutError::Configuration {
                reason: format!("invalid bind address {}:{}: {e}", self.host, self.port),
            })
    }
}

impl ReelscoutConfig {
    /// Creates configuration with environment variable overrides.
    ///
    /// Unset variables keep their defaults. Unparsable numeric values are
    /// ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Creates configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(token) = lookup("TMDB_API_KEY") {
            config.catalog.api_token = token;
        }

        if let Some(base_url) = lookup("TMDB_API_BASE_URL") {
            config.catalog.base_url = base_url.trim_end_matches('/').to_string();
        }

        if let Some(base_url) = lookup("METRICS_API_BASE_URL") {
            config.metrics.base_url = base_url;
        }

        if let Some(millis) = lookup("REELSCOUT_DEBOUNCE_MS") {
            if let Ok(millis) = millis.parse::<u64>() {
                config.search.debounce_interval = Duration::from_millis(millis);
            }
        }

        if let Some(seconds) = lookup("REELSCOUT_REQUEST_TIMEOUT_SECS") {
            if let Ok(seconds) = seconds.parse::<u64>() {
                config.catalog.request_timeout = Duration::from_secs(seconds);
                config.metrics.request_timeout = Duration::from_secs(seconds);
            }
        }

        if let Some(limit) = lookup("REELSCOUT_TRENDING_LIMIT") {
            if let Ok(limit) = limit.parse::<usize>() {
                config.search.trending_limit = limit;
            }
        }

        config
    }

    /// Creates a configuration pointed at local stub services.
    pub fn for_testing(catalog_base: &str, metrics_base: &str) -> Self {
        Self {
            catalog: CatalogConfig {
                base_url: catalog_base.trim_end_matches('/').to_string(),
                api_token: "test-token".to_string(),
                request_timeout: Duration::from_secs(5),
            },
            metrics: MetricsConfig {
                base_url: metrics_base.to_string(),
                request_timeout: Duration::from_secs(5),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
