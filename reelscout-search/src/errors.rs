//! Error types for the catalog and metrics clients.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors from the movie catalog service. These reach the user.
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    /// Catalog answered with a non-success status.
    #[error("Catalog request failed with HTTP {status}")]
    Fetch {
        /// Status returned by the catalog
        status: StatusCode,
    },

    /// Connection-level failure before a response arrived.
    #[error("Network error: {reason}")]
    Network {
        /// The reason for the network error
        reason: String,
    },

    /// Response body was not the expected JSON.
    #[error("Parse error: {reason}")]
    Parse {
        /// The reason for the parse error
        reason: String,
    },
}

/// Errors from the metrics service. Only ever logged on best-effort paths.
#[derive(Debug, Clone, Error)]
pub enum MetricsError {
    /// Metrics service answered with a non-success status.
    #[error("Metrics request failed with HTTP {status}")]
    Fetch {
        /// Status returned by the metrics service
        status: StatusCode,
    },

    /// Connection-level failure, including an unusable base URL.
    #[error("Network error: {reason}")]
    Network {
        /// The reason for the network error
        reason: String,
    },

    /// Response body was not the expected JSON.
    #[error("Parse error: {reason}")]
    Parse {
        /// The reason for the parse error
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_mentions_status() {
        let err = CatalogError::Fetch {
            status: StatusCode::NOT_FOUND,
        };
        assert_eq!(err.to_string(), "Catalog request failed with HTTP 404 Not Found");

        let err = MetricsError::Fetch {
            status: StatusCode::INTERNAL_SERVER_ERROR,
        };
        assert!(err.to_string().contains("500"));
    }
}
