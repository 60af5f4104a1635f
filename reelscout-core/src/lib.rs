//! Reelscout Core - Shared configuration and runtime plumbing
//!
//! Holds the configuration injected into the catalog and metrics clients,
//! the tracing setup used by the binary, and the top-level error type.

pub mod config;
pub mod tracing_setup;

pub use config::{CatalogConfig, MetricsConfig, ReelscoutConfig, SearchConfig, WebConfig};

/// Errors that can bubble up from application startup and the web surface.
#[derive(Debug, thiserror::Error)]
pub enum ReelscoutError {
    #[error("Configuration error: {reason}")]
    Configuration { reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Server error: {reason}")]
    Server { reason: String },
}

impl ReelscoutError {
    /// Returns a user-friendly error message suitable for display.
    pub fn user_message(&self) -> String {
        match self {
            ReelscoutError::Configuration { reason } => format!("Invalid configuration: {reason}"),
            ReelscoutError::Io(_) => "File system or socket error occurred".to_string(),
            ReelscoutError::Server { reason } => format!("Web server error: {reason}"),
        }
    }

    /// Checks if this error is due to user input validation.
    pub fn is_user_error(&self) -> bool {
        matches!(self, ReelscoutError::Configuration { .. })
    }
}

pub type Result<T> = std::result::Result<T, ReelscoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_errors_are_user_errors() {
        let err = ReelscoutError::Configuration {
            reason: "bad port".to_string(),
        };
        assert!(err.is_user_error());
        assert_eq!(err.user_message(), "Invalid configuration: bad port");

        let io = ReelscoutError::from(std::io::Error::other("boom"));
        assert!(!io.is_user_error());
        assert!(io.to_string().contains("boom"));
    }
}
