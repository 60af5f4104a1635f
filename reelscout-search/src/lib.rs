//! Reelscout Search - Movie catalog and search metrics clients

#![warn(missing_docs)]
#![warn(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
//!
//! Wraps the TMDB catalog (keyword search and popularity discovery) and the
//! best-effort metrics counter service that records searches and serves the
//! trending list.

pub mod catalog;
pub mod errors;
pub mod metrics;
pub mod providers;
pub mod types;

// Re-export main types
pub use catalog::CatalogClient;
pub use errors::{CatalogError, MetricsError};
pub use metrics::{MetricsClient, RecordOutcome};
pub use providers::{CatalogProvider, MetricsRecorder};
pub use types::{CatalogPage, Movie, MovieRef, SearchRecord, TrendingEntry};

/// Convenience type alias for Results with CatalogError.
pub type Result<T> = std::result::Result<T, CatalogError>;
