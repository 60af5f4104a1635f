//! Reelscout Web - Search session and HTMX UI

#![warn(missing_docs)]
#![warn(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
//!
//! Hosts the debounced search session that owns UI state, the
//! server-rendered components, the HTMX/JSON endpoints, and an in-memory
//! implementation of the search metrics service.

pub mod components;
pub mod debounce;
pub mod handlers;
pub mod metrics_api;
pub mod pages;
pub mod server;
pub mod session;

// Re-export main types
pub use metrics_api::{SearchCounter, metrics_router, run_metrics_server};
pub use server::{AppState, build_router, run_server};
pub use session::{
    SearchPhase, SearchSessionHandle, SearchSnapshot, SearchState, SessionError,
    spawn_search_session,
};
