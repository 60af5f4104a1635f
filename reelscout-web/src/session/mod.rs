//! Debounced search session.
//!
//! The session is an actor that exclusively owns [`SearchState`]. Callers
//! talk to it through a [`SearchSessionHandle`]; catalog fetches run in
//! spawned tasks and report back through the actor's event channel, so all
//! state mutation happens on the actor task.

pub mod actor;
pub mod commands;
pub mod handle;
pub mod state;


pub use actor::spawn_search_session;
pub use commands::SessionCommand;
pub use handle::SearchSessionHandle;
pub use state::{FETCH_ERROR_PREFIX, FetchOutcome, SearchPhase, SearchSnapshot, SearchState};

/// Errors talking to the search session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The session actor has stopped.
    #[error("Search session has shut down")]
    Shutdown,
}
