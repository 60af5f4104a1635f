//! Messages processed by the search session actor.

use reelscout_search::{CatalogError, Movie, TrendingEntry};
use tokio::sync::oneshot;

use super::state::SearchSnapshot;

/// Commands sent by handles.
#[derive(Debug)]
pub enum SessionCommand {
    /// Raw search input changed
    Input {
        /// Full text of the input field
        text: String,
    },
    /// Request a copy of the current state
    Snapshot {
        /// Receives the snapshot
        responder: oneshot::Sender<SearchSnapshot>,
    },
    /// Re-fetch the trending list, then reply with the list now held
    RefreshTrending {
        /// Receives the trending entries after the fetch
        responder: oneshot::Sender<Vec<TrendingEntry>>,
    },
    /// Stop the actor
    Shutdown,
}

/// Completions reported by tasks the actor spawned.
#[derive(Debug)]
pub(crate) enum SessionEvent {
    FetchCompleted {
        generation: u64,
        result: Result<Vec<Movie>, CatalogError>,
    },
    TrendingLoaded {
        entries: Option<Vec<TrendingEntry>>,
        responder: Option<oneshot::Sender<Vec<TrendingEntry>>>,
    },
}
