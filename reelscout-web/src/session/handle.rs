//! Handle for communicating with the search session actor.

use reelscout_search::TrendingEntry;
use tokio::sync::{mpsc, oneshot};

use super::SessionError;
use super::commands::SessionCommand;
use super::state::SearchSnapshot;

/// Cloneable handle to a running search session.
#[derive(Debug, Clone)]
pub struct SearchSessionHandle {
    sender: mpsc::Sender<SessionCommand>,
}

impl SearchSessionHandle {
    /// Creates a new handle with the given command sender.
    pub fn new(sender: mpsc::Sender<SessionCommand>) -> Self {
        Self { sender }
    }

    /// Reports the full text of the search input.
    ///
    /// A fetch follows once the input has been quiet for the debounce
    /// interval.
    ///
    /// # Errors
    /// - `SessionError::Shutdown` - Session actor has stopped
    pub async fn input(&self, text: impl Into<String>) -> Result<(), SessionError> {
        self.sender
            .send(SessionCommand::Input { text: text.into() })
            .await
            .map_err(|_| SessionError::Shutdown)
    }

    /// Returns a copy of the current state and trending list.
    ///
    /// # Errors
    /// - `SessionError::Shutdown` - Session actor has stopped
    pub async fn snapshot(&self) -> Result<SearchSnapshot, SessionError> {
        let (responder, rx) = oneshot::channel();

        self.sender
            .send(SessionCommand::Snapshot { responder })
            .await
            .map_err(|_| SessionError::Shutdown)?;

        rx.await.map_err(|_| SessionError::Shutdown)
    }

    /// Re-fetches the trending list and returns the entries held afterwards.
    ///
    /// A failed fetch leaves the previous list in place.
    ///
    /// # Errors
    /// - `SessionError::Shutdown` - Session actor has stopped
    pub async fn refresh_trending(&self) -> Result<Vec<TrendingEntry>, SessionError> {
        let (responder, rx) = oneshot::channel();

        self.sender
            .send(SessionCommand::RefreshTrending { responder })
            .await
            .map_err(|_| SessionError::Shutdown)?;

        rx.await.map_err(|_| SessionError::Shutdown)
    }

    /// Stops the session. In-flight fetches finish but are not applied.
    ///
    /// # Errors
    /// - `SessionError::Shutdown` - Session actor had already stopped
    pub async fn shutdown(&self) -> Result<(), SessionError> {
        self.sender
            .send(SessionCommand::Shutdown)
            .await
            .map_err(|_| SessionError::Shutdown)
    }
}
