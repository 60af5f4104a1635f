//! Actor implementation for the search session.

use std::sync::Arc;

use reelscout_core::SearchConfig;
use reelscout_search::{CatalogProvider, MetricsRecorder, TrendingEntry};
use tokio::sync::{mpsc, oneshot};

use super::commands::{SessionCommand, SessionEvent};
use super::handle::SearchSessionHandle;
use super::state::{FetchOutcome, SearchSnapshot, SearchState};
use crate::debounce::{Debouncer, debounce};

/// Capacity of the command channel shared by all handles.
const COMMAND_CHANNEL_CAPACITY: usize = 100;

/// Spawns a search session actor and returns its handle.
///
/// On start the session loads the trending list and issues the initial
/// discovery fetch for the empty query. Input is debounced by
/// `config.debounce_interval`.
pub fn spawn_search_session(
    config: &SearchConfig,
    catalog: Arc<dyn CatalogProvider>,
    metrics: Arc<dyn MetricsRecorder>,
) -> SearchSessionHandle {
    let (sender, receiver) = mpsc::channel(COMMAND_CHANNEL_CAPACITY);
    let (event_sender, event_receiver) = mpsc::unbounded_channel();
    let (debouncer, settled) = debounce(config.debounce_interval);

    let session = SearchSession {
        state: SearchState::default(),
        trending: Vec::new(),
        catalog,
        metrics,
        debouncer,
        events: event_sender,
    };

    tokio::spawn(run_session_loop(session, receiver, settled, event_receiver));

    SearchSessionHandle::new(sender)
}

struct SearchSession {
    state: SearchState,
    trending: Vec<TrendingEntry>,
    catalog: Arc<dyn CatalogProvider>,
    metrics: Arc<dyn MetricsRecorder>,
    debouncer: Debouncer<String>,
    events: mpsc::UnboundedSender<SessionEvent>,
}

/// Processes commands, settled queries and task completions in order until
/// every handle is dropped or a shutdown command arrives.
async fn run_session_loop(
    mut session: SearchSession,
    mut receiver: mpsc::Receiver<SessionCommand>,
    mut settled: mpsc::Receiver<String>,
    mut events: mpsc::UnboundedReceiver<SessionEvent>,
) {
    tracing::debug!("Search session started");

    session.load_trending(None);
    session.start_fetch(String::new());

    loop {
        tokio::select! {
            command = receiver.recv() => match command {
                Some(command) => {
                    if !session.handle_command(command) {
                        break;
                    }
                }
                None => break,
            },
            Some(query) = settled.recv() => session.handle_settled(query),
            Some(event) = events.recv() => session.handle_event(event),
        }
    }

    tracing::debug!("Search session stopped");
}

impl SearchSession {
    /// Returns false to stop the actor.
    fn handle_command(&mut self, command: SessionCommand) -> bool {
        match command {
            SessionCommand::Input { text } => {
                self.state.raw_input = text.clone();
                self.debouncer.push(text);
            }
            SessionCommand::Snapshot { responder } => {
                let _ = responder.send(SearchSnapshot {
                    search: self.state.clone(),
                    trending: self.trending.clone(),
                });
            }
            SessionCommand::RefreshTrending { responder } => self.load_trending(Some(responder)),
            SessionCommand::Shutdown => return false,
        }
        true
    }

    fn handle_settled(&mut self, query: String) {
        if query == self.state.debounced_query {
            tracing::trace!(query = %query, "Settled query unchanged");
            return;
        }
        self.start_fetch(query);
    }

    fn handle_event(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::FetchCompleted { generation, result } => {
                match self.state.complete_fetch(generation, result) {
                    FetchOutcome::Stale => {
                        tracing::debug!(generation, "Discarded stale catalog response");
                    }
                    FetchOutcome::Failed => {
                        tracing::debug!(
                            query = %self.state.debounced_query,
                            error = ?self.state.error_message,
                            "Catalog fetch failed"
                        );
                    }
                    FetchOutcome::Loaded => self.record_first_result(),
                }
            }
            SessionEvent::TrendingLoaded { entries, responder } => {
                // A failed fetch keeps the previous list.
                if let Some(entries) = entries {
                    self.trending = entries;
                }
                if let Some(responder) = responder {
                    let _ = responder.send(self.trending.clone());
                }
            }
        }
    }

    fn start_fetch(&mut self, query: String) {
        let generation = self.state.begin_fetch(query.clone());
        tracing::debug!(query = %query, generation, "Fetching movies");

        let catalog = self.catalog.clone();
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = catalog.fetch(&query).await;
            let _ = events.send(SessionEvent::FetchCompleted { generation, result });
        });
    }

    fn load_trending(&self, responder: Option<oneshot::Sender<Vec<TrendingEntry>>>) {
        let metrics = self.metrics.clone();
        let events = self.events.clone();
        tokio::spawn(async move {
            let entries = metrics.trending().await;
            let _ = events.send(SessionEvent::TrendingLoaded { entries, responder });
        });
    }

    /// Fire-and-forget metrics record for the first result of a keyword search.
    fn record_first_result(&self) {
        let Some(movie) = self.state.metrics_candidate().cloned() else {
            return;
        };

        let query = self.state.debounced_query.clone();
        let metrics = self.metrics.clone();
        tokio::spawn(async move {
            metrics.record_search(&query, &movie).await;
        });
    }
}
