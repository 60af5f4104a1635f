//! Search state owned by the session actor.

use reelscout_search::{CatalogError, Movie, TrendingEntry};
use serde::Serialize;

/// Prefix of every user-visible fetch failure.
pub const FETCH_ERROR_PREFIX: &str = "Something went wrong while fetching movies";

/// Lifecycle of the current fetch cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchPhase {
    /// No fetch issued yet
    #[default]
    Idle,
    /// A fetch for `debounced_query` is in flight
    Loading,
    /// The latest fetch succeeded
    Loaded,
    /// The latest fetch failed; results are from an earlier fetch
    Failed,
}

/// What a completed fetch did to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Superseded by a newer fetch and ignored
    Stale,
    /// Results replaced
    Loaded,
    /// Error message set, results kept
    Failed,
}

/// UI state of one search session.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchState {
    /// Text currently in the input field
    pub raw_input: String,
    /// Last settled query, the one results belong to
    pub debounced_query: String,
    /// Results of the last successful fetch
    pub movies: Vec<Movie>,
    /// True while the latest fetch is in flight
    pub is_loading: bool,
    /// Message of the latest failed fetch
    pub error_message: Option<String>,
    /// Current phase
    pub phase: SearchPhase,
    /// Number of fetches issued; tags completions so stale ones are dropped
    pub generation: u64,
}

impl SearchState {
    /// Enters `Loading` for `query` and returns the new fetch generation.
    pub fn begin_fetch(&mut self, query: String) -> u64 {
        self.debounced_query = query;
        self.generation += 1;
        self.is_loading = true;
        self.error_message = None;
        self.phase = SearchPhase::Loading;
        self.generation
    }

    /// Applies a fetch completion if it belongs to the latest generation.
    pub fn complete_fetch(
        &mut self,
        generation: u64,
        result: Result<Vec<Movie>, CatalogError>,
    ) -> FetchOutcome {
        if generation != self.generation {
            return FetchOutcome::Stale;
        }

        self.is_loading = false;
        match result {
            Ok(movies) => {
                self.movies = movies;
                self.phase = SearchPhase::Loaded;
                FetchOutcome::Loaded
            }
            Err(e) => {
                self.error_message = Some(format!("{FETCH_ERROR_PREFIX}, {e}"));
                self.phase = SearchPhase::Failed;
                FetchOutcome::Failed
            }
        }
    }

    /// The movie to report to metrics after a keyword search.
    ///
    /// None for the discovery page and for empty results.
    pub fn metrics_candidate(&self) -> Option<&Movie> {
        if self.debounced_query.is_empty() || self.phase != SearchPhase::Loaded {
            return None;
        }
        self.movies.first()
    }
}

/// Copy of the session state handed to renderers.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchSnapshot {
    /// Search state at the time of the request
    pub search: SearchState,
    /// Trending entries in rank order; empty when unavailable
    pub trending: Vec<TrendingEntry>,
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;

    #[test]
    fn test_begin_fetch_resets_error() {
        let mut state = SearchState {
            error_message: Some("old".to_string()),
            phase: SearchPhase::Failed,
            ..Default::default()
        };

        let generation = state.begin_fetch("heat".to_string());

        assert_eq!(generation, 1);
        assert!(state.is_loading);
        assert_eq!(state.error_message, None);
        assert_eq!(state.phase, SearchPhase::Loading);
        assert_eq!(state.debounced_query, "heat");
    }

    #[test]
    fn test_stale_completion_is_ignored() {
        let mut state = SearchState::default();
        let first = state.begin_fetch("slow".to_string());
        let second = state.begin_fetch("fast".to_string());

        assert_eq!(
            state.complete_fetch(second, Ok(vec![Movie::new(2, "Fast")])),
            FetchOutcome::Loaded
        );
        assert_eq!(
            state.complete_fetch(first, Ok(vec![Movie::new(1, "Slow")])),
            FetchOutcome::Stale
        );
        assert_eq!(state.movies[0].title, "Fast");
    }

    #[test]
    fn test_failure_keeps_results() {
        let mut state = SearchState::default();
        let generation = state.begin_fetch(String::new());
        state.complete_fetch(generation, Ok(vec![Movie::new(1, "Popular")]));

        let generation = state.begin_fetch("heat".to_string());
        let outcome = state.complete_fetch(
            generation,
            Err(CatalogError::Fetch {
                status: StatusCode::NOT_FOUND,
            }),
        );

        assert_eq!(outcome, FetchOutcome::Failed);
        assert!(!state.is_loading);
        assert_eq!(state.movies.len(), 1);
        let message = state.error_message.unwrap();
        assert!(message.starts_with("Something went wrong while fetching movies, "));
        assert!(message.contains("404"));
    }

    #[test]
    fn test_metrics_candidate_requires_keyword_search() {
        let mut state = SearchState::default();
        let generation = state.begin_fetch(String::new());
        state.complete_fetch(generation, Ok(vec![Movie::new(1, "Popular")]));
        assert!(state.metrics_candidate().is_none());

        let generation = state.begin_fetch("zzzz".to_string());
        state.complete_fetch(generation, Ok(Vec::new()));
        assert!(state.metrics_candidate().is_none());

        let generation = state.begin_fetch("alien".to_string());
        state.complete_fetch(
            generation,
            Ok(vec![Movie::new(348, "Alien"), Movie::new(8077, "Alien 3")]),
        );
        assert_eq!(state.metrics_candidate().map(|m| m.id), Some(348));
    }
}
