//! In-memory search metrics service.
//!
//! Counts searches by term and serves them back most-searched first. The
//! movie reference and poster of the first record for a term stick; later
//! records only bump the count.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use parking_lot::RwLock;
use reelscout_core::ReelscoutError;
use reelscout_search::MovieRef;
use reelscout_search::metrics::METRICS_RESOURCE;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_http::cors::CorsLayer;

/// Stored value for fields a record did not carry.
const UNKNOWN: &str = "unknown";

/// One counted search term.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsItem {
    /// The counted search string
    #[serde(rename = "SearchTerm")]
    pub search_term: String,
    /// Number of records received for the term
    #[serde(rename = "Count")]
    pub count: u64,
    /// Movie from the first record
    #[serde(rename = "MovieId")]
    pub movie_id: MovieRef,
    /// Poster from the first record
    #[serde(rename = "PosterUrl")]
    pub poster_url: String,
}

/// POST body accepted by the service.
#[derive(Debug, Deserialize)]
pub struct MetricsUpdate {
    /// Required, non-empty
    #[serde(rename = "SearchString", default)]
    pub search_string: Option<String>,
    /// Catalog id of the first result
    #[serde(rename = "MovieId", default)]
    pub movie_id: Option<MovieRef>,
    /// Poster of the first result
    #[serde(rename = "PosterUrl", default)]
    pub poster_url: Option<String>,
}

/// Shared search counter.
#[derive(Debug, Clone, Default)]
pub struct SearchCounter {
    items: Arc<RwLock<HashMap<String, MetricsItem>>>,
}

impl SearchCounter {
    /// Creates an empty counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one search for `term` and returns the updated item.
    pub fn increment(
        &self,
        term: &str,
        movie_id: Option<MovieRef>,
        poster_url: Option<String>,
    ) -> MetricsItem {
        let mut items = self.items.write();
        let item = items
            .entry(term.to_string())
            .or_insert_with(|| MetricsItem {
                search_term: term.to_string(),
                count: 0,
                movie_id: movie_id.unwrap_or_else(|| MovieRef::Label(UNKNOWN.to_string())),
                poster_url: poster_url.unwrap_or_else(|| UNKNOWN.to_string()),
            });
        item.count += 1;
        item.clone()
    }

    /// All items, highest count first; equal counts by term.
    pub fn ranked(&self) -> Vec<MetricsItem> {
        let mut items: Vec<MetricsItem> = self.items.read().values().cloned().collect();
        items.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.search_term.cmp(&b.search_term))
        });
        items
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    /// True when nothing has been counted.
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }
}

/// Router serving `GET` and `POST /movie-metrics` with permissive CORS.
pub fn metrics_router(counter: SearchCounter) -> Router {
    Router::new()
        .route(
            &format!("/{METRICS_RESOURCE}"),
            get(list_metrics).post(record_metric),
        )
        .layer(CorsLayer::permissive())
        .with_state(counter)
}

async fn list_metrics(State(counter): State<SearchCounter>) -> Json<Vec<MetricsItem>> {
    Json(counter.ranked())
}

async fn record_metric(
    State(counter): State<SearchCounter>,
    payload: Result<Json<MetricsUpdate>, JsonRejection>,
) -> Response {
    let update = match payload {
        Ok(Json(update)) => update,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Rejected metrics body");
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": rejection.body_text() })),
            )
                .into_response();
        }
    };

    let Some(term) = update.search_string.filter(|term| !term.is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Missing SearchString" })),
        )
            .into_response();
    };

    let item = counter.increment(&term, update.movie_id, update.poster_url);
    tracing::debug!(search = %term, count = item.count, "Counted search");

    Json(json!({ "message": format!("Updated {term}"), "item": item })).into_response()
}

/// Serves the metrics service on `addr` until the process exits.
///
/// # Errors
/// - `ReelscoutError::Io` - Bind or serve failure
pub async fn run_metrics_server(addr: SocketAddr) -> Result<(), ReelscoutError> {
    let app = metrics_router(SearchCounter::new());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        "Metrics service running on http://{}/{METRICS_RESOURCE}",
        listener.local_addr()?
    );
    axum::serve(listener, app).await?;
    Ok(())
}
