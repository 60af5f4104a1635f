//! HTMX + Tailwind web server for Reelscout
//!
//! Provides both HTMX partial updates and a JSON API endpoint over a single
//! search session.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use reelscout_core::{ReelscoutConfig, ReelscoutError};
use reelscout_search::{CatalogClient, MetricsClient};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use crate::handlers::{api_search_state, movies_fragment, search_input, trending_fragment};
use crate::pages::home_page;
use crate::session::{SearchSessionHandle, spawn_search_session};

/// Shared state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Handle to the search session actor
    pub session: SearchSessionHandle,
    /// Poster CDN base joined with `poster_path` when rendering cards
    pub poster_base_url: String,
    /// Number of trending entries to show
    pub trending_limit: usize,
}

/// Builds the application router over `state`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Main page
        .route("/", get(home_page))
        // HTMX partial update endpoints
        .route("/htmx/search/input", post(search_input))
        .route("/htmx/movies", get(movies_fragment))
        .route("/htmx/trending", get(trending_fragment))
        // JSON API endpoint
        .route("/api/search", get(api_search_state))
        // Static assets
        .nest_service("/static", ServeDir::new("reelscout-web/static"))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Starts the search session and serves the web UI until the process exits.
///
/// One session serves every client, so the UI is single-user.
///
/// # Errors
/// - `ReelscoutError::Configuration` - Invalid listen address
/// - `ReelscoutError::Server` - HTTP clients could not be built
/// - `ReelscoutError::Io` - Bind or serve failure
pub async fn run_server(config: &ReelscoutConfig) -> Result<(), ReelscoutError> {
    if config.catalog.api_token.is_empty() {
        tracing::warn!("TMDB_API_KEY is not set, catalog requests will be rejected");
    }
    if config.metrics.base_url.is_empty() {
        tracing::warn!("METRICS_API_BASE_URL is not set, trending and search records are disabled");
    }

    let catalog = CatalogClient::new(&config.catalog).map_err(|e| ReelscoutError::Server {
        reason: e.to_string(),
    })?;
    let metrics = MetricsClient::new(&config.metrics).map_err(|e| ReelscoutError::Server {
        reason: e.to_string(),
    })?;

    let session = spawn_search_session(&config.search, Arc::new(catalog), Arc::new(metrics));
    let state = AppState {
        session,
        poster_base_url: config.metrics.poster_base_url.clone(),
        trending_limit: config.search.trending_limit,
    };

    let addr = config.web.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Reelscout running on http://{}", listener.local_addr()?);
    axum::serve(listener, build_router(state)).await?;
    Ok(())
}
