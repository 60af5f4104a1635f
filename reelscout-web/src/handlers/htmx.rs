//! HTMX partial update handlers

use axum::Form;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use serde::Deserialize;

use crate::components::{movies_section, trending_section};
use crate::server::AppState;
use crate::session::SessionError;

/// Form body posted by the search input on every keystroke.
#[derive(Debug, Deserialize)]
pub struct SearchInputForm {
    /// Full text of the input field
    #[serde(default)]
    pub search_term: String,
}

/// Forwards the current input text to the session.
///
/// # Errors
/// - `SessionError::Shutdown` - Session actor has stopped, answered with 503
pub async fn search_input(
    State(state): State<AppState>,
    Form(form): Form<SearchInputForm>,
) -> Result<StatusCode, SessionError> {
    state.session.input(form.search_term).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Movies section fragment for the current state.
///
/// # Errors
/// - `SessionError::Shutdown` - Session actor has stopped, answered with 503
pub async fn movies_fragment(State(state): State<AppState>) -> Result<Html<String>, SessionError> {
    let snapshot = state.session.snapshot().await?;
    Ok(Html(movies_section(
        &snapshot.search,
        &state.poster_base_url,
    )))
}

/// Trending section fragment, re-fetched on every request; empty when
/// nothing is trending.
///
/// # Errors
/// - `SessionError::Shutdown` - Session actor has stopped, answered with 503
pub async fn trending_fragment(
    State(state): State<AppState>,
) -> Result<Html<String>, SessionError> {
    let trending = state.session.refresh_trending().await?;
    Ok(Html(trending_section(&trending, state.trending_limit)))
}
