//! JSON API handlers for external clients

use axum::extract::State;
use axum::response::Json;

use crate::server::AppState;
use crate::session::{SearchSnapshot, SessionError};

/// Current search state and trending list as JSON.
///
/// # Errors
/// - `SessionError::Shutdown` - Session actor has stopped, answered with 503
pub async fn api_search_state(
    State(state): State<AppState>,
) -> Result<Json<SearchSnapshot>, SessionError> {
    Ok(Json(state.session.snapshot().await?))
}
