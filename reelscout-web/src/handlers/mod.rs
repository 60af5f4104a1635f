//! HTTP request handlers organized by functionality

pub mod api;
pub mod htmx;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::session::SessionError;

// Re-export handler functions
pub use api::api_search_state;
pub use htmx::{SearchInputForm, movies_fragment, search_input, trending_fragment};

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        (StatusCode::SERVICE_UNAVAILABLE, self.to_string()).into_response()
    }
}
