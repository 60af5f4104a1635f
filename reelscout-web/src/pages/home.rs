//! Home page - search box, trending searches, movie grid

use axum::extract::State;
use axum::response::Html;

use crate::components::layout::{page_header, render_page};
use crate::components::{movies_section, search_input, trending_section};
use crate::server::AppState;
use crate::session::SessionError;

/// Renders the home page from the current session state.
///
/// Every page load re-fetches the trending list. The movies section then
/// polls `/htmx/movies` for updates.
///
/// # Errors
/// - `SessionError::Shutdown` - Session actor has stopped, answered with 503
pub async fn home_page(State(state): State<AppState>) -> Result<Html<String>, SessionError> {
    let trending = state.session.refresh_trending().await?;
    let snapshot = state.session.snapshot().await?;

    let content = format!(
        r#"{header}
        <div id="trending">
            {trending}
        </div>
        <section id="all-movies" class="space-y-9" hx-get="/htmx/movies" hx-trigger="every 1s" hx-swap="innerHTML">
            {movies}
        </section>"#,
        header = page_header(&search_input(&snapshot.search.raw_input)),
        trending = trending_section(&trending, state.trending_limit),
        movies = movies_section(&snapshot.search, &state.poster_base_url),
    );

    Ok(render_page("Search", &content))
}
