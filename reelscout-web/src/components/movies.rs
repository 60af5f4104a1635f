//! "All Movies" section: loading, error, or the result grid

use reelscout_search::Movie;

use super::layout::escape_html;
use super::movie_card::movie_card;
use crate::session::SearchState;

/// Renders the inner content of the movies section for `state`.
///
/// Loading wins over an error, and an error wins over results.
pub fn movies_section(state: &SearchState, poster_base: &str) -> String {
    let body = if state.is_loading {
        r#"<p class="text-white">Loading...</p>"#.to_string()
    } else if let Some(message) = &state.error_message {
        format!(r#"<p class="text-red-500">{}</p>"#, escape_html(message))
    } else {
        movie_list(&state.movies, poster_base)
    };

    format!(
        r#"<h2 class="text-2xl font-bold text-white mb-6">All Movies</h2>
        {body}"#
    )
}

fn movie_list(movies: &[Movie], poster_base: &str) -> String {
    let cards: String = movies
        .iter()
        .map(|movie| movie_card(movie, poster_base))
        .collect();

    format!(
        r#"<ul class="grid grid-cols-1 gap-5 xs:grid-cols-2 md:grid-cols-3 lg:grid-cols-4">{cards}</ul>"#
    )
}

#[cfg(test)]
mod tests {
    use reelscout_core::config::POSTER_CDN_BASE;

    use super::*;

    #[test]
    fn test_loading_state() {
        let state = SearchState {
            is_loading: true,
            error_message: Some("ignored".to_string()),
            ..Default::default()
        };

        let html = movies_section(&state, POSTER_CDN_BASE);

        assert!(html.contains("Loading..."));
        assert!(!html.contains("ignored"));
    }

    #[test]
    fn test_error_hides_stale_results() {
        let state = SearchState {
            movies: vec![Movie::new(1, "Stale")],
            error_message: Some("Something went wrong while fetching movies, <boom>".to_string()),
            ..Default::default()
        };

        let html = movies_section(&state, POSTER_CDN_BASE);

        assert!(html.contains("text-red-500"));
        assert!(html.contains("&lt;boom&gt;"));
        assert!(!html.contains("Stale"));
    }

    #[test]
    fn test_results_render_one_card_each() {
        let state = SearchState {
            movies: vec![Movie::new(5, "Batman").with_poster_path("/x.jpg")],
            ..Default::default()
        };

        let html = movies_section(&state, POSTER_CDN_BASE);

        assert_eq!(html.matches("movie-card").count(), 1);
        assert!(html.contains("Batman"));
    }
}
