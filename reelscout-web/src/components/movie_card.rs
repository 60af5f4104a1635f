//! Movie card - poster, title, rating, language, year

use reelscout_search::Movie;

use super::layout::escape_html;

/// Shown when a movie has no poster.
pub const POSTER_PLACEHOLDER: &str = "/static/no-movie.svg";

/// Renders one movie as a list item.
pub fn movie_card(movie: &Movie, poster_base: &str) -> String {
    let poster = movie
        .poster_url(poster_base)
        .unwrap_or_else(|| POSTER_PLACEHOLDER.to_string());
    let rating = movie
        .vote_average
        .map(|v| format!("{v:.1}"))
        .unwrap_or_else(|| "N/A".to_string());
    let language = movie.original_language.as_deref().unwrap_or("N/A");
    let year = movie.release_year().unwrap_or("N/A");
    let title = escape_html(&movie.title);

    format!(
        r#"<li class="movie-card bg-gray-900 rounded-2xl p-5 shadow-inner">
            <img src="{poster}" alt="{title}" class="rounded-lg h-auto w-full" />
            <div class="mt-4">
                <h3 class="text-white font-bold text-base line-clamp-1">{title}</h3>
                <div class="flex items-center gap-2 text-sm text-gray-400 mt-2">
                    <span class="text-white font-bold">★ {rating}</span>
                    <span>•</span>
                    <span class="capitalize">{language}</span>
                    <span>•</span>
                    <span>{year}</span>
                </div>
            </div>
        </li>"#,
        poster = escape_html(&poster),
        language = escape_html(language),
        year = escape_html(year),
    )
}
