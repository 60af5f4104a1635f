//! Trending searches list

use reelscout_search::TrendingEntry;

use super::layout::escape_html;

/// Renders the top `limit` trending entries with their 1-based rank.
///
/// An empty list renders nothing so the section stays hidden.
pub fn trending_section(entries: &[TrendingEntry], limit: usize) -> String {
    if entries.is_empty() || limit == 0 {
        return String::new();
    }

    let items: String = entries
        .iter()
        .take(limit)
        .enumerate()
        .map(|(index, entry)| {
            format!(
                r#"<li class="flex items-center min-w-[200px]" data-movie-id="{}">
                    <p class="text-7xl font-bold text-gray-500">{}</p>
                    <img src="{}" alt="{}" class="w-32 h-44 rounded-lg object-cover -ml-3.5" />
                </li>"#,
                escape_html(&entry.movie_id.to_string()),
                index + 1,
                escape_html(&entry.poster_url),
                escape_html(&entry.search_string),
            )
        })
        .collect();

    format!(
        r#"<section class="trending mb-12">
            <h2 class="text-2xl font-bold text-white mb-6">Trending Movies</h2>
            <ul class="flex gap-5 overflow-x-auto">{items}</ul>
        </section>"#
    )
}
