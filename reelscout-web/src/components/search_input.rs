//! Search input that reports every keystroke to the session.

use super::layout::escape_html;

/// Renders the search box holding `current` text.
///
/// Each `input` event posts the field to `/htmx/search/input`; debouncing
/// happens in the session, not the browser.
pub fn search_input(current: &str) -> String {
    format!(
        r#"<div class="search max-w-2xl mx-auto">
            <input type="text" name="search_term" value="{}"
                   placeholder="Search through thousands of movies"
                   autocomplete="off"
                   hx-post="/htmx/search/input" hx-trigger="input" hx-swap="none"
                   class="w-full px-4 py-3 bg-gray-800 border border-gray-700 rounded-lg text-white placeholder-gray-400 focus:outline-none focus:ring-2 focus:ring-purple-400" />
        </div>"#,
        escape_html(current)
    )
}
