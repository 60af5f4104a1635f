//! Layout components - page shell, header, escaping

use axum::response::Html;

/// Escapes text for use in HTML content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders the hero header with the search input below the headline.
pub fn page_header(search_input: &str) -> String {
    format!(
        r#"<header class="text-center mb-12">
            <h1 class="text-4xl font-bold text-white mb-8">Find <span class="text-gradient">Movies</span> You'll Enjoy Without the Hassle</h1>
            {search_input}
        </header>"#
    )
}

/// Wraps page content in the full HTML document.
pub fn render_page(title: &str, content: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
        <html lang="en">
        <head>
            <title>{title} - Reelscout</title>
            <meta charset="utf-8">
            <meta name="viewport" content="width=device-width, initial-scale=1">
            <script src="https://cdn.tailwindcss.com"></script>
            <script src="https://unpkg.com/htmx.org@1.9.10"></script>
            <style>
                .text-gradient {{ background: linear-gradient(90deg, #d6c7ff, #ab8bff); -webkit-background-clip: text; color: transparent; }}
            </style>
        </head>
        <body class="bg-gray-950 min-h-screen">
            <main class="max-w-7xl mx-auto px-4 py-12">
                {content}
            </main>
        </body>
        </html>"#
    ))
}
