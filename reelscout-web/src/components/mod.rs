//! Server-rendered HTML components for the HTMX + Tailwind UI
//!
//! Components only display their arguments. Every string that came from a
//! remote service goes through [`layout::escape_html`].

pub mod layout;
pub mod movie_card;
pub mod movies;
pub mod search_input;
pub mod trending;

// Re-export main component functions
pub use layout::{escape_html, page_header};
pub use movie_card::movie_card;
pub use movies::movies_section;
pub use search_input::search_input;
pub use trending::trending_section;
