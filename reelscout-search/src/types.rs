//! Data types shared by the catalog and metrics clients.

use serde::{Deserialize, Serialize};

/// A movie record as returned by the catalog, fields taken verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Catalog identifier
    pub id: u64,
    /// Display title
    pub title: String,
    /// Path fragment appended to the poster CDN base, e.g. `/x.jpg`
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Catalog popularity score
    #[serde(default)]
    pub popularity: f64,
    /// Average user rating out of 10
    #[serde(default)]
    pub vote_average: Option<f64>,
    /// Release date as `YYYY-MM-DD`
    #[serde(default)]
    pub release_date: Option<String>,
    /// ISO 639-1 language code
    #[serde(default)]
    pub original_language: Option<String>,
}

impl Movie {
    /// Creates a movie with only the required fields set.
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            poster_path: None,
            popularity: 0.0,
            vote_average: None,
            release_date: None,
            original_language: None,
        }
    }

    /// Sets the poster path.
    pub fn with_poster_path(mut self, poster_path: impl Into<String>) -> Self {
        self.poster_path = Some(poster_path.into());
        self
    }

    /// Full poster URL under `poster_base`, if the movie has a poster.
    pub fn poster_url(&self, poster_base: &str) -> Option<String> {
        self.poster_path
            .as_deref()
            .filter(|path| !path.is_empty())
            .map(|path| format!("{poster_base}{path}"))
    }

    /// Year part of the release date.
    pub fn release_year(&self) -> Option<&str> {
        self.release_date
            .as_deref()
            .and_then(|date| date.split('-').next())
            .filter(|year| !year.is_empty())
    }
}

/// One page of catalog results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogPage {
    /// Movies on this page
    pub results: Vec<Movie>,
    /// 1-based page number
    #[serde(default)]
    pub page: Option<u32>,
    /// Total pages available
    #[serde(default)]
    pub total_pages: Option<u32>,
    /// Total matching movies
    #[serde(default)]
    pub total_results: Option<u64>,
}

/// Movie reference stored by the metrics service.
///
/// The service stores `"unknown"` when a record arrived without an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MovieRef {
    /// Catalog identifier
    Id(u64),
    /// Placeholder string
    Label(String),
}

impl std::fmt::Display for MovieRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MovieRef::Id(id) => write!(f, "{id}"),
            MovieRef::Label(label) => write!(f, "{label}"),
        }
    }
}

/// Aggregated search entry served by the metrics service. Rank is list order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingEntry {
    /// The search string that was counted
    #[serde(rename = "SearchString", alias = "SearchTerm")]
    pub search_string: String,
    /// First movie recorded for this search
    #[serde(rename = "MovieId")]
    pub movie_id: MovieRef,
    /// Poster of that movie
    #[serde(rename = "PosterUrl", default)]
    pub poster_url: String,
    /// Number of recorded searches, when the service reports it
    #[serde(rename = "Count", default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
}

/// Search event posted to the metrics service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRecord {
    /// The settled search query
    #[serde(rename = "SearchString")]
    pub search_string: String,
    /// Id of the first result
    #[serde(rename = "MovieId")]
    pub movie_id: u64,
    /// Poster CDN base joined with the first result's poster path
    #[serde(rename = "PosterUrl")]
    pub poster_url: String,
}

impl SearchRecord {
    /// Builds the record for `movie` found by `search_term`.
    ///
    /// The poster URL is a plain concatenation; a movie without a poster
    /// yields the bare base.
    pub fn new(search_term: &str, movie: &Movie, poster_base: &str) -> Self {
        Self {
            search_string: search_term.to_string(),
            movie_id: movie.id,
            poster_url: format!("{poster_base}{}", movie.poster_path.as_deref().unwrap_or("")),
        }
    }
}

#[cfg(test)]
mod tests {
    use reelscout_core::config::POSTER_CDN_BASE;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_movie_defaults_missing_fields() {
        let page: CatalogPage = serde_json::from_value(json!({
            "results": [{"id": 5, "title": "Batman", "poster_path": "/x.jpg"}]
        }))
        .unwrap();

        let movie = &page.results[0];
        assert_eq!(movie.id, 5);
        assert_eq!(movie.popularity, 0.0);
        assert_eq!(movie.vote_average, None);
        assert_eq!(page.page, None);
    }

    #[test]
    fn test_null_poster_path() {
        let movie: Movie =
            serde_json::from_value(json!({"id": 1, "title": "Untitled", "poster_path": null}))
                .unwrap();
        assert_eq!(movie.poster_url(POSTER_CDN_BASE), None);
    }

    #[test]
    fn test_release_year() {
        let mut movie = Movie::new(1, "Heat");
        assert_eq!(movie.release_year(), None);
        movie.release_date = Some("1995-12-15".to_string());
        assert_eq!(movie.release_year(), Some("1995"));
        movie.release_date = Some(String::new());
        assert_eq!(movie.release_year(), None);
    }

    #[test]
    fn test_search_record_wire_format() {
        let movie = Movie::new(5, "Batman").with_poster_path("/x.jpg");
        let record = SearchRecord::new("batman", &movie, POSTER_CDN_BASE);

        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "SearchString": "batman",
                "MovieId": 5,
                "PosterUrl": "https://image.tmdb.org/t/p/w500/x.jpg"
            })
        );
    }

    #[test]
    fn test_trending_entry_accepts_both_key_spellings() {
        let entries: Vec<TrendingEntry> = serde_json::from_value(json!([
            {"SearchString": "alien", "MovieId": 348, "PosterUrl": "https://cdn/a.jpg"},
            {"SearchTerm": "heat", "MovieId": "unknown", "PosterUrl": "unknown", "Count": 3}
        ]))
        .unwrap();

        assert_eq!(entries[0].search_string, "alien");
        assert_eq!(entries[0].movie_id, MovieRef::Id(348));
        assert_eq!(entries[0].count, None);
        assert_eq!(entries[1].search_string, "heat");
        assert_eq!(entries[1].movie_id.to_string(), "unknown");
        assert_eq!(entries[1].count, Some(3));
    }
}
