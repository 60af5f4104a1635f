//! Full search flow over real HTTP: catalog stub, metrics service, real clients.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::extract::Query;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use reelscout_core::ReelscoutConfig;
use reelscout_search::{CatalogClient, MetricsClient, MovieRef};
use reelscout_web::{SearchCounter, SearchPhase, metrics_router, spawn_search_session};
use serde_json::json;

const BEARER: &str = "Bearer test-token";

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn authorized(headers: &HeaderMap) -> bool {
    headers.get(header::AUTHORIZATION).and_then(|v| v.to_str().ok()) == Some(BEARER)
}

async fn search_movie(
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    let results = match params.get("query").map(String::as_str) {
        Some("batman") => json!([{
            "id": 5,
            "title": "Batman",
            "poster_path": "/x.jpg",
            "vote_average": 7.2,
            "release_date": "1989-06-23",
            "original_language": "en"
        }]),
        _ => json!([]),
    };
    Json(json!({ "page": 1, "results": results })).into_response()
}

async fn discover_movie(headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    Json(json!({
        "page": 1,
        "results": [
            {"id": 1, "title": "Popular One", "poster_path": "/p1.jpg"},
            {"id": 2, "title": "Popular Two", "poster_path": null}
        ]
    }))
    .into_response()
}

/// Polls `check` until it holds or two seconds pass.
async fn eventually<F, Fut>(mut check: F) -> bool
where
    F: FnMut() -> Fut,
    Fut: Future<Output = bool>,
{
    for _ in 0..200 {
        if check().await {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    false
}

#[tokio::test]
async fn batman_search_end_to_end() {
    let catalog_base = serve(
        Router::new()
            .route("/3/search/movie", get(search_movie))
            .route("/3/discover/movie", get(discover_movie)),
    )
    .await;

    let counter = SearchCounter::new();
    counter.increment(
        "alien",
        Some(MovieRef::Id(348)),
        Some("https://image.tmdb.org/t/p/w500/a.jpg".to_string()),
    );
    let metrics_base = serve(metrics_router(counter.clone())).await;

    let mut config =
        ReelscoutConfig::for_testing(&format!("{catalog_base}/3"), &format!("{metrics_base}/"));
    config.search.debounce_interval = Duration::from_millis(50);

    let catalog = CatalogClient::new(&config.catalog).unwrap();
    let metrics = MetricsClient::new(&config.metrics).unwrap();
    let session = spawn_search_session(&config.search, Arc::new(catalog), Arc::new(metrics));
    let handle = &session;
    let counted = &counter;

    // Mount: discovery results and trending from the metrics service.
    assert!(
        eventually(|| async move {
            let snapshot = handle.snapshot().await.unwrap();
            snapshot.search.phase == SearchPhase::Loaded && !snapshot.trending.is_empty()
        })
        .await
    );
    let mounted = session.snapshot().await.unwrap();
    assert_eq!(mounted.search.movies.len(), 2);
    assert_eq!(mounted.trending[0].search_string, "alien");
    assert_eq!(mounted.trending[0].count, Some(1));

    for text in ["b", "ba", "bat", "batm", "batma", "batman"] {
        session.input(text).await.unwrap();
    }

    assert!(
        eventually(|| async move {
            let snapshot = handle.snapshot().await.unwrap();
            snapshot.search.debounced_query == "batman"
                && snapshot.search.phase == SearchPhase::Loaded
        })
        .await
    );
    let searched = session.snapshot().await.unwrap();
    assert_eq!(searched.search.movies.len(), 1);
    assert_eq!(searched.search.movies[0].title, "Batman");
    assert_eq!(searched.search.error_message, None);

    assert!(eventually(|| async move { counted.len() == 2 }).await);
    let batman = counter
        .ranked()
        .into_iter()
        .find(|item| item.search_term == "batman")
        .unwrap();
    assert_eq!(batman.count, 1);
    assert_eq!(batman.movie_id, MovieRef::Id(5));
    assert_eq!(batman.poster_url, "https://image.tmdb.org/t/p/w500/x.jpg");
}

#[tokio::test]
async fn rejected_token_surfaces_error_message() {
    let catalog_base = serve(
        Router::new()
            .route("/3/search/movie", get(search_movie))
            .route("/3/discover/movie", get(discover_movie)),
    )
    .await;

    let mut config = ReelscoutConfig::for_testing(&format!("{catalog_base}/3"), "");
    config.catalog.api_token = "wrong".to_string();
    config.search.debounce_interval = Duration::from_millis(50);

    let catalog = CatalogClient::new(&config.catalog).unwrap();
    let metrics = MetricsClient::new(&config.metrics).unwrap();
    let session = spawn_search_session(&config.search, Arc::new(catalog), Arc::new(metrics));
    let handle = &session;

    assert!(
        eventually(|| async move {
            handle.snapshot().await.unwrap().search.phase == SearchPhase::Failed
        })
        .await
    );
    let snapshot = session.snapshot().await.unwrap();
    let message = snapshot.search.error_message.unwrap();
    assert!(message.starts_with("Something went wrong while fetching movies, "));
    assert!(message.contains("401"));
    assert!(snapshot.search.movies.is_empty());
    assert!(snapshot.trending.is_empty());
}
