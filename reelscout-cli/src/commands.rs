//! CLI command implementations

use anyhow::Context;
use clap::Subcommand;
use reelscout_core::{ReelscoutConfig, WebConfig};
use reelscout_search::{CatalogClient, CatalogProvider, MetricsClient, Movie, TrendingEntry};

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start the web UI
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Port to bind to
        #[arg(short, long, default_value = "3000")]
        port: u16,
    },
    /// Search the catalog by keyword and record the top result
    Search {
        /// Search text
        query: String,
        /// Do not post a search record
        #[arg(long)]
        no_record: bool,
    },
    /// List the most popular movies
    Discover,
    /// Show the most searched terms
    Trending,
    /// Run the in-memory search metrics service
    MetricsServer {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Port to bind to
        #[arg(short, long, default_value = "4000")]
        port: u16,
    },
}

/// Handle the CLI command
///
/// # Errors
/// Returns the error of the command that failed, with context
pub async fn handle_command(command: Commands) -> anyhow::Result<()> {
    let config = ReelscoutConfig::from_env();

    match command {
        Commands::Serve { host, port } => serve(config, host, port).await,
        Commands::Search { query, no_record } => search(&config, &query, !no_record).await,
        Commands::Discover => discover(&config).await,
        Commands::Trending => trending(&config).await,
        Commands::MetricsServer { host, port } => metrics_server(host, port).await,
    }
}

/// Start the web UI with the given listen address
///
/// # Errors
/// - `ReelscoutError::Configuration` - Invalid listen address
/// - `ReelscoutError::Io` - Bind or serve failure
pub async fn serve(mut config: ReelscoutConfig, host: String, port: u16) -> anyhow::Result<()> {
    config.web = WebConfig { host, port };
    reelscout_web::run_server(&config)
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message()))
}

/// Search the catalog and print the results
///
/// The first result is posted to the metrics service unless `record` is
/// false; a failed post is reported but does not fail the command.
///
/// # Errors
/// - `CatalogError` - Catalog request failed
pub async fn search(config: &ReelscoutConfig, query: &str, record: bool) -> anyhow::Result<()> {
    let catalog = CatalogClient::new(&config.catalog)?;
    let movies = catalog
        .fetch(query.trim())
        .await
        .with_context(|| format!("Search for '{query}' failed"))?;

    print_movies(&movies);

    if record && !query.trim().is_empty() {
        if let Some(first) = movies.first() {
            let metrics = MetricsClient::new(&config.metrics)?;
            let search_record = metrics.build_record(query.trim(), first);
            match metrics.send_record(&search_record).await {
                Ok(()) => println!("Recorded search '{}'", search_record.search_string),
                Err(e) => eprintln!("Warning: search record dropped: {e}"),
            }
        }
    }

    Ok(())
}

/// Print the default popularity-sorted page
///
/// # Errors
/// - `CatalogError` - Catalog request failed
pub async fn discover(config: &ReelscoutConfig) -> anyhow::Result<()> {
    let catalog = CatalogClient::new(&config.catalog)?;
    let movies = catalog
        .discover()
        .await
        .context("Fetching popular movies failed")?;

    print_movies(&movies);
    Ok(())
}

/// Print the trending search terms
///
/// # Errors
/// - `MetricsError` - Metrics service unreachable or returned an error
pub async fn trending(config: &ReelscoutConfig) -> anyhow::Result<()> {
    let metrics = MetricsClient::new(&config.metrics)?;
    let entries = metrics
        .fetch_trending()
        .await
        .with_context(|| format!("Fetching trending from {} failed", metrics.endpoint()))?;

    print_trending(&entries, config.search.trending_limit);
    Ok(())
}

/// Run the metrics service until interrupted
///
/// # Errors
/// - `ReelscoutError::Configuration` - Invalid listen address
/// - `ReelscoutError::Io` - Bind or serve failure
pub async fn metrics_server(host: String, port: u16) -> anyhow::Result<()> {
    let addr = WebConfig { host, port }.socket_addr()?;
    reelscout_web::run_metrics_server(addr).await?;
    Ok(())
}

fn print_movies(movies: &[Movie]) {
    if movies.is_empty() {
        println!("No movies found");
        return;
    }

    for movie in movies {
        let rating = movie
            .vote_average
            .map(|v| format!("{v:.1}"))
            .unwrap_or_else(|| "N/A".to_string());
        println!(
            "{:>8}  {}  ({}, {}, {})",
            movie.id,
            movie.title,
            movie.release_year().unwrap_or("N/A"),
            movie.original_language.as_deref().unwrap_or("N/A"),
            rating
        );
    }
}

fn print_trending(entries: &[TrendingEntry], limit: usize) {
    if entries.is_empty() {
        println!("No trending searches yet");
        return;
    }

    for (index, entry) in entries.iter().take(limit).enumerate() {
        match entry.count {
            Some(count) => println!("{}. {} ({count} searches)", index + 1, entry.search_string),
            None => println!("{}. {}", index + 1, entry.search_string),
        }
    }
}
