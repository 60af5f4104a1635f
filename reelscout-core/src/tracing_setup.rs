//! Log output for the `reelscout` binary.
//!
//! Two sinks share one registry: the terminal, filtered to what the user
//! asked for, and `<logs_dir>/reelscout-last-run.log`, which keeps every
//! event of the current run for bug reports.

use std::fs::{File, create_dir_all};
use std::path::{Path, PathBuf};

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// Name of the run log inside the logs directory.
pub const LAST_RUN_LOG: &str = "reelscout-last-run.log";

/// Directory used when the caller does not pick one.
const DEFAULT_LOGS_DIR: &str = "logs";

/// Installs the global subscriber.
///
/// A set `RUST_LOG` replaces `console_level` on the terminal; the run log is
/// always at trace level and is truncated on start.
///
/// # Errors
///
/// - `Box<dyn std::error::Error>` - The run log cannot be created, or a
///   global subscriber is already installed
pub fn init_tracing(
    console_level: Level,
    logs_dir: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let (run_log, run_log_path) = open_run_log(logs_dir.unwrap_or(Path::new(DEFAULT_LOGS_DIR)))?;

    let terminal_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(console_level.as_str()));
    let terminal = fmt::layer()
        .with_target(true)
        .without_time()
        .with_filter(terminal_filter);

    let run_log_layer = fmt::layer()
        .with_ansi(false)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_writer(run_log)
        .with_filter(EnvFilter::new("trace"));

    tracing_subscriber::registry()
        .with(terminal)
        .with(run_log_layer)
        .try_init()?;

    tracing::debug!(level = %console_level, run_log = %run_log_path.display(), "Logging ready");
    Ok(())
}

fn open_run_log(logs_dir: &Path) -> std::io::Result<(File, PathBuf)> {
    create_dir_all(logs_dir)?;
    let path = logs_dir.join(LAST_RUN_LOG);
    let file = File::create(&path)?;
    Ok((file, path))
}

/// Verbosity accepted by `--log-level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliLogLevel {
    /// Failures only
    Error,
    /// Failures and degraded behavior, such as dropped metrics records
    Warn,
    /// Startup and listen addresses
    Info,
    /// Every catalog fetch and metrics call
    Debug,
    /// Debouncer and session internals
    Trace,
}

impl CliLogLevel {
    /// The matching `tracing` level.
    ///
    /// ```
    /// use reelscout_core::tracing_setup::CliLogLevel;
    ///
    /// assert_eq!(CliLogLevel::Info.as_tracing_level(), tracing::Level::INFO);
    /// ```
    pub fn as_tracing_level(self) -> Level {
        match self {
            CliLogLevel::Error => Level::ERROR,
            CliLogLevel::Warn => Level::WARN,
            CliLogLevel::Info => Level::INFO,
            CliLogLevel::Debug => Level::DEBUG,
            CliLogLevel::Trace => Level::TRACE,
        }
    }
}

impl std::fmt::Display for CliLogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.as_tracing_level().as_str().to_ascii_lowercase())
    }
}
