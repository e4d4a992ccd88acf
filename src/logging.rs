//! Subscriber setup for the front-end binaries.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the interactive front-end's log file.
pub const LOG_FILE_ENV: &str = "PWD_ANALYZER_LOG";

const STDERR_FILTER: &str = "warn";
const FILE_FILTER: &str = "pwd_analyzer=debug,info";

fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into())
}

/// Logs to stderr so stdout carries only the report.
pub fn init_stderr_logging() {
    tracing_subscriber::registry()
        .with(env_filter(STDERR_FILTER))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Returns the log file path from `PWD_ANALYZER_LOG`, if set.
pub fn log_file_path() -> Option<PathBuf> {
    std::env::var_os(LOG_FILE_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Logs to the file named by `PWD_ANALYZER_LOG`. The terminal front-end owns
/// the screen, so without that variable nothing is logged.
///
/// Returns whether a subscriber was installed.
pub fn init_file_logging() -> anyhow::Result<bool> {
    let Some(path) = log_file_path() else {
        return Ok(false);
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::registry()
        .with(env_filter(FILE_FILTER))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();

    tracing::info!("logging to {:?}", path);
    Ok(true)
}
