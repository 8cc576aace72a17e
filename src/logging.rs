use std::path::Path;
use std::sync::Mutex;
use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter directives
pub(crate) const LOG_ENV_VAR: &str = "GRIDSNAKE_LOG";

const DEFAULT_FILTER: &str = "gridsnake=info";

/// Install a global subscriber that appends log lines to the file at `path`.
/// Stdout is owned by the terminal UI, so nothing is logged when no path is
/// given.
pub(crate) fn init(path: Option<&Path>) -> Result<(), LoggingError> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = fs_err::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(LoggingError::Open)?;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .with(filter())
        .try_init()?;
    Ok(())
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

#[derive(Debug, Error)]
pub(crate) enum LoggingError {
    #[error("failed to open log file")]
    Open(#[source] std::io::Error),
    #[error("failed to install log subscriber")]
    Install(#[from] tracing_subscriber::util::TryInitError),
}
