//! File-backed tracing setup.
//!
//! The TUI owns the terminal, so nothing may log to stdout or stderr while
//! it runs. All tracing output goes to a single log file (watchable with
//! `tail -f`); verbosity comes from `RUST_LOG` and defaults to `info`.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Failures while preparing the log file or installing the subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The log file's directory could not be created.
    #[error("cannot create log directory {path:?}: {source}")]
    CreateDirectory {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configured path does not name a log file.
    #[error("not a usable log file path: {0:?}")]
    InvalidLogPath(PathBuf),

    /// A global tracing subscriber is already installed in this process.
    #[error("tracing subscriber already installed")]
    AlreadyInitialized,
}

/// Splits a log path into the directory to append under and the file name.
fn split_log_path(path: &Path) -> Result<(&Path, &str), LoggingError> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| LoggingError::InvalidLogPath(path.to_path_buf()))?;
    let directory = path
        .parent()
        .ok_or_else(|| LoggingError::InvalidLogPath(path.to_path_buf()))?;
    Ok((directory, file_name))
}

/// The verbosity filter: `RUST_LOG` when set, `info` otherwise.
fn verbosity() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global tracing subscriber, writing to `log_path`.
///
/// The parent directory is created when missing. Lines carry no ANSI
/// escapes; the file is meant for pagers and `tail -f`.
///
/// # Errors
///
/// Fails when the directory cannot be created, when the path has no file
/// name component, or when a subscriber was already installed.
pub fn init(log_path: &Path) -> Result<(), LoggingError> {
    let (directory, file_name) = split_log_path(log_path)?;
    std::fs::create_dir_all(directory).map_err(|source| LoggingError::CreateDirectory {
        path: directory.to_path_buf(),
        source,
    })?;

    let appender = tracing_appender::rolling::never(directory, file_name);
    tracing_subscriber::fmt()
        .with_env_filter(verbosity())
        .with_writer(appender)
        .with_ansi(false)
        .try_init()
        .map_err(|_| LoggingError::AlreadyInitialized)
}
