//! File logging for resdir.
//!
//! The TUI owns the terminal, so every `tracing` event goes to
//! `resdir.log` under the state directory (see `config::default_log_path`).
//! Follow it with `tail -f` while the app runs.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Filter applied when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "resdir=info";

/// Why the log file could not be set up.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The log file's directory could not be created.
    #[error("Failed to create log directory at {path:?}: {source}")]
    DirectoryCreation {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configured `log_file_path` does not name a file.
    #[error("log_file_path does not name a file: {0:?}")]
    InvalidPath(PathBuf),

    /// A global subscriber was installed earlier in this process.
    #[error("Tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Split `log_path` into the directory to create and the file name.
///
/// A bare file name logs into the working directory.
fn split_log_path(log_path: &Path) -> Result<(&Path, &str), LoggingError> {
    let file_name = log_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| LoggingError::InvalidPath(log_path.to_path_buf()))?;

    let directory = match log_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    Ok((directory, file_name))
}

/// Install the global subscriber writing to `log_path`.
///
/// `RUST_LOG` overrides [`DEFAULT_FILTER`]. The directory is created when
/// missing; the file is appended to and never rotated.
///
/// # Errors
///
/// Fails if the path names no file, the directory cannot be created,
/// or a global subscriber was already installed.
pub fn init(log_path: &Path) -> Result<(), LoggingError> {
    use tracing_subscriber::EnvFilter;

    let (directory, file_name) = split_log_path(log_path)?;

    std::fs::create_dir_all(directory).map_err(|source| LoggingError::DirectoryCreation {
        path: directory.to_path_buf(),
        source,
    })?;

    let file_appender = tracing_appender::rolling::never(directory, file_name);
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), path = ?log_path, "resdir starting");
    Ok(())
}
