//! Error types for the resdir application.
//!
//! Each boundary owns a `thiserror` enum; [`AppError`] composes them via
//! `From` so callers can use `?` throughout. The filter core itself is
//! total and has no error type: an empty match set is a normal result.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use crate::view::TuiError;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// Every variant is fatal: it is reported once and the process exits.
#[derive(Debug, Error)]
pub enum AppError {
    /// Config file or environment override could not be used.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Log file could not be set up.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Terminal setup, drawing or event reading failed.
    #[error("Terminal error: {0}")]
    Tui(#[from] TuiError),

    /// Writing printed results failed.
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    /// Serializing printed results failed.
    #[error("Failed to encode results as JSON: {0}")]
    Json(#[from] serde_json::Error),
}
