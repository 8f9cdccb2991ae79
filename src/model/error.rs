//! Application error taxonomy.
//!
//! The carousel core has no recoverable-error surface at all: empty
//! lists, single items, and out-of-range indices degrade to safe no-ops
//! (see `state::cycle`). Real failures only exist at the shell boundary
//! — configuration, content files, log initialization, and the terminal
//! — and each of those layers defines its own `thiserror` type. This
//! module just composes them into the one type `main` returns.

use thiserror::Error;

/// Top-level application error.
///
/// All layer-specific errors convert via `#[from]`, so `main` can wire
/// the startup sequence with plain `?`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Portfolio content file could not be read or parsed.
    #[error("Content error: {0}")]
    Content(#[from] crate::content::ContentError),

    /// Tracing subscriber could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal setup, rendering, or event-loop failure.
    #[error("Terminal error: {0}")]
    Tui(#[from] crate::view::TuiError),
}
