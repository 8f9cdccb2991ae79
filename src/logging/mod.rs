//! Tracing subscriber initialization.
//!
//! The TUI owns the terminal, so logs go to a file instead of stderr;
//! monitor them with `tail -f` in another terminal. The contact form's
//! submission records land here too.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Error type for logging initialization failures.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Failed to create the log directory.
    #[error("Failed to create log directory at {path:?}: {source}")]
    DirectoryCreation {
        /// The directory that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The log path has no usable file name or parent directory.
    #[error("Invalid log file path: {0:?}")]
    InvalidPath(PathBuf),

    /// A tracing subscriber was already installed.
    #[error("Tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Initialize file-based tracing.
///
/// Creates the log directory if needed, respects `RUST_LOG` (defaulting
/// to "info"), and writes without ANSI escapes so the file stays
/// greppable.
pub fn init(log_path: &Path) -> Result<(), LoggingError> {
    use tracing_subscriber::EnvFilter;

    let directory = log_path
        .parent()
        .ok_or_else(|| LoggingError::InvalidPath(log_path.to_path_buf()))?;

    std::fs::create_dir_all(directory).map_err(|source| LoggingError::DirectoryCreation {
        path: directory.to_path_buf(),
        source,
    })?;

    let file_name = log_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| LoggingError::InvalidPath(log_path.to_path_buf()))?;

    let file_appender = tracing_appender::rolling::never(directory, file_name);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(file_appender)
        .with_ansi(false)
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;

    #[test]
    #[serial(tracing_init)]
    fn init_creates_the_log_directory() {
        let test_dir = std::env::temp_dir().join("deskfolio_test_logs");
        let log_file = test_dir.join("deskfolio.log");
        let _ = fs::remove_dir_all(&test_dir);

        // May fail with SubscriberAlreadySet when another test won the
        // race; directory creation happens either way.
        let _ = init(&log_file);

        assert!(test_dir.exists(), "log directory should be created");
        let _ = fs::remove_dir_all(&test_dir);
    }

    #[test]
    #[serial(tracing_init)]
    fn init_rejects_a_path_without_parent() {
        let err = init(Path::new("/")).expect_err("bare root has no file name");
        assert!(matches!(
            err,
            LoggingError::InvalidPath(_) | LoggingError::DirectoryCreation { .. }
        ));
    }
}
