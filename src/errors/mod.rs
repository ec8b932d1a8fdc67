//! Error handling utilities for the metajournal application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Represents the ways persisting a finished entry can fail.
///
/// Both variants carry the path that was being worked on so the message shown
/// on the preview screen tells the user where the problem is.
///
/// # Examples
///
/// ```
/// use metajournal::errors::PersistError;
/// use std::io::{self, ErrorKind};
/// use std::path::PathBuf;
///
/// let error = PersistError::Write {
///     path: PathBuf::from("/journal/2024-06-13_daily_entry.md"),
///     source: io::Error::new(ErrorKind::PermissionDenied, "permission denied"),
/// };
///
/// assert!(format!("{}", error).contains("Failed to write entry"));
/// assert!(format!("{}", error).contains("permission denied"));
/// ```
#[derive(Debug, Error)]
pub enum PersistError {
    /// The week directory (or one of its parents) could not be created.
    #[error("Failed to create directory {path}: {source}. Please check that {env_var} points to a writable location.", env_var = crate::constants::ENV_VAR_SAVE_PATH)]
    CreateDirectory {
        /// The directory that could not be created
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The entry file could not be written.
    #[error("Failed to write entry {path}: {source}. Please check permissions and available disk space.")]
    Write {
        /// The file that could not be written
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Represents all possible errors that can occur in the metajournal application.
///
/// Note: This type does not implement `Clone` to avoid losing error context when
/// cloning `std::io::Error` values.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use metajournal::errors::AppError;
///
/// let error = AppError::Config("Save path is empty".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Save path is empty");
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem or terminal operations.
    ///
    /// This variant automatically converts from `std::io::Error` through the `From` trait.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors in entry logic (e.g., building a document without an entry type).
    #[error("Journal logic error: {0}")]
    Journal(String),

    /// Errors raised while saving an entry to disk.
    #[error("Save error: {0}")]
    Persist(#[from] PersistError),

    /// Errors setting up or restoring the terminal.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// # Examples
///
/// ```
/// use metajournal::errors::{AppResult, AppError};
///
/// fn might_fail() -> AppResult<String> {
///     if false {
///         return Err(AppError::Journal("Something went wrong".to_string()));
///     }
///     Ok("Operation succeeded".to_string())
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn test_app_error_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");

        let app_error: AppError = io_error.into();

        match app_error {
            AppError::Io(inner) => {
                assert_eq!(inner.kind(), io::ErrorKind::NotFound);
            }
            _ => panic!("Expected AppError::Io variant"),
        }
    }

    #[test]
    fn test_app_error_display() {
        let config_error = AppError::Config("Invalid configuration".to_string());
        assert_eq!(
            format!("{}", config_error),
            "Configuration error: Invalid configuration"
        );

        let journal_error = AppError::Journal("Entry type not selected".to_string());
        assert_eq!(
            format!("{}", journal_error),
            "Journal logic error: Entry type not selected"
        );

        let terminal_error = AppError::Terminal("raw mode unavailable".to_string());
        assert_eq!(
            format!("{}", terminal_error),
            "Terminal error: raw mode unavailable"
        );
    }

    #[test]
    fn test_persist_error_keeps_source_and_path() {
        let error = PersistError::CreateDirectory {
            path: PathBuf::from("/readonly/week-beginning/2024-06-10"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        };

        let message = format!("{}", error);
        assert!(message.contains("/readonly/week-beginning/2024-06-10"));
        assert!(message.contains("METAJOURNAL_SAVE_PATH"));
        assert!(error.source().is_some());

        let app_error: AppError = error.into();
        assert!(format!("{}", app_error).starts_with("Save error: Failed to create directory"));
    }
}
