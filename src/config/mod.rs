//! Configuration management for the metajournal application.
//!
//! Configuration is read once at startup and handed to the writer as an explicit
//! value, so nothing downstream consults the environment on its own.
//!
//! # Environment Variables
//!
//! - `METAJOURNAL_SAVE_PATH`: Base directory for saved entries (defaults to `./data/journal`)

use crate::constants::{DEFAULT_SAVE_PATH, ENV_VAR_SAVE_PATH};
use crate::errors::{AppError, AppResult};
use std::env;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Configuration for the metajournal application.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use metajournal::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     save_dir: PathBuf::from("/path/to/journal"),
///     used_default: false,
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base directory under which `week-beginning/<weekStart>/` folders are created.
    pub save_dir: PathBuf,

    /// Whether `save_dir` is the built-in default because the variable was missing.
    pub used_default: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            save_dir: PathBuf::from(DEFAULT_SAVE_PATH),
            used_default: true,
        }
    }
}

impl Config {
    /// Loads configuration from the environment.
    ///
    /// A missing or empty `METAJOURNAL_SAVE_PATH` is not an error: a warning is
    /// printed and the default relative path is used instead.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the resolved path fails validation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use metajournal::Config;
    ///
    /// match Config::load() {
    ///     Ok(config) => println!("Saving entries under {}", config.save_dir.display()),
    ///     Err(err) => eprintln!("Failed to load config: {}", err),
    /// }
    /// ```
    pub fn load() -> AppResult<Self> {
        let config = Self::from_env_value(env::var(ENV_VAR_SAVE_PATH).ok());

        if config.used_default {
            eprintln!(
                "Warning: {} not set, defaulting to {}",
                ENV_VAR_SAVE_PATH, DEFAULT_SAVE_PATH
            );
            warn!(
                default = DEFAULT_SAVE_PATH,
                "{} not set, using default save path", ENV_VAR_SAVE_PATH
            );
        } else {
            debug!(save_dir = %config.save_dir.display(), "Save path loaded from environment");
        }

        config.validate()?;
        Ok(config)
    }

    /// Resolves a configuration from the raw value of `METAJOURNAL_SAVE_PATH`.
    ///
    /// `None`, an empty string and whitespace all fall back to the default.
    /// A leading `~` is expanded to the home directory.
    ///
    /// ```
    /// use metajournal::Config;
    /// use std::path::PathBuf;
    ///
    /// let config = Config::from_env_value(None);
    /// assert!(config.used_default);
    /// assert_eq!(config.save_dir, PathBuf::from("./data/journal"));
    ///
    /// let config = Config::from_env_value(Some("/srv/journal".to_string()));
    /// assert!(!config.used_default);
    /// assert_eq!(config.save_dir, PathBuf::from("/srv/journal"));
    /// ```
    pub fn from_env_value(value: Option<String>) -> Self {
        match value {
            Some(raw) if !raw.trim().is_empty() => Config {
                save_dir: PathBuf::from(shellexpand::tilde(raw.trim()).into_owned()),
                used_default: false,
            },
            _ => Config::default(),
        }
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the save path is empty.
    pub fn validate(&self) -> AppResult<()> {
        if self.save_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Save path is empty".to_string()));
        }
        Ok(())
    }
}
