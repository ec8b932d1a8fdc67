//! Journal I/O operations and file management.
//!
//! This module resolves where a finished entry belongs on disk and writes it
//! there. The writer only knows the base directory it was built with; the date
//! and the document are passed in by the caller.

use crate::config::Config;
use crate::constants::{ENTRY_FILE_SUFFIX, WEEK_DIR_NAME};
use crate::errors::{AppResult, PersistError};
use crate::journal_core::{build_document, format_date, week_start, EntryDraft, EntryType};
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Writes finished entries below a fixed base directory.
///
/// Layout: `<base>/week-beginning/<weekStart>/<date>_<entryType>_entry.md`.
///
/// # Examples
///
/// ```
/// use metajournal::journal_io::JournalWriter;
/// use metajournal::journal_core::EntryType;
/// use chrono::NaiveDate;
/// use std::path::PathBuf;
///
/// let writer = JournalWriter::new("/journal");
/// let date = NaiveDate::from_ymd_opt(2024, 6, 13).unwrap();
/// assert_eq!(
///     writer.entry_path(date, EntryType::Daily),
///     PathBuf::from("/journal/week-beginning/2024-06-10/2024-06-13_daily_entry.md")
/// );
/// ```
#[derive(Debug, Clone)]
pub struct JournalWriter {
    base_dir: PathBuf,
}

impl JournalWriter {
    /// Creates a writer rooted at `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        JournalWriter {
            base_dir: base_dir.into(),
        }
    }

    /// Creates a writer rooted at the configured save directory.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.save_dir.clone())
    }

    /// The base directory entries are written under.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Directory holding every entry of the week that contains `date`.
    pub fn week_dir(&self, date: NaiveDate) -> PathBuf {
        self.base_dir
            .join(WEEK_DIR_NAME)
            .join(format_date(week_start(date)))
    }

    /// Full path of the entry for `date` and `entry_type`.
    pub fn entry_path(&self, date: NaiveDate, entry_type: EntryType) -> PathBuf {
        self.week_dir(date).join(format!(
            "{}_{}{}",
            format_date(date),
            entry_type,
            ENTRY_FILE_SUFFIX
        ))
    }

    /// Writes `document` for `date` and `entry_type`, replacing any existing file.
    ///
    /// Missing directories are created first. Nothing is retried.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Persist` wrapping `PersistError::CreateDirectory` or
    /// `PersistError::Write`.
    pub fn write_entry(
        &self,
        date: NaiveDate,
        entry_type: EntryType,
        document: &str,
    ) -> AppResult<PathBuf> {
        let dir = self.week_dir(date);
        ensure_directory_exists(&dir)?;

        let path = self.entry_path(date, entry_type);
        fs::write(&path, document.as_bytes()).map_err(|source| PersistError::Write {
            path: path.clone(),
            source,
        })?;

        info!(path = %path.display(), bytes = document.len(), "Entry written");
        Ok(path)
    }

    /// Builds the document for `draft` as of `date` and writes it.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Journal` if the draft has no entry type, or the
    /// errors of [`JournalWriter::write_entry`].
    pub fn save_draft(&self, draft: &EntryDraft, date: NaiveDate) -> AppResult<PathBuf> {
        let entry_type = draft.selected_entry_type()?;
        let document = build_document(draft, date)?;
        self.write_entry(date, entry_type, &document)
    }
}

/// Creates `dir` and any missing parents. Existing directories are fine.
fn ensure_directory_exists(dir: &Path) -> AppResult<()> {
    if dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|source| PersistError::CreateDirectory {
        path: dir.to_path_buf(),
        source,
    })?;
    debug!(dir = %dir.display(), "Created week directory");
    Ok(())
}
