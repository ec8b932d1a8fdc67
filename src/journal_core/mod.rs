//! Core journal functionality without I/O operations.
//!
//! This module holds the entry data model (`EntryType`, `Section`, `EntryDraft`)
//! and the pure document builder that turns a draft into the canonical
//! front-matter plus sectioned markdown text.

use crate::constants::{
    DATE_FORMAT_ISO, DOCUMENT_TITLE, EMPTY_SECTION_LINE, FRONT_MATTER_DELIMITER,
};
use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Duration, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// The classification of a journal entry, chosen once per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryType {
    /// A daily entry.
    Daily,
    /// A weekly entry.
    Weekly,
}

impl EntryType {
    /// All entry types, in the order they are offered for selection.
    pub const ALL: [EntryType; 2] = [EntryType::Daily, EntryType::Weekly];

    /// The lowercase name used in front matter and file names.
    pub fn as_str(self) -> &'static str {
        match self {
            EntryType::Daily => "daily",
            EntryType::Weekly => "weekly",
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntryType::ALL
            .into_iter()
            .find(|entry_type| entry_type.as_str() == s)
            .ok_or_else(|| AppError::Journal(format!("Unknown entry type: {}", s)))
    }
}

/// One of the five collected lists, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    CurrentGoals,
    CompanyGoals,
    Highlights,
    Learnings,
    Improvements,
}

impl Section {
    /// All sections, in the order they are collected and rendered.
    pub const ALL: [Section; 5] = [
        Section::CurrentGoals,
        Section::CompanyGoals,
        Section::Highlights,
        Section::Learnings,
        Section::Improvements,
    ];

    /// Heading text, shared by the input screen title and the document body.
    pub fn heading(self) -> &'static str {
        match self {
            Section::CurrentGoals => "Current Goals",
            Section::CompanyGoals => "Company Goals",
            Section::Highlights => "Highlights",
            Section::Learnings => "Learnings / Challenges",
            Section::Improvements => "Improvements for Next Week",
        }
    }

    /// The section collected after this one, or `None` for the last section.
    pub fn next(self) -> Option<Section> {
        let position = self.index();
        Section::ALL.get(position + 1).copied()
    }

    /// Zero-based position in `Section::ALL`.
    pub fn index(self) -> usize {
        match self {
            Section::CurrentGoals => 0,
            Section::CompanyGoals => 1,
            Section::Highlights => 2,
            Section::Learnings => 3,
            Section::Improvements => 4,
        }
    }
}

/// In-memory accumulation of everything entered during one session.
///
/// The draft can only be changed by the form state machine. Every list is
/// append-only and never holds a blank item.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryDraft {
    entry_type: Option<EntryType>,
    sections: [Vec<String>; 5],
}

impl EntryDraft {
    /// Creates an empty draft with no entry type.
    pub fn new() -> Self {
        Self::default()
    }

    /// The chosen entry type, if selection has happened.
    pub fn entry_type(&self) -> Option<EntryType> {
        self.entry_type
    }

    /// The chosen entry type, or `AppError::Journal` if none was selected.
    pub fn selected_entry_type(&self) -> AppResult<EntryType> {
        self.entry_type
            .ok_or_else(|| AppError::Journal("Entry type has not been selected".to_string()))
    }

    /// Items collected for `section`, in insertion order.
    pub fn items(&self, section: Section) -> &[String] {
        &self.sections[section.index()]
    }

    /// Sets the entry type once. Later calls leave the first choice in place.
    pub(crate) fn set_entry_type(&mut self, entry_type: EntryType) -> bool {
        if self.entry_type.is_some() {
            return false;
        }
        self.entry_type = Some(entry_type);
        true
    }

    /// Appends a trimmed item to `section`. Blank input is rejected.
    pub(crate) fn append(&mut self, section: Section, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.sections[section.index()].push(text.to_string());
        true
    }
}

/// Returns the Monday on or before `date`.
///
/// ```
/// use metajournal::journal_core::week_start;
/// use chrono::NaiveDate;
///
/// let thursday = NaiveDate::from_ymd_opt(2024, 6, 13).unwrap();
/// assert_eq!(week_start(thursday), NaiveDate::from_ymd_opt(2024, 6, 10).unwrap());
/// ```
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let days_since_monday = i64::from(date.weekday().number_from_monday()) - 1;
    date - Duration::days(days_since_monday)
}

/// Formats a date as `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT_ISO).to_string()
}

/// Builds the canonical document for `draft` as of `date`.
///
/// The output depends only on its arguments: the same draft and date always
/// produce byte-identical text.
///
/// # Errors
///
/// Returns `AppError::Journal` if the draft has no entry type yet.
pub fn build_document(draft: &EntryDraft, date: NaiveDate) -> AppResult<String> {
    let entry_type = draft.selected_entry_type()?;

    let mut lines: Vec<String> = vec![
        FRONT_MATTER_DELIMITER.to_string(),
        format!("date: {}", format_date(date)),
        format!("entryType: {}", entry_type),
        format!("weekStart: {}", format_date(week_start(date))),
        format!(
            "currentGoals: {}",
            format_inline_list(draft.items(Section::CurrentGoals))
        ),
        format!(
            "companyGoals: {}",
            format_inline_list(draft.items(Section::CompanyGoals))
        ),
        FRONT_MATTER_DELIMITER.to_string(),
        String::new(),
        DOCUMENT_TITLE.to_string(),
    ];

    for section in Section::ALL {
        lines.push(String::new());
        lines.push(format!("## {}", section.heading()));
        lines.extend(format_bullets(draft.items(section)));
    }

    Ok(lines.join("\n").trim().to_string())
}

/// Renders items as `[a, b, c]`, or `[]` when there are none.
fn format_inline_list(items: &[String]) -> String {
    format!("[{}]", items.join(", "))
}

fn format_bullets(items: &[String]) -> Vec<String> {
    if items.is_empty() {
        return vec![EMPTY_SECTION_LINE.to_string()];
    }
    items.iter().map(|item| format!("- {}", item)).collect()
}
