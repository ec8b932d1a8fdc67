//! The guided form's state machine.
//!
//! `StepMachine` owns the current [`Step`] and the [`EntryDraft`]. Every change
//! to the draft goes through one of its operations, so the rest of the program
//! only ever reads the draft.

use crate::journal_core::{EntryDraft, EntryType, Section};
use crate::journal_io::JournalWriter;
use chrono::NaiveDate;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// One stage of the guided sequence.
///
/// The five input steps share one variant parameterized by the section they
/// collect into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Step {
    /// Choosing between a daily and a weekly entry.
    #[default]
    SelectType,
    /// Collecting lines for one section.
    Input(Section),
    /// Reviewing the rendered document.
    Preview,
}

impl Step {
    /// Ordinal of the preview step, the last in the sequence.
    pub const PREVIEW_ORDINAL: usize = Section::ALL.len() + 1;

    /// The step reached by an empty submission from this one.
    pub fn next(self) -> Step {
        match self {
            Step::SelectType => Step::Input(Section::CurrentGoals),
            Step::Input(section) => section.next().map_or(Step::Preview, Step::Input),
            Step::Preview => Step::Preview,
        }
    }

    /// Position in the linear sequence, `0` for selection through `6` for preview.
    pub fn ordinal(self) -> usize {
        match self {
            Step::SelectType => 0,
            Step::Input(section) => section.index() + 1,
            Step::Preview => Self::PREVIEW_ORDINAL,
        }
    }

    /// Fraction of the form completed, for the progress indicator.
    pub fn progress(self) -> f64 {
        self.ordinal() as f64 / Self::PREVIEW_ORDINAL as f64
    }
}

/// What the interaction loop should do after an operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Stop without having written anything.
    Quit,
    /// Stop after the entry was written to the given path.
    Saved(PathBuf),
}

/// Result of [`StepMachine::submit_line`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// The line was appended; the step is unchanged.
    Appended,
    /// The line was blank; the machine moved to the next step.
    Advanced,
    /// The machine is not on an input step.
    Ignored,
}

/// Finite-state controller for the guided entry form.
#[derive(Debug, Default)]
pub struct StepMachine {
    step: Step,
    draft: EntryDraft,
    last_error: Option<String>,
}

impl StepMachine {
    /// Starts a new session on the selection step with an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current step.
    pub fn step(&self) -> Step {
        self.step
    }

    /// Read-only view of the collected data.
    pub fn draft(&self) -> &EntryDraft {
        &self.draft
    }

    /// Message of the last failed save, cleared by a successful save or an edit.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Placeholder for the text input: the number the next item would get.
    ///
    /// Outside input steps there is nothing to count, so the counter starts at 1.
    pub fn placeholder(&self) -> String {
        let count = match self.step {
            Step::Input(section) => self.draft.items(section).len() + 1,
            _ => 1,
        };
        format!("{} Add next item", count)
    }

    /// Picks the entry type and moves to the first input step.
    ///
    /// Does nothing outside the selection step or when `choice` is `None`.
    /// Returns whether the transition happened.
    pub fn select_entry_type(&mut self, choice: Option<EntryType>) -> bool {
        let entry_type = match (self.step, choice) {
            (Step::SelectType, Some(entry_type)) => entry_type,
            _ => return false,
        };
        self.draft.set_entry_type(entry_type);
        self.transition(self.step.next());
        info!(entry_type = %entry_type, "Entry type selected");
        true
    }

    /// Handles one submitted line on an input step.
    ///
    /// A non-blank line is trimmed and appended to the step's section. A blank
    /// line is the only way forward: nothing is appended and the machine moves
    /// to the next step.
    pub fn submit_line(&mut self, text: &str) -> Submission {
        let section = match self.step {
            Step::Input(section) => section,
            _ => return Submission::Ignored,
        };

        if self.draft.append(section, text) {
            debug!(
                section = section.heading(),
                count = self.draft.items(section).len(),
                "Item appended"
            );
            Submission::Appended
        } else {
            self.transition(self.step.next());
            Submission::Advanced
        }
    }

    /// Returns from the preview to the first input step.
    ///
    /// Collected items are kept; further submissions append to them.
    pub fn edit_requested(&mut self) -> bool {
        if self.step != Step::Preview {
            return false;
        }
        self.last_error = None;
        self.transition(Step::Input(Section::CurrentGoals));
        true
    }

    /// Ends the session without writing. Only honored on the preview step.
    pub fn quit_requested(&self) -> Control {
        match self.step {
            Step::Preview => Control::Quit,
            _ => Control::Continue,
        }
    }

    /// Builds and writes the entry for `date`.
    ///
    /// On failure the error message is kept for display and the machine stays
    /// on the preview step; the caller decides whether to try again.
    pub fn save_requested(&mut self, writer: &JournalWriter, date: NaiveDate) -> Control {
        if self.step != Step::Preview {
            return Control::Continue;
        }

        match writer.save_draft(&self.draft, date) {
            Ok(path) => {
                self.last_error = None;
                Control::Saved(path)
            }
            Err(err) => {
                warn!(error = %err, "Save failed");
                self.last_error = Some(err.to_string());
                Control::Continue
            }
        }
    }

    fn transition(&mut self, to: Step) {
        debug!(from = ?self.step, to = ?to, "Step transition");
        self.step = to;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn machine_at_preview(lines: &[&str]) -> StepMachine {
        let mut machine = StepMachine::new();
        machine.select_entry_type(Some(EntryType::Daily));
        for line in lines {
            machine.submit_line(line);
        }
        while machine.step() != Step::Preview {
            machine.submit_line("");
        }
        machine
    }

    #[test]
    fn test_starts_on_selection() {
        let machine = StepMachine::new();
        assert_eq!(machine.step(), Step::SelectType);
        assert_eq!(machine.draft().entry_type(), None);
        assert_eq!(machine.last_error(), None);
    }

    #[test]
    fn test_absent_selection_is_a_no_op() {
        let mut machine = StepMachine::new();
        assert!(!machine.select_entry_type(None));
        assert_eq!(machine.step(), Step::SelectType);
    }

    #[test]
    fn test_selection_moves_to_current_goals() {
        let mut machine = StepMachine::new();
        assert!(machine.select_entry_type(Some(EntryType::Weekly)));
        assert_eq!(machine.step(), Step::Input(Section::CurrentGoals));
        assert_eq!(machine.draft().entry_type(), Some(EntryType::Weekly));
        assert_eq!(machine.placeholder(), "1 Add next item");
    }

    #[test]
    fn test_selection_ignored_after_leaving_select_step() {
        let mut machine = StepMachine::new();
        machine.select_entry_type(Some(EntryType::Weekly));
        assert!(!machine.select_entry_type(Some(EntryType::Daily)));
        assert_eq!(machine.draft().entry_type(), Some(EntryType::Weekly));
        assert_eq!(machine.step(), Step::Input(Section::CurrentGoals));
    }

    #[test]
    fn test_lines_accumulate_until_blank_submission() {
        let mut machine = StepMachine::new();
        machine.select_entry_type(Some(EntryType::Daily));

        assert_eq!(machine.submit_line("  ship the form "), Submission::Appended);
        assert_eq!(machine.placeholder(), "2 Add next item");
        assert_eq!(machine.submit_line("write tests"), Submission::Appended);
        assert_eq!(machine.step(), Step::Input(Section::CurrentGoals));

        assert_eq!(machine.submit_line("   "), Submission::Advanced);
        assert_eq!(machine.step(), Step::Input(Section::CompanyGoals));
        assert_eq!(
            machine.draft().items(Section::CurrentGoals),
            ["ship the form", "write tests"]
        );
        assert_eq!(machine.placeholder(), "1 Add next item");
    }

    #[test]
    fn test_blank_submissions_never_append() {
        let mut machine = StepMachine::new();
        machine.select_entry_type(Some(EntryType::Daily));
        for blank in ["", " ", "\n", "\t  \n"] {
            machine.submit_line(blank);
        }
        for section in Section::ALL {
            assert!(machine.draft().items(section).is_empty());
        }
        assert_eq!(machine.step(), Step::Input(Section::Improvements));
    }

    #[test]
    fn test_improvements_advances_to_preview() {
        let mut machine = machine_at_preview(&[]);
        assert_eq!(machine.step(), Step::Preview);
        assert_eq!(machine.submit_line("late"), Submission::Ignored);
        assert!(machine.draft().items(Section::Improvements).is_empty());
    }

    #[test]
    fn test_step_order_and_progress() {
        let mut step = Step::SelectType;
        let mut ordinals = vec![step.ordinal()];
        while step != Step::Preview {
            step = step.next();
            ordinals.push(step.ordinal());
        }
        assert_eq!(ordinals, vec![0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(Step::SelectType.progress(), 0.0);
        assert_eq!(Step::Preview.progress(), 1.0);
        assert_eq!(Step::Preview.next(), Step::Preview);
    }

    #[test]
    fn test_edit_keeps_items_and_appends() {
        let mut machine = machine_at_preview(&["first"]);
        assert!(machine.edit_requested());
        assert_eq!(machine.step(), Step::Input(Section::CurrentGoals));
        assert_eq!(machine.placeholder(), "2 Add next item");

        machine.submit_line("second");
        assert_eq!(
            machine.draft().items(Section::CurrentGoals),
            ["first", "second"]
        );
    }

    #[test]
    fn test_edit_and_quit_only_on_preview() {
        let mut machine = StepMachine::new();
        assert!(!machine.edit_requested());
        assert_eq!(machine.quit_requested(), Control::Continue);

        let machine = machine_at_preview(&[]);
        assert_eq!(machine.quit_requested(), Control::Quit);
    }

    #[test]
    fn test_save_writes_entry() {
        let temp_dir = tempdir().unwrap();
        let writer = JournalWriter::new(temp_dir.path());
        let mut machine = machine_at_preview(&["goal"]);

        let control = machine.save_requested(&writer, date(2024, 6, 13));

        let expected = writer.entry_path(date(2024, 6, 13), EntryType::Daily);
        assert_eq!(control, Control::Saved(expected.clone()));
        let content = fs::read_to_string(expected).unwrap();
        assert!(content.contains("currentGoals: [goal]"));
    }

    #[test]
    fn test_failed_save_stays_on_preview_with_error() {
        let temp_dir = tempdir().unwrap();
        let blocker = temp_dir.path().join("file");
        fs::write(&blocker, "").unwrap();
        let writer = JournalWriter::new(&blocker);
        let mut machine = machine_at_preview(&[]);

        let control = machine.save_requested(&writer, date(2024, 6, 13));

        assert_eq!(control, Control::Continue);
        assert_eq!(machine.step(), Step::Preview);
        let message = machine.last_error().unwrap();
        assert!(message.contains("Failed to create directory"));

        // A retry against a usable location succeeds and clears the error
        let writer = JournalWriter::new(temp_dir.path().join("ok"));
        assert!(matches!(
            machine.save_requested(&writer, date(2024, 6, 13)),
            Control::Saved(_)
        ));
        assert_eq!(machine.last_error(), None);
    }

    #[test]
    fn test_save_ignored_outside_preview() {
        let temp_dir = tempdir().unwrap();
        let writer = JournalWriter::new(temp_dir.path());
        let mut machine = StepMachine::new();
        machine.select_entry_type(Some(EntryType::Daily));

        assert_eq!(
            machine.save_requested(&writer, date(2024, 6, 13)),
            Control::Continue
        );
        assert!(!temp_dir.path().join("week-beginning").exists());
    }
}
