/*!
# Metajournal

Metajournal is a guided terminal form for writing daily or weekly journal entries.
It walks through a fixed sequence of sections, collects any number of items for
each one, shows a styled preview and saves the result as a markdown document with
front matter.

## Core Features

- Choose a daily or weekly entry
- Collect items for Current Goals, Company Goals, Highlights, Learnings / Challenges
  and Improvements for Next Week (an empty line moves on to the next section)
- Preview the finished document, then save, go back and add more, or quit
- Entries are grouped on disk by the Monday that starts their week

## Architecture

- `cli`: Command-line interface handling using clap
- `config`: Configuration loading and validation
- `errors`: Error handling infrastructure
- `journal_core`: Entry data model and the pure document builder
- `journal_io`: Writing finished entries to disk
- `form`: The step state machine driving the form
- `tui`: Terminal interface

## Usage Example

```rust,no_run
use metajournal::form::{StepMachine, Control};
use metajournal::journal_core::EntryType;
use metajournal::journal_io::JournalWriter;
use metajournal::Config;
use chrono::Local;

fn main() -> metajournal::AppResult<()> {
    let config = Config::load()?;
    let writer = JournalWriter::from_config(&config);

    let mut form = StepMachine::new();
    form.select_entry_type(Some(EntryType::Weekly));
    form.submit_line("Ship the release");
    for _ in 0..5 {
        form.submit_line("");
    }

    if let Control::Saved(path) = form.save_requested(&writer, Local::now().date_naive()) {
        println!("Saved {}", path.display());
    }
    Ok(())
}
```
*/

/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Application-wide constants
pub mod constants;
/// Error types and utilities for error handling
pub mod errors;
/// The step state machine driving the form
pub mod form;
/// Entry data model and document building, without I/O
pub mod journal_core;
/// Writing finished entries to disk
pub mod journal_io;
/// Terminal interface
pub mod tui;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use form::{Control, Step, StepMachine};
pub use journal_core::{EntryDraft, EntryType, Section};
