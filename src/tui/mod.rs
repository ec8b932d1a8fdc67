//! Terminal interface for the guided entry form.
//!
//! `App` translates key events into [`StepMachine`] operations and keeps the
//! widget state (selection list, text input, preview scroll). `run` owns the
//! terminal for the lifetime of the session.

pub mod markdown;
pub mod progress;
pub mod view;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::form::{Control, Step, StepMachine};
use crate::journal_core::EntryType;
use crate::journal_io::JournalWriter;
use chrono::{Local, NaiveDate};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, ListState};
use ratatui::Terminal;
use std::io::{self, Stdout};
use tracing::{debug, info};
use tui_textarea::TextArea;

/// Interaction state for one session.
pub struct App {
    machine: StepMachine,
    choices: ListState,
    input: TextArea<'static>,
    preview_scroll: u16,
    writer: JournalWriter,
    today: fn() -> NaiveDate,
}

impl App {
    /// Creates a session that saves through `writer` and dates entries with `today`.
    pub fn new(writer: JournalWriter, today: fn() -> NaiveDate) -> Self {
        let machine = StepMachine::new();
        let input = new_input(&machine.placeholder());
        App {
            machine,
            choices: ListState::default().with_selected(Some(0)),
            input,
            preview_scroll: 0,
            writer,
            today,
        }
    }

    /// The form state machine.
    pub fn machine(&self) -> &StepMachine {
        &self.machine
    }

    /// Current date used for the preview and for saving.
    pub fn today(&self) -> NaiveDate {
        (self.today)()
    }

    /// Entry type under the selection cursor.
    pub fn selected_choice(&self) -> Option<EntryType> {
        self.choices
            .selected()
            .and_then(|index| EntryType::ALL.get(index).copied())
    }

    /// Text currently typed into the input control.
    pub fn input_text(&self) -> String {
        self.input.lines().join("\n")
    }

    pub(crate) fn choices(&self) -> &ListState {
        &self.choices
    }

    pub(crate) fn input(&self) -> &TextArea<'static> {
        &self.input
    }

    pub(crate) fn preview_scroll(&self) -> u16 {
        self.preview_scroll
    }

    /// Applies one key press and reports whether the session should end.
    pub fn handle_key(&mut self, key: KeyEvent) -> Control {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            info!(step = ?self.machine.step(), "Cancelled by user");
            return Control::Quit;
        }

        match self.machine.step() {
            Step::SelectType => self.handle_selection_key(key),
            Step::Input(_) => self.handle_input_key(key),
            Step::Preview => self.handle_preview_key(key),
        }
    }

    fn handle_selection_key(&mut self, key: KeyEvent) -> Control {
        match key.code {
            KeyCode::Enter => {
                if self.machine.select_entry_type(self.selected_choice()) {
                    self.reset_input();
                }
            }
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
            _ => {}
        }
        Control::Continue
    }

    fn handle_input_key(&mut self, key: KeyEvent) -> Control {
        match key.code {
            KeyCode::Enter => {
                let text = self.input_text();
                let outcome = self.machine.submit_line(&text);
                debug!(?outcome, step = ?self.machine.step(), "Line submitted");
                self.reset_input();
            }
            _ => {
                self.input.input(key);
            }
        }
        Control::Continue
    }

    fn handle_preview_key(&mut self, key: KeyEvent) -> Control {
        match key.code {
            KeyCode::Char('s') => {
                let date = self.today();
                info!(%date, "Saving entry");
                return self.machine.save_requested(&self.writer, date);
            }
            KeyCode::Char('e') => {
                if self.machine.edit_requested() {
                    self.preview_scroll = 0;
                    self.reset_input();
                }
            }
            KeyCode::Char('q') => return self.machine.quit_requested(),
            KeyCode::Up | KeyCode::Char('k') => {
                self.preview_scroll = self.preview_scroll.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.preview_scroll = self.preview_scroll.saturating_add(1);
            }
            _ => {}
        }
        Control::Continue
    }

    fn move_selection(&mut self, delta: isize) {
        let last = EntryType::ALL.len() as isize - 1;
        let current = self.choices.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, last);
        self.choices.select(Some(next as usize));
    }

    fn reset_input(&mut self) {
        self.input = new_input(&self.machine.placeholder());
    }
}

fn new_input(placeholder: &str) -> TextArea<'static> {
    let mut input = TextArea::default();
    input.set_placeholder_text(placeholder);
    input.set_cursor_line_style(Style::default());
    input.set_block(Block::default().borders(Borders::ALL));
    input
}

/// Today's date in the local time zone.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Runs the interactive session until the user saves or quits.
///
/// The terminal is restored before returning, whatever the outcome.
///
/// # Errors
///
/// Returns `AppError::Terminal` if the terminal cannot be set up or restored,
/// and `AppError::Io` if reading events or drawing fails. Save failures are
/// not errors here; they are shown on the preview screen.
pub fn run(config: &Config) -> AppResult<Control> {
    let mut terminal = setup_terminal()?;
    let mut app = App::new(JournalWriter::from_config(config), local_today);

    let result = run_loop(&mut terminal, &mut app);

    restore_terminal(&mut terminal)?;
    result
}

fn run_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> AppResult<Control> {
    loop {
        terminal.draw(|frame| view::draw(frame, app))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match app.handle_key(key) {
                Control::Continue => {}
                done => return Ok(done),
            },
            Event::Resize(width, height) => {
                debug!(width, height, "Terminal resized");
            }
            _ => {}
        }
    }
}

fn setup_terminal() -> AppResult<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().map_err(|e| AppError::Terminal(format!("Failed to enable raw mode: {}", e)))?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        disable_raw_mode().ok();
        return Err(AppError::Terminal(format!(
            "Failed to enter alternate screen: {}",
            e
        )));
    }
    Terminal::new(CrosstermBackend::new(stdout))
        .map_err(|e| AppError::Terminal(format!("Failed to initialize terminal: {}", e)))
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> AppResult<()> {
    disable_raw_mode().map_err(|e| AppError::Terminal(format!("Failed to disable raw mode: {}", e)))?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .map_err(|e| AppError::Terminal(format!("Failed to leave alternate screen: {}", e)))?;
    terminal.show_cursor()?;
    Ok(())
}
