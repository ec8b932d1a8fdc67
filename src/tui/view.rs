//! Drawing of each step's screen.

use super::markdown::styled_lines;
use super::progress::GradientBar;
use super::App;
use crate::constants::{BANNER, INPUT_HINT, PREVIEW_HINT, SELECT_TITLE};
use crate::form::Step;
use crate::journal_core::{build_document, EntryType, Section};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;

const BANNER_COLOR: Color = Color::Rgb(0x00, 0xce, 0xd1);

/// Renders the whole screen for the current step.
pub fn draw(frame: &mut Frame, app: &App) {
    let banner: Vec<Line> = BANNER
        .trim_matches('\n')
        .lines()
        .map(|line| Line::raw(line.to_string()))
        .collect();
    let banner_height = banner.len() as u16 + 1;

    let [header, body] =
        Layout::vertical([Constraint::Length(banner_height), Constraint::Min(0)])
            .areas(frame.area());

    frame.render_widget(
        Paragraph::new(banner).style(
            Style::default()
                .fg(BANNER_COLOR)
                .add_modifier(Modifier::BOLD),
        ),
        header,
    );

    match app.machine().step() {
        Step::SelectType => draw_selection(frame, app, body),
        Step::Input(section) => draw_input(frame, app, section, body),
        Step::Preview => draw_preview(frame, app, body),
    }
}

fn draw_selection(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = EntryType::ALL
        .iter()
        .map(|entry_type| ListItem::new(entry_type.as_str()))
        .collect();

    let list = List::new(items)
        .block(Block::default().title(SELECT_TITLE).borders(Borders::ALL))
        .highlight_symbol("▶ ")
        .highlight_style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        );

    let [list_area, _] =
        Layout::vertical([Constraint::Length(EntryType::ALL.len() as u16 + 2), Constraint::Min(0)])
            .areas(area);
    let mut state = app.choices().clone();
    frame.render_stateful_widget(list, list_area, &mut state);
}

fn draw_input(frame: &mut Frame, app: &App, section: Section, area: Rect) {
    let items = app.machine().draft().items(section);
    let collected: Vec<Line> = items
        .iter()
        .map(|item| Line::raw(format!("- {}", item)))
        .collect();

    // Progress, title, input box and hint always get their rows.
    let fixed_height = 1 + 2 + 3 + 1;
    let items_height = (collected.len() as u16).min(area.height.saturating_sub(fixed_height));
    let hidden_items = collected.len() as u16 - items_height;

    let [progress_area, title_area, items_area, input_area, hint_area, _] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Length(items_height),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);

    let step = app.machine().step();
    frame.render_widget(
        GradientBar::for_entry_type(app.machine().draft().entry_type(), step.progress()),
        progress_area,
    );
    frame.render_widget(
        Paragraph::new(Line::styled(
            section.heading(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        title_area,
    );
    frame.render_widget(
        Paragraph::new(collected).scroll((hidden_items, 0)),
        items_area,
    );
    frame.render_widget(app.input(), input_area);
    frame.render_widget(
        Paragraph::new(INPUT_HINT).style(Style::default().fg(Color::DarkGray)),
        hint_area,
    );
}

fn draw_preview(frame: &mut Frame, app: &App, area: Rect) {
    let error = app.machine().last_error().map(|message| {
        Paragraph::new(format!("Error: {}", message))
            .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
            .wrap(Wrap { trim: true })
    });
    // The whole message must fit, but leave the document at least half the screen.
    let error_height = error.as_ref().map_or(0, |paragraph| {
        (paragraph.line_count(area.width) as u16).min(area.height / 2)
    });

    let [document_area, error_area, hint_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(error_height),
        Constraint::Length(1),
    ])
    .areas(area);

    let document = match build_document(app.machine().draft(), app.today()) {
        Ok(document) => Paragraph::new(styled_lines(&document))
            .wrap(Wrap { trim: false })
            .scroll((app.preview_scroll(), 0)),
        Err(err) => Paragraph::new(format!("Error rendering preview: {}", err))
            .style(Style::default().fg(Color::Red)),
    };
    frame.render_widget(document, document_area);

    if let Some(error) = error {
        frame.render_widget(error, error_area);
    }

    frame.render_widget(Paragraph::new(PREVIEW_HINT), hint_area);
}
