//! A one-line progress bar filled with a colour gradient.

use crate::journal_core::EntryType;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Widget;

const FILLED: &str = "█";
const EMPTY: &str = "░";
const EMPTY_COLOR: Color = Color::Rgb(0x60, 0x60, 0x60);
/// Width reserved for the percentage label, e.g. ` 100%`.
const LABEL_WIDTH: u16 = 5;

type Rgb = (u8, u8, u8);

/// Progress bar whose filled cells blend from one colour to another.
///
/// A scaled gradient spans only the filled part, so the end colour is always
/// visible; an unscaled one spans the whole width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientBar {
    ratio: f64,
    from: Rgb,
    to: Rgb,
    scaled: bool,
}

impl GradientBar {
    /// The bar used for `entry_type`. Daily and weekly entries differ only in colour.
    pub fn for_entry_type(entry_type: Option<EntryType>, ratio: f64) -> Self {
        let (from, to, scaled) = match entry_type {
            Some(EntryType::Weekly) => ((0x8e, 0x44, 0xad), (0x34, 0x98, 0xdb), true),
            _ => ((0x5a, 0x56, 0xe0), (0xee, 0x6f, 0xf8), false),
        };
        GradientBar {
            ratio: ratio.clamp(0.0, 1.0),
            from,
            to,
            scaled,
        }
    }

    /// Number of filled cells in a bar `width` cells wide.
    pub fn filled_cells(&self, width: u16) -> u16 {
        (f64::from(width) * self.ratio).round() as u16
    }

    /// Colour of the filled cell at `offset` in a bar `width` cells wide.
    pub fn color_at(&self, offset: u16, width: u16) -> Color {
        let span = if self.scaled {
            self.filled_cells(width)
        } else {
            width
        };
        let t = if span <= 1 {
            0.0
        } else {
            f64::from(offset.min(span - 1)) / f64::from(span - 1)
        };
        let blend = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
        Color::Rgb(
            blend(self.from.0, self.to.0),
            blend(self.from.1, self.to.1),
            blend(self.from.2, self.to.2),
        )
    }
}

impl Widget for GradientBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let bar_width = area.width.saturating_sub(LABEL_WIDTH);
        let filled = self.filled_cells(bar_width);
        for offset in 0..bar_width {
            if let Some(cell) = buf.cell_mut((area.x + offset, area.y)) {
                if offset < filled {
                    cell.set_symbol(FILLED).set_fg(self.color_at(offset, bar_width));
                } else {
                    cell.set_symbol(EMPTY).set_fg(EMPTY_COLOR);
                }
            }
        }

        let label = format!("{:>4}%", (self.ratio * 100.0).round() as u16);
        buf.set_string(area.x + bar_width, area.y, label, Style::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, width: u16) -> String {
        (0..width)
            .map(|x| buf.cell((x, 0)).map_or(" ", |cell| cell.symbol()).to_string())
            .collect()
    }

    #[test]
    fn test_ratio_is_clamped() {
        let bar = GradientBar::for_entry_type(Some(EntryType::Daily), 1.7);
        assert_eq!(bar.filled_cells(10), 10);
        let bar = GradientBar::for_entry_type(Some(EntryType::Daily), -0.5);
        assert_eq!(bar.filled_cells(10), 0);
    }

    #[test]
    fn test_weekly_gradient_ends_at_its_target_colour() {
        let bar = GradientBar::for_entry_type(Some(EntryType::Weekly), 0.5);
        assert_eq!(bar.color_at(0, 20), Color::Rgb(0x8e, 0x44, 0xad));
        assert_eq!(bar.color_at(9, 20), Color::Rgb(0x34, 0x98, 0xdb));
    }

    #[test]
    fn test_daily_gradient_spans_full_width() {
        let bar = GradientBar::for_entry_type(Some(EntryType::Daily), 0.5);
        assert_eq!(bar.color_at(0, 21), Color::Rgb(0x5a, 0x56, 0xe0));
        assert_ne!(bar.color_at(9, 21), Color::Rgb(0xee, 0x6f, 0xf8));
        assert_eq!(bar.color_at(20, 21), Color::Rgb(0xee, 0x6f, 0xf8));
    }

    #[test]
    fn test_render_draws_bar_and_label() {
        let area = Rect::new(0, 0, 15, 1);
        let mut buf = Buffer::empty(area);
        GradientBar::for_entry_type(Some(EntryType::Daily), 0.5).render(area, &mut buf);

        assert_eq!(row(&buf, 15), "█████░░░░░  50%");
    }
}
