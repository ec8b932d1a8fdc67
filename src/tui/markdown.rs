//! Terminal styling for the preview of a built document.
//!
//! The front-matter block is not markdown and is shown dimmed as-is. The rest
//! is parsed into an mdast tree and mapped onto ratatui styles, so markup typed
//! into an item (emphasis, code, links) shows styled instead of as raw markers.

use crate::constants::{EMPTY_SECTION_LINE, FRONT_MATTER_DELIMITER};
use markdown::{mdast, to_mdast, ParseOptions};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use tracing::debug;

const BULLET: &str = "• ";
const INDENT: &str = "  ";
const RULE_WIDTH: usize = 40;

/// Converts document text into styled lines for display.
pub fn styled_lines(document: &str) -> Vec<Line<'static>> {
    let (front_matter, body) = split_front_matter(document);
    let mut lines: Vec<Line<'static>> = front_matter
        .into_iter()
        .map(|line| Line::styled(line.to_string(), front_matter_style()))
        .collect();

    let body_lines = markdown_lines(body);
    if !lines.is_empty() && !body_lines.is_empty() {
        lines.push(Line::default());
    }
    lines.extend(body_lines);
    lines
}

/// Splits off the leading `---` block, delimiters included.
fn split_front_matter(document: &str) -> (Vec<&str>, &str) {
    let mut block = Vec::new();
    let mut offset = 0;
    for (index, raw) in document.split_inclusive('\n').enumerate() {
        let line = raw.trim_end_matches(&['\r', '\n'][..]);
        if index == 0 && line != FRONT_MATTER_DELIMITER {
            return (block, document);
        }
        block.push(line);
        offset += raw.len();
        if index > 0 && line == FRONT_MATTER_DELIMITER {
            return (block, &document[offset..]);
        }
    }
    (block, "")
}

fn markdown_lines(body: &str) -> Vec<Line<'static>> {
    if body.trim().is_empty() {
        return Vec::new();
    }

    let root = match to_mdast(body, &ParseOptions::gfm()) {
        Ok(node) => node,
        Err(_) => {
            debug!("Preview body did not parse as markdown, showing it unstyled");
            return body.lines().map(|line| Line::raw(line.to_string())).collect();
        }
    };
    let nodes = match root {
        mdast::Node::Root(root) => root.children,
        other => vec![other],
    };

    // A blank line separates blocks, except directly under a heading.
    let mut lines = Vec::new();
    let mut after_heading = false;
    for (index, node) in nodes.iter().enumerate() {
        let is_heading = matches!(node, mdast::Node::Heading(_));
        if index > 0 && (is_heading || !after_heading) {
            lines.push(Line::default());
        }
        lines.extend(block_lines(node, 0));
        after_heading = is_heading;
    }
    lines
}

fn block_lines(node: &mdast::Node, depth: usize) -> Vec<Line<'static>> {
    match node {
        mdast::Node::Heading(heading) => {
            let style = heading_style(heading.depth);
            inline_lines(&heading.children, Style::default())
                .into_iter()
                .map(|mut line| {
                    if heading.depth == 1 {
                        for span in &mut line.spans {
                            span.content = span.content.to_uppercase().into();
                        }
                    }
                    line.style(style)
                })
                .collect()
        }
        mdast::Node::Paragraph(paragraph) => inline_lines(&paragraph.children, Style::default()),
        mdast::Node::List(list) => list_lines(list, depth),
        mdast::Node::Code(code) => code
            .value
            .lines()
            .map(|line| Line::styled(format!("{INDENT}{line}"), code_style()))
            .collect(),
        mdast::Node::Blockquote(quote) => quote
            .children
            .iter()
            .flat_map(|child| block_lines(child, depth))
            .map(|line| {
                let mut spans = vec![Span::styled("│ ", front_matter_style())];
                spans.extend(line.spans);
                Line::from(spans).style(line.style.add_modifier(Modifier::ITALIC))
            })
            .collect(),
        mdast::Node::ThematicBreak(_) => {
            vec![Line::styled("─".repeat(RULE_WIDTH), front_matter_style())]
        }
        mdast::Node::Html(html) => html
            .value
            .lines()
            .map(|line| Line::raw(line.to_string()))
            .collect(),
        other => other
            .children()
            .map(|children| inline_lines(children, Style::default()))
            .unwrap_or_default(),
    }
}

fn list_lines(list: &mdast::List, depth: usize) -> Vec<Line<'static>> {
    let indent = INDENT.repeat(depth + 1);
    let start = list.start.unwrap_or(1);
    let mut lines = Vec::new();

    for (offset, node) in list.children.iter().enumerate() {
        let mdast::Node::ListItem(item) = node else {
            continue;
        };
        let marker = if list.ordered {
            format!("{}. ", start + offset as u32)
        } else {
            BULLET.to_string()
        };
        let empty_note = is_empty_note(item);
        let marker_style = if empty_note {
            empty_note_style()
        } else {
            Style::default().fg(Color::Yellow)
        };

        let mut first = true;
        for child in &item.children {
            if let mdast::Node::List(nested) = child {
                lines.extend(list_lines(nested, depth + 1));
                continue;
            }
            for line in block_lines(child, depth + 1) {
                let lead = if first {
                    Span::styled(format!("{indent}{marker}"), marker_style)
                } else {
                    Span::raw(format!("{indent}{}", " ".repeat(marker.chars().count())))
                };
                first = false;
                let mut spans = vec![lead];
                spans.extend(line.spans);
                let style = if empty_note {
                    line.style.patch(empty_note_style())
                } else {
                    line.style
                };
                lines.push(Line::from(spans).style(style));
            }
        }
        if first {
            lines.push(Line::from(Span::styled(format!("{indent}{marker}"), marker_style)));
        }
    }
    lines
}

fn is_empty_note(item: &mdast::ListItem) -> bool {
    let note = EMPTY_SECTION_LINE.trim_start_matches(|c: char| c == '*' || c == ' ');
    plain_text(&item.children).trim() == note
}

fn plain_text(nodes: &[mdast::Node]) -> String {
    nodes
        .iter()
        .map(|node| match node {
            mdast::Node::Text(text) => text.value.clone(),
            mdast::Node::InlineCode(code) => code.value.clone(),
            other => other.children().map(|c| plain_text(c)).unwrap_or_default(),
        })
        .collect()
}

fn inline_lines(nodes: &[mdast::Node], style: Style) -> Vec<Line<'static>> {
    let mut writer = InlineWriter::default();
    writer.write(nodes, style);
    writer.finish()
}

/// Collects styled spans, starting a new line at every newline in the text.
#[derive(Default)]
struct InlineWriter {
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
}

impl InlineWriter {
    fn write(&mut self, nodes: &[mdast::Node], style: Style) {
        for node in nodes {
            match node {
                mdast::Node::Text(text) => self.push_text(&text.value, style),
                mdast::Node::Strong(strong) => {
                    self.write(&strong.children, style.add_modifier(Modifier::BOLD))
                }
                mdast::Node::Emphasis(emphasis) => {
                    self.write(&emphasis.children, style.add_modifier(Modifier::ITALIC))
                }
                mdast::Node::Delete(delete) => {
                    self.write(&delete.children, style.add_modifier(Modifier::CROSSED_OUT))
                }
                mdast::Node::InlineCode(code) => self.push_text(&code.value, style.patch(code_style())),
                mdast::Node::Link(link) => self.write(
                    &link.children,
                    style.fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
                ),
                mdast::Node::Break(_) => self.push_text("\n", style),
                mdast::Node::Html(html) => self.push_text(&html.value, style),
                mdast::Node::Image(image) => self.push_text(&image.alt, style),
                other => {
                    if let Some(children) = other.children() {
                        self.write(children, style);
                    }
                }
            }
        }
    }

    fn push_text(&mut self, text: &str, style: Style) {
        let mut parts = text.split('\n');
        if let Some(first) = parts.next() {
            self.push_span(first, style);
        }
        for part in parts {
            let spans = std::mem::take(&mut self.current);
            self.lines.push(Line::from(spans));
            self.push_span(part, style);
        }
    }

    fn push_span(&mut self, text: &str, style: Style) {
        if !text.is_empty() {
            self.current.push(Span::styled(text.to_string(), style));
        }
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        self.lines.push(Line::from(self.current));
        self.lines
    }
}

fn heading_style(depth: u8) -> Style {
    match depth {
        1 => Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        2 => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        _ => Style::default().add_modifier(Modifier::BOLD),
    }
}

fn code_style() -> Style {
    Style::default().fg(Color::LightYellow)
}

fn empty_note_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC)
}

fn front_matter_style() -> Style {
    Style::default().fg(Color::DarkGray)
}
