//! Rendering for the interactive front-end.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};

use crate::evaluator::Estimator;
use crate::presenter::{Progress, Segment, TextTag};
use crate::strength::{BLUE, Palette, RED, TROUGH};

use super::app::App;

const PROMPT: &str = "Enter a password to analyze:";
const HELP: &str = "Enter: analyze again   Esc: quit";

fn rgb(palette: Palette) -> Color {
    let (r, g, b) = palette.rgb;
    Color::Rgb(r, g, b)
}

fn tag_style(tag: TextTag) -> Style {
    match tag {
        TextTag::Score(palette) => Style::default().fg(rgb(palette)),
        TextTag::Default => Style::default(),
        TextTag::Warning => Style::default().fg(rgb(RED)).add_modifier(Modifier::BOLD),
        TextTag::Info => Style::default().fg(rgb(BLUE)).add_modifier(Modifier::BOLD),
        TextTag::Error => Style::default().fg(Color::Red).add_modifier(Modifier::ITALIC),
    }
}

fn gauge_style(progress: Progress) -> Style {
    let fill = progress.palette.map(rgb).unwrap_or(Color::Gray);
    Style::default().fg(fill).bg(rgb(TROUGH))
}

/// Splits tagged segments into display lines, breaking on `\n`.
pub fn to_lines(segments: &[Segment]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();

    for segment in segments {
        let style = tag_style(segment.tag);
        let mut parts = segment.text.split('\n').peekable();
        while let Some(part) = parts.next() {
            if !part.is_empty() {
                current.push(Span::styled(part.to_string(), style));
            }
            if parts.peek().is_some() {
                lines.push(Line::from(std::mem::take(&mut current)));
            }
        }
    }
    if !current.is_empty() {
        lines.push(Line::from(current));
    }
    lines
}

pub fn render<E: Estimator>(frame: &mut Frame<'_>, app: &App<E>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(frame.area());

    frame.render_widget(Paragraph::new(PROMPT), chunks[0]);

    let entry = Paragraph::new(app.masked_entry())
        .block(Block::default().borders(Borders::ALL).title(" Password "));
    frame.render_widget(entry, chunks[1]);

    let progress = app.view().progress;
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Strength "))
        .gauge_style(gauge_style(progress))
        .percent(u16::from(progress.value.min(100)));
    frame.render_widget(gauge, chunks[2]);

    let results = Paragraph::new(to_lines(&app.view().segments))
        .block(Block::default().borders(Borders::ALL).title(" Results "))
        .wrap(Wrap { trim: false });
    frame.render_widget(results, chunks[3]);

    frame.render_widget(
        Paragraph::new(HELP).style(Style::default().fg(Color::DarkGray)),
        chunks[4],
    );

    frame.set_cursor_position(cursor_position(chunks[1], app.cursor()));
}

/// Cursor cell inside the bordered entry box, clamped to its inner width.
fn cursor_position(entry: Rect, cursor: usize) -> (u16, u16) {
    let offset = u16::try_from(cursor).unwrap_or(u16::MAX);
    let x = entry
        .x
        .saturating_add(1)
        .saturating_add(offset)
        .min(entry.right().saturating_sub(2));
    (x, entry.y.saturating_add(1))
}
