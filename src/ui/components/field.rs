//! Input field component for TUI

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Field height in rows (top border + content + bottom border)
pub const FIELD_HEIGHT: u16 = 3;

/// Render a single-line input field
///
/// The border is red while the field is marked invalid, cyan while it has
/// focus, dark gray otherwise. Marked-invalid stays red even with focus so
/// the verdict of the last blur or edit remains visible.
pub fn render_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    is_active: bool,
    is_invalid: bool,
    mask: bool,
) {
    let border_style = if is_invalid {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let masked;
    let display_value = if mask {
        masked = "•".repeat(value.chars().count());
        masked.as_str()
    } else {
        value
    };
    let display_value = if display_value.is_empty() && !is_active {
        "(empty)"
    } else {
        display_value
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_value, text_style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.block(block), area);
}
