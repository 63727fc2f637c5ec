//! Error dialog component

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Maximum dialog width in columns
const MAX_WIDTH: u16 = 60;

/// Render an error dialog overlay centered on the screen
pub fn render_error_dialog(frame: &mut Frame, error_message: &str) {
    let area = frame.area();

    let dialog_width = MAX_WIDTH.min(area.width.saturating_sub(4)).max(20);
    // 2 border columns + 2 padding columns
    let inner_width = dialog_width.saturating_sub(4).max(1) as usize;

    // Estimate wrapped message height; Paragraph does the actual wrapping
    let message_lines: u16 = error_message
        .split('\n')
        .map(|line| line.chars().count().div_ceil(inner_width).max(1) as u16)
        .sum();

    // title + blank + message + blank + hint + borders
    let dialog_height = (message_lines + 6).min(area.height);

    let dialog_area = Rect {
        x: area.x + (area.width.saturating_sub(dialog_width)) / 2,
        y: area.y + (area.height.saturating_sub(dialog_height)) / 2,
        width: dialog_width,
        height: dialog_height,
    };

    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::raw("Press "),
        Span::styled("Enter", key_style),
        Span::raw(" or "),
        Span::styled("Esc", key_style),
        Span::raw(" to dismiss"),
    ];

    let mut content = vec![
        Line::from(Span::styled(
            "Error",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for line in error_message.split('\n') {
        content.push(Line::from(line.to_string()));
    }
    content.push(Line::from(""));
    content.push(Line::from(hint));

    // Clear the area behind the dialog
    frame.render_widget(Clear, dialog_area);

    let dialog = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(dialog, dialog_area);
}
