//! Home view rendering

use super::components::{render_button, BUTTON_HEIGHT};
use super::layout;
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Card width in columns
const CARD_WIDTH: u16 = 46;
/// Logout button width in columns
const BUTTON_WIDTH: u16 = 14;

/// Draw the home view
pub fn draw(frame: &mut Frame, area: Rect, _app: &App) {
    // greeting + spacer + button + borders
    let card_height = 1 + 1 + BUTTON_HEIGHT + 2;
    let card = layout::centered_card(area, CARD_WIDTH, card_height);

    let block = Block::default()
        .title(" Turnstile ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Greeting
            Constraint::Length(1),             // Spacer
            Constraint::Length(BUTTON_HEIGHT), // Logout
        ])
        .split(inner);

    let greeting = Paragraph::new("Welcome back!")
        .centered()
        .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(greeting, chunks[0]);

    // Only control on this view, so it always reads as focused
    let button_area = centered_button(chunks[2]);
    render_button(frame, button_area, "Logout", true, true);
}

fn centered_button(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Min(0),
        ])
        .split(area);

    chunks[1]
}
