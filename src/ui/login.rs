//! Login view rendering

use super::components::{render_button, render_field, BUTTON_HEIGHT, FIELD_HEIGHT};
use super::layout;
use crate::app::App;
use crate::state::LoginFocus;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Card width in columns
const CARD_WIDTH: u16 = 46;
/// Submit button width in columns
const BUTTON_WIDTH: u16 = 13;

/// Draw the login view
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(form) = &app.state.login_form else {
        return;
    };

    // fields + spacer + button + borders
    let card_height = FIELD_HEIGHT * 2 + 1 + BUTTON_HEIGHT + 2;
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
            Constraint::Length(FIELD_HEIGHT),  // E-Mail
            Constraint::Length(FIELD_HEIGHT),  // Password
            Constraint::Length(1),             // Spacer
            Constraint::Length(BUTTON_HEIGHT), // Submit
        ])
        .split(inner);

    render_field(
        frame,
        chunks[0],
        "E-Mail",
        form.email().value(),
        form.focus() == LoginFocus::Email,
        form.email().validity().is_marked_invalid(),
        false,
    );

    render_field(
        frame,
        chunks[1],
        "Password",
        form.password().value(),
        form.focus() == LoginFocus::Password,
        form.password().validity().is_marked_invalid(),
        app.mask_password(),
    );

    // Enabled once the debounced form check has passed
    let button_area = centered_button(chunks[3]);
    render_button(
        frame,
        button_area,
        "Login",
        form.focus() == LoginFocus::Submit,
        form.committed(),
    );
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
