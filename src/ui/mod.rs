//! UI module for rendering the TUI

mod components;
mod home;
mod layout;
mod login;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Reserve the bottom line for the status bar
    let content_area = layout::content_area(area);

    // Draw main content based on current view
    match app.state.current_view {
        View::Login => login::draw(frame, content_area, app),
        View::Home => home::draw(frame, content_area, app),
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);

    // Error dialog overlays everything
    if let Some(message) = app.state.current_error() {
        components::render_error_dialog(frame, message);
    }
}
