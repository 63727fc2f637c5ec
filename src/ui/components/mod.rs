//! Reusable UI components

mod button;
mod dialog;
mod field;

pub use button::{render_button, BUTTON_HEIGHT};
pub use dialog::render_error_dialog;
pub use field::{render_field, FIELD_HEIGHT};
