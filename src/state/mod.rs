//! Application state module

mod app_state;
mod field;
mod form;
mod validity;

pub use app_state::*;
pub use field::*;
pub use form::*;
pub use validity::*;
