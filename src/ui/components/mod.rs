//! Reusable UI components

mod button;
mod dialog;
mod text;

pub use button::{render_button, BUTTON_HEIGHT};
pub use dialog::render_error_dialog;
pub use text::wrapped_height;
