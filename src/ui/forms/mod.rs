//! Form rendering module
//!
//! - `presentation`: which view a form shows for its submission state
//! - `field_renderer`: single input rendering
//! - `form_panel`: the whole form, banner and confirmation

mod field_renderer;
mod form_panel;
mod presentation;

pub use form_panel::draw_form;
