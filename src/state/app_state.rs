//! Application state definitions

use super::forms::FormPage;
use super::navigation::{NavState, Route};
use std::collections::VecDeque;

/// Terminal width below which the nav bar collapses into a menu
pub const NARROW_WIDTH: u16 = 80;

/// Where key presses go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Page navigation and scrolling
    #[default]
    Browse,
    /// Typing into the mounted form
    Form,
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub nav: NavState,
    /// Form of the current page, mounted on entry and dropped on exit
    pub form: Option<FormPage>,
    pub input_mode: InputMode,

    // UI state
    pub scroll_offset: usize,
    error_queue: VecDeque<String>,
}

impl AppState {
    pub fn current_route(&self) -> Route {
        self.nav.current_route()
    }

    pub fn is_form_mode(&self) -> bool {
        self.input_mode == InputMode::Form && self.form.is_some()
    }

    /// Scroll down
    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    /// Scroll up
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll down a page (10 lines)
    pub fn scroll_down_page(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(10);
    }

    /// Scroll up a page (10 lines)
    pub fn scroll_up_page(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(10);
    }

    /// Queue an error for the modal dialog
    pub fn push_error(&mut self, message: String) {
        tracing::warn!(%message, "Showing error dialog");
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    /// Error currently shown, oldest first
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }
}

/// Whether a terminal of `width` columns uses the collapsed layout
pub fn is_narrow(width: u16) -> bool {
    width < NARROW_WIDTH
}
