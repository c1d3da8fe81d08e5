//! Application state and core logic

use crate::config::SiteConfig;
use crate::content;
use crate::gateway::{build_http_client, FormspreeGateway, SubmissionGateway};
use crate::platform::{is_interrupt, is_submit_shortcut};
use crate::state::{is_narrow, AppState, FormKind, FormPage, InputMode, Route, SubmissionState};
use anyhow::Result;
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Second Ctrl+C must land within this window to quit
const QUIT_CONFIRM_WINDOW: Duration = Duration::from_secs(2);

/// One gateway per lead-capture form
#[derive(Clone)]
pub struct FormGateways {
    contact: Arc<dyn SubmissionGateway>,
    booking: Arc<dyn SubmissionGateway>,
}

impl FormGateways {
    pub fn new(contact: Arc<dyn SubmissionGateway>, booking: Arc<dyn SubmissionGateway>) -> Self {
        Self { contact, booking }
    }

    /// Formspree gateways sharing one HTTP client
    pub fn from_config(config: &SiteConfig) -> Result<Self> {
        let client = build_http_client(config.request_timeout())?;
        let build = |kind: FormKind| {
            if config.is_placeholder(kind) {
                tracing::warn!(
                    form = kind.label(),
                    "No form id configured, submissions will be rejected"
                );
            }
            let gateway =
                FormspreeGateway::new(client.clone(), config.endpoint_base(), config.form_id(kind));
            tracing::debug!(form = kind.label(), url = gateway.url(), "Form endpoint");
            Arc::new(gateway) as Arc<dyn SubmissionGateway>
        };
        Ok(Self::new(build(FormKind::Contact), build(FormKind::Booking)))
    }

    fn for_kind(&self, kind: FormKind) -> Arc<dyn SubmissionGateway> {
        match kind {
            FormKind::Contact => Arc::clone(&self.contact),
            FormKind::Booking => Arc::clone(&self.booking),
        }
    }
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    gateways: FormGateways,
    /// Whether the app should quit
    quit: bool,
    /// Feedback shown in the status bar until the next key press
    pub copy_message: Option<String>,
    /// Terminal size for layout decisions (height, width)
    pub terminal_size: Option<(u16, u16)>,
    /// Timestamp of last Ctrl+C press for double-tap quit
    pub last_ctrl_c: Option<Instant>,
}

impl App {
    /// Create a new App instance posting to the configured endpoints
    pub fn new(config: &SiteConfig) -> Result<Self> {
        Ok(Self::with_gateways(FormGateways::from_config(config)?))
    }

    pub fn with_gateways(gateways: FormGateways) -> Self {
        Self {
            state: AppState::default(),
            gateways,
            quit: false,
            copy_message: None,
            terminal_size: None,
            last_ctrl_c: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Whether the collapsed nav layout is in use
    pub fn is_narrow(&self) -> bool {
        is_narrow(self.terminal_size.map(|(_, w)| w).unwrap_or(80))
    }

    /// Go to `route`, mounting its form and dropping the previous one
    pub fn navigate(&mut self, route: Route) {
        let previous = self.state.current_route();
        self.state.nav.navigate(route);
        if previous == route {
            return;
        }
        tracing::info!(path = self.state.nav.current_path(), "Navigated");
        self.state.scroll_offset = 0;
        self.state.input_mode = InputMode::Browse;
        if let Some(page) = &self.state.form {
            let form = page.schema().kind.label();
            if page.controller.has_pending_work() {
                tracing::debug!(form, "Cancelling outstanding submission or reset");
            } else if !page.controller.values().is_all_empty() {
                tracing::debug!(form, "Discarding unsent input");
            }
        }
        // Dropping the old page cancels its reset timer and in-flight result
        self.state.form = route
            .form()
            .map(|kind| FormPage::mount(kind.schema(), self.gateways.for_kind(kind)));
    }

    /// Apply submission results and timer firings. Returns true if anything changed.
    pub fn tick(&mut self) -> bool {
        let Some(page) = self.state.form.as_mut() else {
            return false;
        };
        if !page.tick() {
            return false;
        }
        match page.state() {
            SubmissionState::Success => self.state.input_mode = InputMode::Browse,
            SubmissionState::Error => {
                self.copy_message = Some("Submission failed".to_string());
            }
            _ => {}
        }
        true
    }

    /// Handle keyboard input
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if is_interrupt(&key) {
            self.handle_interrupt();
            return Ok(());
        }

        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.copy_message = None;

        // The menu only exists in the narrow layout; a widened terminal drops it
        if self.state.nav.mobile_menu_open && !self.is_narrow() {
            tracing::debug!("Closing menu hidden by wide layout");
            self.state.nav.mobile_menu_open = false;
        }

        if self.state.is_form_mode() {
            self.handle_form_key(key);
        } else if self.state.nav.mobile_menu_open {
            self.handle_menu_key(key);
        } else {
            self.handle_browse_key(key);
        }
        Ok(())
    }

    fn handle_interrupt(&mut self) {
        let now = Instant::now();
        match self.last_ctrl_c {
            Some(prev) if now.duration_since(prev) <= QUIT_CONFIRM_WINDOW => {
                self.quit = true;
            }
            _ => {
                self.last_ctrl_c = Some(now);
                self.copy_message = Some("Press Ctrl+C again to quit".to_string());
            }
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c @ '1'..='5') => {
                let idx = (c as usize) - ('1' as usize);
                self.navigate(Route::ALL[idx]);
            }
            KeyCode::Char('h') | KeyCode::Left => self.navigate(self.state.nav.prev_route()),
            KeyCode::Char('l') | KeyCode::Right => self.navigate(self.state.nav.next_route()),
            KeyCode::Char('j') | KeyCode::Down => self.state.scroll_down(),
            KeyCode::Char('k') | KeyCode::Up => self.state.scroll_up(),
            KeyCode::Char('d') | KeyCode::PageDown => self.state.scroll_down_page(),
            KeyCode::Char('u') | KeyCode::PageUp => self.state.scroll_up_page(),
            KeyCode::Char('m') if self.is_narrow() => self.state.nav.toggle_mobile_menu(),
            KeyCode::Tab | KeyCode::Enter | KeyCode::Char('i') if self.state.form.is_some() => {
                self.state.input_mode = InputMode::Form;
            }
            KeyCode::Char('y') if self.state.current_route() == Route::Contact => {
                self.copy_phone();
            }
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        let nav = &mut self.state.nav;
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => nav.menu_next(),
            KeyCode::Char('k') | KeyCode::Up => nav.menu_prev(),
            KeyCode::Enter => {
                let route = nav.menu_selection();
                self.navigate(route);
            }
            KeyCode::Esc | KeyCode::Char('m') => nav.toggle_mobile_menu(),
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc {
            self.state.input_mode = InputMode::Browse;
            return;
        }
        if is_submit_shortcut(&key) {
            self.submit_form();
            return;
        }

        let Some(page) = self.state.form.as_mut() else {
            return;
        };
        if !page.state().is_editable() {
            return;
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => page.next_field(),
            KeyCode::BackTab | KeyCode::Up => page.prev_field(),
            KeyCode::Left => page.cycle_option(false),
            KeyCode::Right => page.cycle_option(true),
            KeyCode::Enter if page.is_submit_focused() => self.submit_form(),
            KeyCode::Enter => page.newline(),
            KeyCode::Backspace => page.backspace(),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                page.input_char(c)
            }
            _ => {}
        }
    }

    /// Validate and submit the mounted form
    fn submit_form(&mut self) {
        let Some(page) = self.state.form.as_mut() else {
            return;
        };
        let today = Local::now().date_naive();
        if !page.try_submit(today) && !page.violations.is_empty() {
            self.copy_message = Some("Please fix the highlighted fields".to_string());
        }
    }

    fn copy_phone(&mut self) {
        match self.copy_to_clipboard(content::PHONE) {
            Ok(()) => {
                self.copy_message = Some(format!("Copied {}", content::PHONE));
            }
            Err(e) => {
                tracing::warn!(error = %e, "Clipboard unavailable");
                self.push_error(format!(
                    "Could not copy to clipboard.\nCall us at {}",
                    content::PHONE
                ));
            }
        }
    }

    /// Copy text to system clipboard
    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}
