//! UI module for rendering the TUI

mod components;
mod context_bar;
mod forms;
mod layout;
mod pages;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let areas = layout::create_layout(frame.area());
    let narrow = app.is_narrow();

    layout::draw_header(frame, areas.header, &app.state.nav, narrow);
    context_bar::draw_context_bar(frame, areas.crumbs, app.state.current_route());
    pages::draw(frame, areas.content, app);
    layout::draw_footer(frame, areas.footer);
    layout::draw_status_bar(frame, areas.status, app);

    // Overlays last so they sit above the page
    if narrow && app.state.nav.mobile_menu_open {
        let below_header = ratatui::layout::Rect {
            y: areas.crumbs.y,
            height: areas.crumbs.height + areas.content.height,
            ..areas.crumbs
        };
        layout::draw_mobile_menu(frame, below_header, &app.state.nav);
    }

    if let Some(error) = app.state.current_error() {
        components::render_error_dialog(frame, error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::FormGateways;
    use crate::gateway::{MockSubmissionGateway, SubmissionError, SubmissionGateway};
    use crate::state::{InputMode, Route, SubmissionState};
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn gateway(result: Result<(), SubmissionError>) -> Arc<dyn SubmissionGateway> {
        let mut gateway = MockSubmissionGateway::new();
        gateway
            .expect_submit()
            .returning(move |_| result.clone());
        Arc::new(gateway)
    }

    fn app_with(result: Result<(), SubmissionError>, width: u16) -> App {
        let mut app = App::with_gateways(FormGateways::new(
            gateway(result.clone()),
            gateway(result),
        ));
        app.terminal_size = Some((40, width));
        app
    }

    fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
        let mut s = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                s.push_str(buf[(x, y)].symbol());
            }
            s.push('\n');
        }
        s
    }

    fn render(app: &App) -> String {
        let (height, width) = app.terminal_size.unwrap_or((40, 120));
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    fn fill_contact(app: &mut App) {
        let page = app.state.form.as_mut().unwrap();
        page.controller.set_field("name", "John Doe");
        page.controller.set_field("email", "john@example.com");
        page.controller.set_field("subject", "quote");
        page.controller.set_field("message", "Test message");
    }

    #[test]
    fn test_home_page_chrome() {
        let app = app_with(Ok(()), 120);
        let output = render(&app);
        assert!(output.contains("DJN Services LLC"));
        assert!(output.contains("Book Now"));
        assert!(output.contains("Expert Welding Services You Can Trust"));
        assert!(output.contains("^C^C:quit"));
        assert!(output.contains("(555) 123-4567"));
        assert!(!output.contains("Menu (m)"));
    }

    #[test]
    fn test_booking_breadcrumb() {
        let mut app = app_with(Ok(()), 120);
        app.navigate(Route::Booking);
        let output = render(&app);
        assert!(output.contains("Home / Book Your Service"));
        assert!(output.contains("Schedule Your Service"));
    }

    #[test]
    fn test_contact_page_shows_form_and_info() {
        let mut app = app_with(Ok(()), 120);
        app.navigate(Route::Contact);
        let output = render(&app);
        assert!(output.contains("Send Us a Message"));
        assert!(output.contains("Contact Us"));
        assert!(output.contains("y:copy phone"));
    }

    #[test]
    fn test_narrow_layout_collapses_nav() {
        let mut app = app_with(Ok(()), 60);
        let output = render(&app);
        assert!(output.contains("Menu (m)"));
        assert!(!output.contains("1 Home"));

        app.state.nav.toggle_mobile_menu();
        let output = render(&app);
        assert!(output.contains("Close (m)"));
        assert!(output.contains("▶ Home"));
        assert!(output.contains("Services"));
    }

    #[test]
    fn test_error_dialog_overlays_page() {
        let mut app = app_with(Ok(()), 100);
        app.push_error("Could not copy to clipboard.");
        let output = render(&app);
        assert!(output.contains("Could not copy to clipboard."));
        assert!(output.contains("to dismiss"));
    }

    #[test]
    fn test_form_mode_hints() {
        let mut app = app_with(Ok(()), 120);
        app.navigate(Route::Contact);
        app.state.input_mode = InputMode::Form;
        let output = render(&app);
        assert!(output.contains("Ctrl+S:submit"));
    }

    #[tokio::test]
    async fn test_success_replaces_form_with_confirmation() {
        let mut app = app_with(Ok(()), 120);
        app.navigate(Route::Contact);
        fill_contact(&mut app);
        assert!(app.state.form.as_mut().unwrap().controller.submit());
        while app.state.form.as_ref().unwrap().state() != SubmissionState::Success {
            tokio::task::yield_now().await;
            app.tick();
        }

        let output = render(&app);
        assert!(output.contains("Thank you for your message!"));
        assert!(!output.contains("Send Message"));
    }

    #[tokio::test]
    async fn test_failure_shows_banner() {
        let mut app = app_with(Err(SubmissionError::Rejected { status: 422 }), 120);
        app.navigate(Route::Contact);
        fill_contact(&mut app);
        assert!(app.state.form.as_mut().unwrap().controller.submit());
        while app.state.form.as_ref().unwrap().state() != SubmissionState::Error {
            tokio::task::yield_now().await;
            app.tick();
        }

        let output = render(&app);
        assert!(output.contains("Something went wrong"));
        assert!(output.contains("Submission failed"));
    }
}
