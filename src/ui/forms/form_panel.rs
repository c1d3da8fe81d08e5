//! Lead-capture form rendering (inputs, banner, submit button, confirmation)

use super::field_renderer::{draw_field, field_height};
use super::presentation::FormView;
use crate::state::{FormPage, SuccessCopy};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const BANNER_HEIGHT: u16 = 3;

/// A vertically stacked piece of the form
enum Item<'a> {
    Banner(&'a str),
    Field(usize),
    Submit,
}

/// Draw the mounted form. `focused` is true while keys go to the form.
pub fn draw_form(frame: &mut Frame, area: Rect, page: &FormPage, focused: bool) {
    let schema = page.schema();
    let view = FormView::select(
        page.state(),
        page.controller.values(),
        &page.violations,
        schema,
    );

    let border_color = if focused { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .title(format!(" {} ", schema.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (banner, controls_enabled, submit_label, fields) = match view {
        FormView::Confirmation(copy) => {
            draw_confirmation(frame, inner, copy);
            return;
        }
        FormView::Editable {
            banner,
            controls_enabled,
            submit_label,
            fields,
        } => (banner, controls_enabled, submit_label, fields),
    };

    let mut items = Vec::with_capacity(fields.len() + 2);
    if let Some(text) = banner {
        items.push(Item::Banner(text));
    }
    items.extend((0..fields.len()).map(Item::Field));
    items.push(Item::Submit);

    let height_of = |item: &Item| match item {
        Item::Banner(_) => BANNER_HEIGHT,
        Item::Field(i) => field_height(&fields[*i]),
        Item::Submit => BUTTON_HEIGHT,
    };
    let is_active = |item: &Item| match item {
        Item::Field(i) => *i == page.active_field,
        Item::Submit => page.is_submit_focused(),
        Item::Banner(_) => false,
    };

    // Scroll so the focused item stays fully visible
    let mut offset = 0u16;
    let mut top = 0u16;
    for item in &items {
        let h = height_of(item);
        if is_active(item) && top + h > inner.height {
            offset = top + h - inner.height;
        }
        top += h;
    }

    let mut top = 0u16;
    for item in &items {
        let h = height_of(item);
        let starts_visible = top >= offset;
        let ends_visible = top + h <= offset + inner.height;
        if starts_visible && ends_visible {
            let rect = Rect {
                x: inner.x,
                y: inner.y + top - offset,
                width: inner.width,
                height: h,
            };
            match item {
                Item::Banner(text) => draw_banner(frame, rect, text),
                Item::Field(i) => draw_field(
                    frame,
                    rect,
                    &fields[*i],
                    focused && is_active(item),
                    controls_enabled,
                ),
                Item::Submit => render_button(
                    frame,
                    rect,
                    submit_label,
                    focused && is_active(item),
                    controls_enabled,
                ),
            }
        }
        top += h;
    }
}

fn draw_banner(frame: &mut Frame, area: Rect, text: &str) {
    let banner = Paragraph::new(Span::styled(text, Style::default().fg(Color::Red)))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        );
    frame.render_widget(banner, area);
}

fn draw_confirmation(frame: &mut Frame, area: Rect, copy: SuccessCopy) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "✓",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            copy.heading,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    for body in copy.body {
        lines.push(Line::from(""));
        lines.push(Line::from(*body));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::{MockSubmissionGateway, SubmissionGateway};
    use crate::state::{SubmissionState, BOOKING_FORM, CONTACT_FORM};
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

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

    fn render(page: &FormPage, focused: bool, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| draw_form(frame, frame.area(), page, focused))
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    fn gateway(outcome_ok: bool) -> Arc<dyn SubmissionGateway> {
        let mut gateway = MockSubmissionGateway::new();
        gateway.expect_submit().returning(move |_| {
            if outcome_ok {
                Ok(())
            } else {
                Err(crate::gateway::SubmissionError::Rejected { status: 500 })
            }
        });
        Arc::new(gateway)
    }

    fn filled_contact(ok: bool) -> FormPage {
        let mut page = FormPage::mount(&CONTACT_FORM, gateway(ok));
        page.controller.set_field("name", "John Doe");
        page.controller.set_field("email", "john@example.com");
        page.controller.set_field("subject", "quote");
        page.controller.set_field("message", "Test message");
        page
    }

    #[test]
    fn test_idle_form_shows_fields_and_button() {
        let page = FormPage::mount(&CONTACT_FORM, gateway(true));
        let output = render(&page, false, 60, 30);
        assert!(output.contains("Send Us a Message"));
        assert!(output.contains("Name *"));
        assert!(output.contains("Phone"));
        assert!(!output.contains("Phone *"));
        assert!(output.contains("Send Message"));
        assert!(!output.contains("Something went wrong"));
    }

    #[test]
    fn test_placeholder_shown_for_empty_booking_field() {
        let page = FormPage::mount(&BOOKING_FORM, gateway(true));
        let output = render(&page, false, 70, 50);
        assert!(output.contains("John Doe"));
        assert!(output.contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_focused_field_scrolls_into_view() {
        let mut page = FormPage::mount(&BOOKING_FORM, gateway(true));
        page.active_field = BOOKING_FORM.field_count();
        let output = render(&page, true, 60, 14);
        assert!(output.contains("Submit Booking Request"));
        assert!(!output.contains("Full Name"));
    }

    #[test]
    fn test_violation_message_rendered() {
        let mut page = FormPage::mount(&CONTACT_FORM, gateway(true));
        page.try_submit(chrono::NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
        let output = render(&page, true, 70, 30);
        assert!(output.contains("Please fill out this field."));
    }

    #[tokio::test]
    async fn test_error_state_shows_banner() {
        let mut page = filled_contact(false);
        page.controller.submit();
        page.controller.next_update().await;
        assert_eq!(page.state(), SubmissionState::Error);
        let output = render(&page, true, 80, 34);
        assert!(output.contains("Something went wrong. Please try again or call us"));
        assert!(output.contains("John Doe"));
    }

    #[tokio::test]
    async fn test_success_shows_confirmation_only() {
        let mut page = filled_contact(true);
        page.controller.submit();
        page.controller.next_update().await;
        let output = render(&page, true, 60, 20);
        assert!(output.contains("Thank you for your message!"));
        assert!(!output.contains("Send Message"));
        assert!(!output.contains("Name *"));
    }
}
