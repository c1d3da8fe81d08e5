//! Bordered button used for form submission

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Columns a button needs for `label` (padding and borders included)
pub fn button_width(label: &str) -> u16 {
    label.chars().count() as u16 + 4
}

/// Render a button centered in `area`.
///
/// A disabled button keeps its label but is drawn dimmed and never
/// highlighted, even when focus sits on it.
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    is_selected: bool,
    is_enabled: bool,
) {
    let highlighted = is_selected && is_enabled;
    let (border_style, text_style) = if highlighted {
        (
            Style::default().fg(Color::Yellow),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else if is_enabled {
        (
            Style::default().fg(Color::Yellow),
            Style::default().fg(Color::Yellow),
        )
    } else {
        (
            Style::default().fg(Color::DarkGray),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM),
        )
    };

    let width = button_width(label).min(area.width);
    let rect = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: BUTTON_HEIGHT.min(area.height),
    };

    let paragraph = Paragraph::new(format!(" {label} "))
        .style(text_style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        );
    frame.render_widget(paragraph, rect);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_button_width_counts_chars() {
        assert_eq!(button_width("Send Message"), 16);
        assert_eq!(button_width("Sending..."), 14);
    }

    #[test]
    fn test_button_centered_with_label() {
        let mut terminal = Terminal::new(TestBackend::new(30, 3)).unwrap();
        terminal
            .draw(|frame| render_button(frame, frame.area(), "Send", true, true))
            .unwrap();
        let buf = terminal.backend().buffer();
        let row: String = (0..30).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert!(row.contains("Send"));
        // (30 - 8) / 2 = 11
        assert_eq!(buf[(11, 0)].symbol(), "┌");
        assert_eq!(buf[(13, 1)].style().bg, Some(Color::Yellow));
    }

    #[test]
    fn test_disabled_button_not_highlighted() {
        let mut terminal = Terminal::new(TestBackend::new(20, 3)).unwrap();
        terminal
            .draw(|frame| render_button(frame, frame.area(), "Sending...", true, false))
            .unwrap();
        let buf = terminal.backend().buffer();
        assert_eq!(buf[(3, 0)].style().fg, Some(Color::DarkGray));
        assert_ne!(buf[(5, 1)].style().bg, Some(Color::Yellow));
    }
}
