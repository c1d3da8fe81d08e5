//! Field rendering utilities for forms

use super::presentation::FieldView;
use crate::ui::components::wrapped_height;
use crate::state::FieldKind;
use ratatui::{
    layout::{Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows taken by a single-line field (borders included)
pub const FIELD_HEIGHT: u16 = 3;
/// Rows taken by a multiline field (borders included)
pub const MULTILINE_FIELD_HEIGHT: u16 = 6;

/// Height a field needs
pub fn field_height(view: &FieldView) -> u16 {
    if view.spec.is_multiline() {
        MULTILINE_FIELD_HEIGHT
    } else {
        FIELD_HEIGHT
    }
}

/// Draw one input with its label, value, cursor and any violation
pub fn draw_field(frame: &mut Frame, area: Rect, view: &FieldView, is_active: bool, enabled: bool) {
    let border_style = if view.error.is_some() {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let value_style = if !enabled {
        Style::default().fg(Color::DarkGray)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let hint_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC);
    let cursor = Span::styled("▌", Style::default().fg(Color::Cyan));

    let content = if view.value.is_empty() {
        let hint = match (view.spec.placeholder, view.spec.kind) {
            ("", FieldKind::Select(_)) => "Select an option",
            ("", _) if is_active => "",
            ("", _) => "(empty)",
            (placeholder, _) => placeholder,
        };
        let mut spans = Vec::new();
        if is_active && enabled && !matches!(view.spec.kind, FieldKind::Select(_)) {
            spans.push(cursor);
        }
        spans.push(Span::styled(hint, hint_style));
        Paragraph::new(Line::from(spans))
    } else if view.spec.is_multiline() {
        let mut lines: Vec<Line> = view
            .value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), value_style)))
            .collect();
        if is_active && enabled {
            if let Some(last) = lines.last_mut() {
                last.spans.push(cursor);
            }
        }
        // Keep the end of the text, where typing happens, in view
        let inner = area.inner(Margin::new(1, 1));
        let overflow = wrapped_height(&lines, inner.width).saturating_sub(usize::from(inner.height));
        let offset = u16::try_from(overflow).unwrap_or(u16::MAX);
        Paragraph::new(lines).scroll((offset, 0))
    } else if let FieldKind::Select(_) = view.spec.kind {
        let (left, right) = if is_active { ("◀ ", " ▶") } else { ("", "") };
        Paragraph::new(Line::from(vec![
            Span::styled(left, Style::default().fg(Color::Cyan)),
            Span::styled(view.value.as_str(), value_style),
            Span::styled(right, Style::default().fg(Color::Cyan)),
        ]))
    } else {
        let mut spans = vec![Span::styled(view.value.as_str(), value_style)];
        if is_active && enabled {
            spans.push(cursor);
        }
        Paragraph::new(Line::from(spans))
    };

    let mut block = Block::default()
        .title(format!(" {} ", view.spec.display_label()))
        .borders(Borders::ALL)
        .border_style(border_style);
    if let Some(error) = view.error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {error} "),
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::CONTACT_FORM;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(view: &FieldView, is_active: bool) -> Vec<String> {
        let height = field_height(view);
        let mut terminal = Terminal::new(TestBackend::new(30, height)).unwrap();
        terminal
            .draw(|frame| draw_field(frame, frame.area(), view, is_active, true))
            .unwrap();
        let buf = terminal.backend().buffer();
        (0..buf.area.height)
            .map(|y| (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect())
            .collect()
    }

    fn message(value: &str) -> FieldView {
        FieldView {
            spec: CONTACT_FORM.field("message").unwrap(),
            value: value.to_string(),
            error: None,
        }
    }

    #[test]
    fn test_long_message_keeps_last_line_and_cursor() {
        let value = (1..=8).map(|n| format!("line {n}")).collect::<Vec<_>>().join("\n");
        let rows = render(&message(&value), true);

        let last_inner = &rows[rows.len() - 2];
        assert!(last_inner.contains("line 8▌"), "{rows:#?}");
        assert!(!rows.iter().any(|r| r.contains("line 1")));
    }

    #[test]
    fn test_short_message_starts_at_top() {
        let rows = render(&message("first\nsecond"), false);
        assert!(rows[1].contains("first"));
        assert!(rows[2].contains("second"));
    }
}
