//! Base dialog component

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Columns between the border and the message on each side
const PADDING: u16 = 2;

/// Configuration for rendering a modal dialog
pub struct DialogConfig<'a> {
    pub title: &'a str,
    /// Used for the title and the border
    pub accent: Color,
    /// Message content, may contain `\n`
    pub message: &'a str,
    /// Shown under the message after a blank line
    pub hint: Option<Line<'a>>,
    pub max_width: u16,
}

/// Render a centered modal over whatever is already drawn
pub fn render_dialog(frame: &mut Frame, config: DialogConfig) {
    let screen = frame.area();
    let max_width = config.max_width.min(screen.width);
    let text_width = max_width.saturating_sub(2 * PADDING + 2).max(1) as usize;

    let lines = wrap_text(config.message, text_width);
    let widest = lines
        .iter()
        .map(|l| l.chars().count())
        .chain(std::iter::once(config.title.chars().count()))
        .chain(config.hint.as_ref().map(Line::width))
        .max()
        .unwrap_or(0) as u16;

    let width = (widest + 2 * PADDING + 2).min(max_width);
    let hint_rows = if config.hint.is_some() { 2 } else { 0 };
    // title + blank + message + hint + borders
    let height = (2 + lines.len() as u16 + hint_rows + 2).min(screen.height);

    let area = Rect {
        x: screen.x + screen.width.saturating_sub(width) / 2,
        y: screen.y + screen.height.saturating_sub(height) / 2,
        width,
        height,
    };
    frame.render_widget(Clear, area);

    let mut content = vec![
        Line::from(Span::styled(
            config.title,
            Style::default()
                .fg(config.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    content.extend(lines.into_iter().map(Line::from));
    if let Some(hint) = config.hint {
        content.push(Line::from(""));
        content.push(hint);
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(config.accent))
        .padding(ratatui::widgets::Padding::horizontal(PADDING));
    let dialog = Paragraph::new(content)
        .block(block)
        .style(Style::default().bg(Color::Black));
    frame.render_widget(dialog, area);
}

/// Greedy word wrap; blank lines in `text` are kept
pub(super) fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let needed = current.chars().count() + word.chars().count() + 1;
            if !current.is_empty() && needed > max_width {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_wrap_breaks_on_words() {
        assert_eq!(
            wrap_text("Could not copy to clipboard", 12),
            vec!["Could not", "copy to", "clipboard"]
        );
    }

    #[test]
    fn test_wrap_keeps_explicit_breaks() {
        assert_eq!(
            wrap_text("first\n\nsecond", 40),
            vec!["first", "", "second"]
        );
    }

    #[test]
    fn test_wrap_long_word_stays_whole() {
        assert_eq!(wrap_text("abcdefghij", 4), vec!["abcdefghij"]);
    }
}
