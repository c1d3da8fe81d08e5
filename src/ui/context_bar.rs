//! Context bar (breadcrumb trail) component

use crate::state::{breadcrumbs, Crumb, Route};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Longest crumb label before truncation
const MAX_LABEL: usize = 40;

/// Draw the breadcrumb trail for `route`, centered in a bordered box
pub fn draw_context_bar(frame: &mut Frame, area: Rect, route: Route) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let paragraph = Paragraph::new(crumb_line(&breadcrumbs(route)))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

/// Last crumb is the current page (bold); earlier ones are links (cyan)
fn crumb_line(crumbs: &[Crumb]) -> Line<'static> {
    let separator = Span::styled(" / ", Style::default().fg(Color::DarkGray));
    let mut spans = Vec::with_capacity(crumbs.len() * 2);

    for (i, crumb) in crumbs.iter().enumerate() {
        if i > 0 {
            spans.push(separator.clone());
        }
        let style = if crumb.route.is_some() {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        spans.push(Span::styled(truncate_label(crumb.label, MAX_LABEL), style));
    }

    Line::from(spans)
}

/// Truncate a label if it exceeds max length
fn truncate_label(label: &str, max_len: usize) -> String {
    if label.chars().count() > max_len {
        let kept: String = label.chars().take(max_len - 3).collect();
        format!("{kept}...")
    } else {
        label.to_string()
    }
}
