//! Layout components (nav header, mobile menu, footer, status bar)

use crate::app::App;
use crate::content::{BUSINESS_NAME, EMAIL, FOOTER_HOURS, PHONE, TAGLINE};
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{NavState, Route, NAV_ITEMS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Areas every page is drawn into
pub struct PageLayout {
    pub header: Rect,
    pub crumbs: Rect,
    pub content: Rect,
    pub footer: Rect,
    pub status: Rect,
}

/// Split the screen into header, breadcrumbs, content, footer and status bar
pub fn create_layout(area: Rect) -> PageLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Nav header
            Constraint::Length(3), // Breadcrumbs
            Constraint::Min(0),    // Page content
            Constraint::Length(2), // Footer
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    PageLayout {
        header: chunks[0],
        crumbs: chunks[1],
        content: chunks[2],
        footer: chunks[3],
        status: chunks[4],
    }
}

/// Draw the brand and navigation links; collapses to a menu toggle when narrow
pub fn draw_header(frame: &mut Frame, area: Rect, nav: &NavState, narrow: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let brand = Paragraph::new(Span::styled(
        format!(" {BUSINESS_NAME}"),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(brand, inner);

    let links = if narrow {
        let label = if nav.mobile_menu_open {
            "✕ Close (m) "
        } else {
            "☰ Menu (m) "
        };
        Line::from(Span::styled(label, Style::default().fg(Color::Cyan)))
    } else {
        nav_links(nav)
    };
    frame.render_widget(Paragraph::new(links).alignment(Alignment::Right), inner);
}

/// Inline links with their number keys; the active one is highlighted
fn nav_links(nav: &NavState) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, item) in NAV_ITEMS.iter().enumerate() {
        let active = nav.is_active(item.route.path());
        let key = Span::styled(
            format!("{} ", i + 1),
            Style::default().fg(Color::DarkGray),
        );
        let style = if item.is_cta {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else if active {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default()
        };
        spans.push(key);
        if item.is_cta {
            spans.push(Span::styled(format!(" {} ", item.name), style));
        } else {
            spans.push(Span::styled(item.name, style));
        }
        spans.push(Span::raw("  "));
    }
    Line::from(spans)
}

/// Draw the collapsed-layout menu below the header
pub fn draw_mobile_menu(frame: &mut Frame, below: Rect, nav: &NavState) {
    let height = (NAV_ITEMS.len() as u16 + 2).min(below.height);
    let area = Rect {
        x: below.x,
        y: below.y,
        width: below.width,
        height,
    };
    frame.render_widget(Clear, area);

    let items: Vec<ListItem> = NAV_ITEMS
        .iter()
        .map(|item| {
            let style = if nav.is_active(item.route.path()) {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else if item.is_cta {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            ListItem::new(Span::styled(item.name, style))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Menu ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("▶ ");

    let mut state = ListState::default().with_selected(Some(nav.menu_index));
    frame.render_stateful_widget(list, area, &mut state);
}

/// Draw the business name, tagline and contact line
pub fn draw_footer(frame: &mut Frame, area: Rect) {
    let muted = Style::default().fg(Color::DarkGray);
    let lines = vec![
        Line::from(vec![
            Span::styled(
                BUSINESS_NAME,
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" - {TAGLINE}"), muted),
        ]),
        Line::from(Span::styled(
            format!("{PHONE} · {EMAIL} · {FOOTER_HOURS}"),
            muted,
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(" {}", key_hints(app)),
        Style::default().fg(Color::Gray),
    )];

    if let Some(msg) = &app.copy_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right (double Ctrl+C to quit)
    let quit_hint = " ^C^C:quit ";
    let width = quit_hint.len() as u16;
    if area.width > width {
        let quit_area = Rect {
            x: area.x + area.width - width,
            width,
            ..area
        };
        let quit_widget =
            Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
        frame.render_widget(quit_widget, quit_area);
    }
}

/// Keyboard hints for the current input target
fn key_hints(app: &App) -> String {
    if app.state.nav.mobile_menu_open && app.is_narrow() {
        return "j/k:move  Enter:open  Esc:close".to_string();
    }
    if app.state.is_form_mode() {
        return format!("Tab:next  ←/→:option  {SUBMIT_SHORTCUT}:submit  Esc:done");
    }

    let mut hints = if app.is_narrow() {
        "m:menu  j/k:scroll".to_string()
    } else {
        "1-5:page  h/l:prev/next  j/k:scroll".to_string()
    };
    let route = app.state.current_route();
    if route.form().is_some() {
        hints.push_str("  Tab:fill form");
    }
    if route == Route::Contact {
        hints.push_str("  y:copy phone");
    }
    hints.push_str("  q:quit");
    hints
}
