//! Page bodies: marketing copy for each route plus the form pages

use super::components::wrapped_height;
use super::forms::draw_form;
use crate::app::App;
use crate::content::{self, BulletList, Card, Hero};
use crate::state::Route;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Draw the body of the current page
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let route = app.state.current_route();
    let scroll = app.state.scroll_offset;

    match (route, app.state.form.as_ref()) {
        (Route::Contact | Route::Booking, Some(page)) => {
            let direction = if app.is_narrow() {
                Direction::Vertical
            } else {
                Direction::Horizontal
            };
            let chunks = Layout::default()
                .direction(direction)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(area);
            draw_form(frame, chunks[0], page, app.state.is_form_mode());
            draw_text(frame, chunks[1], page_lines(route), scroll);
        }
        _ => draw_text(frame, area, page_lines(route), scroll),
    }
}

fn draw_text(frame: &mut Frame, area: Rect, lines: Vec<Line<'static>>, scroll: usize) {
    // Stop once the last row is on screen
    let max_scroll = wrapped_height(&lines, area.width).saturating_sub(usize::from(area.height));
    let offset = u16::try_from(scroll.min(max_scroll)).unwrap_or(u16::MAX);
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .scroll((offset, 0));
    frame.render_widget(paragraph, area);
}

/// Copy of `route` as styled lines
pub fn page_lines(route: Route) -> Vec<Line<'static>> {
    match route {
        Route::Home => home_lines(),
        Route::Services => services_lines(),
        Route::About => about_lines(),
        Route::Contact => contact_lines(),
        Route::Booking => booking_lines(),
    }
}

fn home_lines() -> Vec<Line<'static>> {
    let mut lines = hero(&content::HOME_HERO);
    lines.push(Line::from(Span::styled(
        "Press 5 to book a service, 4 to contact us",
        Style::default().fg(Color::Cyan),
    )));
    lines.push(Line::from(""));

    lines.push(heading("Our Services"));
    lines.push(Line::from(content::HOME_SERVICES_INTRO));
    lines.push(Line::from(""));
    for c in content::HOME_SERVICES {
        lines.extend(card(c));
    }

    lines.extend(card(&content::WHY_CHOOSE_US));
    for feature in content::HOME_FEATURES {
        lines.push(check(*feature));
    }
    lines.push(Line::from(""));

    lines.extend(hero(&content::HOME_CTA));
    lines
}

fn services_lines() -> Vec<Line<'static>> {
    let mut lines = hero(&content::SERVICES_HERO);

    for group in content::SERVICE_GROUPS {
        lines.push(heading(group.title));
        lines.push(Line::from(group.description));
        lines.push(Line::from(""));
        for list in group.lists {
            lines.extend(bullets(list));
        }
        if !group.materials.is_empty() {
            lines.push(subheading("Materials"));
            for c in group.materials {
                lines.extend(card(c));
            }
        }
    }

    lines.extend(hero(&content::SERVICES_CTA));
    lines
}

fn about_lines() -> Vec<Line<'static>> {
    let mut lines = hero(&content::ABOUT_HERO);

    lines.push(Line::from(content::ABOUT_INTRO));
    lines.push(Line::from(""));
    for offering in content::ABOUT_OFFERINGS {
        lines.push(bullet(*offering));
    }
    lines.push(Line::from(""));
    for paragraph in content::ABOUT_CLOSING {
        lines.push(Line::from(*paragraph));
        lines.push(Line::from(""));
    }

    let mut stats = Vec::new();
    for stat in content::ABOUT_STATS {
        stats.push(Span::styled(
            stat.number,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
        stats.push(Span::raw(format!(" {}    ", stat.label)));
    }
    lines.push(Line::from(stats));
    lines.push(Line::from(""));

    lines.push(heading("Our Values"));
    for c in content::ABOUT_VALUES {
        lines.extend(card(c));
    }
    for list in content::CERTIFICATIONS {
        lines.extend(bullets(list));
    }

    lines.extend(hero(&content::ABOUT_CTA));
    lines
}

fn contact_lines() -> Vec<Line<'static>> {
    let mut lines = hero(&content::CONTACT_HERO);
    lines.push(Line::from(Span::styled(
        "Press y to copy our phone number",
        Style::default().fg(Color::Cyan),
    )));
    lines.push(Line::from(""));

    for c in content::CONTACT_INFO {
        lines.extend(card(c));
    }
    lines.extend(card(&content::EMERGENCY_SERVICE));
    lines.extend(card(&content::SERVICE_AREA));

    lines.push(heading("Frequently Asked Questions"));
    for faq in content::FAQS {
        lines.push(subheading(faq.question));
        lines.push(Line::from(faq.answer));
        lines.push(Line::from(""));
    }
    lines
}

fn booking_lines() -> Vec<Line<'static>> {
    let mut lines = hero(&content::BOOKING_HERO);
    for c in content::BOOKING_NOTES {
        lines.extend(card(c));
    }
    lines.extend(hero(&content::BOOKING_EMERGENCY));
    lines
}

fn hero(hero: &Hero) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            hero.title,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            hero.subtitle,
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
    ]
}

fn heading(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    ))
}

fn subheading(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default().add_modifier(Modifier::BOLD),
    ))
}

fn card(card: &Card) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        Span::styled("■ ", Style::default().fg(Color::Yellow)),
        Span::styled(card.title, Style::default().add_modifier(Modifier::BOLD)),
    ])];
    lines.extend(card.lines.iter().map(|l| Line::from(format!("  {l}"))));
    lines.push(Line::from(""));
    lines
}

fn bullets(list: &BulletList) -> Vec<Line<'static>> {
    let mut lines = vec![subheading(list.heading)];
    lines.extend(list.items.iter().copied().map(bullet));
    lines.push(Line::from(""));
    lines
}

fn bullet(text: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled("  • ", Style::default().fg(Color::Yellow)),
        Span::raw(text),
    ])
}

fn check(text: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled("  ✓ ", Style::default().fg(Color::Green)),
        Span::raw(text),
    ])
}
