use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;

use crate::ops::registry::breadcrumbs;
use crate::tui::app::App;

use super::helpers::{pad_to, spans_width};

/// Render the header: product name, breadcrumb trail and unread badge
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.panel;
    let mut spans: Vec<Span> = vec![
        Span::styled(
            " docket ",
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("\u{2502} ", Style::default().fg(app.theme.dim).bg(bg)),
    ];

    let crumbs = breadcrumbs(app.session.nav());
    let last = crumbs.len().saturating_sub(1);
    for (i, crumb) in crumbs.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(
                " \u{203A} ",
                Style::default().fg(app.theme.dim).bg(bg),
            ));
        }
        let style = if i == last {
            Style::default().fg(app.theme.text_bright).bg(bg)
        } else {
            Style::default().fg(app.theme.text).bg(bg)
        };
        spans.push(Span::styled(crumb, style));
    }

    // Right-aligned unread notifications badge
    let unread = app.catalog.unread_notifications();
    if unread > 0 {
        let badge = format!(" \u{25CF} {} unread ", unread);
        let width = area.width as usize;
        let used = spans_width(&spans);
        let badge_width = crate::util::text::display_width(&badge);
        if used + badge_width < width {
            spans.push(Span::styled(
                " ".repeat(width - used - badge_width),
                Style::default().bg(bg),
            ));
            spans.push(Span::styled(badge, Style::default().fg(app.theme.yellow).bg(bg)));
        }
    }

    let line = pad_to(spans, area.width as usize, bg);
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
}
