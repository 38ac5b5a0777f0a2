use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::{DocumentId, Screen};
use crate::tui::app::App;
use crate::util::text::fit_to_width;

use super::helpers::{dim_line, pad_to, row_bg};

const TITLE_WIDTH: usize = 34;

/// Trailing columns for one document row on a given list screen
fn detail_columns<'a>(app: &App, screen: Screen, id: DocumentId, bg: ratatui::style::Color) -> Vec<Span<'a>> {
    let dim = Style::default().fg(app.theme.dim).bg(bg);
    match screen {
        Screen::Inbox => {
            let Some(entry) = app.catalog.inbox.iter().find(|e| e.id == id) else {
                return Vec::new();
            };
            vec![
                Span::styled(fit_to_width(&entry.sender, 16), Style::default().fg(app.theme.text).bg(bg)),
                Span::styled(
                    fit_to_width(&entry.status, 10),
                    Style::default().fg(app.theme.status_color(&entry.status)).bg(bg),
                ),
                Span::styled(
                    entry.priority.label(),
                    Style::default().fg(app.theme.priority_color(entry.priority)).bg(bg),
                ),
            ]
        }
        Screen::Outbox => {
            let Some(entry) = app.catalog.outbox.iter().find(|e| e.id == id) else {
                return Vec::new();
            };
            vec![
                Span::styled(fit_to_width(&entry.recipient, 18), Style::default().fg(app.theme.text).bg(bg)),
                Span::styled(
                    entry.delivery.clone(),
                    Style::default().fg(app.theme.status_color(&entry.delivery)).bg(bg),
                ),
            ]
        }
        Screen::Recent => {
            let Some(entry) = app.catalog.recent.iter().find(|e| e.id == id) else {
                return Vec::new();
            };
            vec![
                Span::styled(fit_to_width(&entry.last_viewed, 13), dim),
                Span::styled(fit_to_width(&format!("{} views", entry.view_count), 10), dim),
                Span::styled(entry.size.clone(), dim),
            ]
        }
        _ => {
            let Some(doc) = app.catalog.document(id) else {
                return Vec::new();
            };
            vec![
                Span::styled(fit_to_width(&doc.department, 12), Style::default().fg(app.theme.text).bg(bg)),
                Span::styled(doc.date.clone(), dim),
            ]
        }
    }
}

/// Render a document list (inbox, outbox, recent, favorites). A star marks
/// favorites; the cursor row is highlighted.
pub fn render_document_list(frame: &mut Frame, app: &App, area: Rect) {
    let screen = app.screen();
    let ids = app.list_ids(screen);
    let width = area.width as usize;

    if ids.is_empty() {
        let text = match screen {
            Screen::Favorites => "No favorites yet. Press f on any document to add one.",
            _ => "Nothing here",
        };
        let empty = Paragraph::new(vec![Line::from(""), dim_line(app, text)])
            .style(Style::default().bg(app.theme.background));
        frame.render_widget(empty, area);
        return;
    }

    let cursor = app.list_cursor(screen);
    let visible = (area.height as usize).saturating_sub(1);
    let scroll = (cursor + 1).saturating_sub(visible);

    let mut lines: Vec<Line> = vec![Line::from("")];
    for (i, &id) in ids.iter().enumerate().skip(scroll).take(visible) {
        let Some(doc) = app.catalog.document(id) else {
            continue;
        };
        let is_cursor = i == cursor;
        let bg = row_bg(app, is_cursor);
        let star = if app.session.favorites().is_favorite(id) {
            Span::styled(" \u{2605} ", Style::default().fg(app.theme.yellow).bg(bg))
        } else {
            Span::styled("   ", Style::default().bg(bg))
        };
        let title_style = if is_cursor {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text_bright).bg(bg)
        };

        let mut spans = vec![
            star,
            Span::styled(fit_to_width(&doc.title, TITLE_WIDTH), title_style),
            Span::styled(
                fit_to_width(&doc.kind, 14),
                Style::default().fg(app.theme.dim).bg(bg),
            ),
        ];
        spans.extend(detail_columns(app, screen, id, bg));
        lines.push(pad_to(spans, width, bg));
    }

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(app.theme.background)),
        area,
    );
}
