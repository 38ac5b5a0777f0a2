use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::text::{fit_to_width, truncate_to_width};

use super::helpers::{pad_to, row_bg};

/// Render notifications, two lines each: title line and message line.
/// Unread ones carry a dot and a bold title.
pub fn render_notifications(frame: &mut Frame, app: &App, area: Rect) {
    let screen = app.screen();
    let cursor = app.list_cursor(screen);
    let width = area.width as usize;
    // Each entry takes three rows (two lines plus a gap)
    let per_page = ((area.height as usize).saturating_sub(1) / 3).max(1);
    let scroll = (cursor + 1).saturating_sub(per_page);

    let mut lines: Vec<Line> = vec![Line::from("")];
    for (i, note) in app
        .catalog
        .notifications
        .iter()
        .enumerate()
        .skip(scroll)
        .take(per_page)
    {
        let bg = row_bg(app, i == cursor);
        let dot = if note.read {
            Span::styled("   ", Style::default().bg(bg))
        } else {
            Span::styled(" \u{25CF} ", Style::default().fg(app.theme.highlight).bg(bg))
        };
        let mut title_style = Style::default().fg(app.theme.text_bright).bg(bg);
        if !note.read {
            title_style = title_style.add_modifier(Modifier::BOLD);
        }
        let title_spans = vec![
            dot,
            Span::styled(fit_to_width(&note.title, 32), title_style),
            Span::styled(
                fit_to_width(note.priority.label(), 8),
                Style::default().fg(app.theme.priority_color(note.priority)).bg(bg),
            ),
            Span::styled(
                fit_to_width(&note.sender, 16),
                Style::default().fg(app.theme.cyan).bg(bg),
            ),
            Span::styled(note.time.clone(), Style::default().fg(app.theme.dim).bg(bg)),
        ];
        lines.push(pad_to(title_spans, width, bg));
        let message = vec![
            Span::styled("   ", Style::default().bg(bg)),
            Span::styled(
                truncate_to_width(&note.message, width.saturating_sub(4)),
                Style::default().fg(app.theme.text).bg(bg),
            ),
        ];
        lines.push(pad_to(message, width, bg));
        lines.push(Line::from(""));
    }

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(app.theme.background)),
        area,
    );
}
