use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::text::fit_to_width;

use super::helpers::heading;

const STAT_WIDTH: usize = 20;

/// Render the dashboard: stat cards in a row, then recent activity
pub fn render_dashboard(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let mut lines: Vec<Line> = vec![Line::from(""), heading(app, "Overview"), Line::from("")];

    // Stat cards: title / value / change, side by side
    let mut titles = vec![Span::styled(" ", Style::default().bg(bg))];
    let mut values = titles.clone();
    let mut changes = titles.clone();
    for stat in &app.catalog.stats {
        titles.push(Span::styled(
            fit_to_width(&stat.title, STAT_WIDTH),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
        values.push(Span::styled(
            fit_to_width(&stat.value, STAT_WIDTH),
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ));
        let change_color = if stat.change.starts_with('-') {
            app.theme.red
        } else {
            app.theme.green
        };
        changes.push(Span::styled(
            fit_to_width(&stat.change, STAT_WIDTH),
            Style::default().fg(change_color).bg(bg),
        ));
    }
    lines.push(Line::from(titles));
    lines.push(Line::from(values));
    lines.push(Line::from(changes));
    lines.push(Line::from(""));

    lines.push(heading(app, "Recent Activity"));
    lines.push(Line::from(""));
    for activity in &app.catalog.activity {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {}", fit_to_width(&activity.action, 22)),
                Style::default().fg(app.theme.text).bg(bg),
            ),
            Span::styled(
                fit_to_width(&activity.document, 28),
                Style::default().fg(app.theme.text_bright).bg(bg),
            ),
            Span::styled(
                fit_to_width(&activity.user, 16),
                Style::default().fg(app.theme.cyan).bg(bg),
            ),
            Span::styled(activity.time.clone(), Style::default().fg(app.theme.dim).bg(bg)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}
