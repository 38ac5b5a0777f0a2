use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Screen;
use crate::tui::app::App;
use crate::util::text::fit_to_width;

use super::helpers::pad_to;

/// Render the section list. The selected section is highlighted; counts are
/// shown for notifications (unread) and favorites.
pub fn render_sidebar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.panel;
    let width = area.width as usize;
    let selected = app.session.nav().selected_section.as_str();

    let mut lines: Vec<Line> = vec![Line::from(Span::styled(" ", Style::default().bg(bg)))];
    for (i, section) in Screen::SECTIONS.iter().enumerate() {
        let is_selected = section.key() == selected
            || (selected.is_empty() && *section == Screen::Dashboard);
        let row_bg = if is_selected {
            app.theme.selection_bg
        } else {
            bg
        };
        let marker = if is_selected { "\u{258E}" } else { " " };
        let label_style = if is_selected {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(row_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text).bg(row_bg)
        };

        let count = match section {
            Screen::Notifications => Some(app.catalog.unread_notifications()),
            Screen::Favorites => Some(app.session.favorites().len()),
            _ => None,
        }
        .filter(|&n| n > 0);
        let count_text = count.map(|n| format!("{} ", n)).unwrap_or_default();
        let label_width = width
            .saturating_sub(4)
            .saturating_sub(count_text.len());

        let spans = vec![
            Span::styled(marker, Style::default().fg(app.theme.highlight).bg(row_bg)),
            Span::styled(format!("{} ", i + 1), Style::default().fg(app.theme.dim).bg(row_bg)),
            Span::styled(fit_to_width(section.sidebar_label(), label_width), label_style),
            Span::styled(count_text, Style::default().fg(app.theme.yellow).bg(row_bg)),
        ];
        lines.push(pad_to(spans, width, row_bg));
    }

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}
