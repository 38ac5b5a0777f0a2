use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

use super::helpers::{pad_to, spans_width};

/// Render the indexing action bar: cancel on the left, next on the right
pub fn render_action_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.panel;
    let width = area.width as usize;
    let mut spans = vec![Span::styled(
        " [c] Cancel",
        Style::default().fg(app.theme.text).bg(bg),
    )];
    let next = "[n] Next \u{25B8} ";
    let used = spans_width(&spans);
    let next_width = crate::util::text::display_width(next);
    if used + next_width < width {
        spans.push(Span::styled(
            " ".repeat(width - used - next_width),
            Style::default().bg(bg),
        ));
    }
    spans.push(Span::styled(
        next,
        Style::default()
            .fg(app.theme.text_bright)
            .bg(app.theme.highlight)
            .add_modifier(Modifier::BOLD),
    ));
    let line = pad_to(spans, width, bg);
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
}
