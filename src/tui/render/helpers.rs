use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::app::App;
use crate::util::text;

/// Compute total display width of a slice of spans
pub(super) fn spans_width(spans: &[Span]) -> usize {
    spans
        .iter()
        .map(|s| text::display_width(&s.content))
        .sum()
}

/// Pad `spans` with `bg` out to `width` cells
pub(super) fn pad_to<'a>(mut spans: Vec<Span<'a>>, width: usize, bg: Color) -> Line<'a> {
    let used = spans_width(&spans);
    if used < width {
        spans.push(Span::styled(" ".repeat(width - used), Style::default().bg(bg)));
    }
    Line::from(spans)
}

/// Background for a list row
pub(super) fn row_bg(app: &App, is_cursor: bool) -> Color {
    if is_cursor {
        app.theme.selection_bg
    } else {
        app.theme.background
    }
}

/// Bold bright heading line with a leading space
pub(super) fn heading<'a>(app: &App, title: &str) -> Line<'a> {
    Line::from(Span::styled(
        format!(" {}", title),
        Style::default()
            .fg(app.theme.text_bright)
            .bg(app.theme.background)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Dim single-line paragraph text, used for empty states and hints
pub(super) fn dim_line<'a>(app: &App, text: &str) -> Line<'a> {
    Line::from(Span::styled(
        format!(" {}", text),
        Style::default().fg(app.theme.dim).bg(app.theme.background),
    ))
}

/// `key value` pair with the label dimmed and padded to `label_width`
pub(super) fn labeled<'a>(app: &App, label: &str, value: &str, label_width: usize) -> Line<'a> {
    let bg = app.theme.background;
    Line::from(vec![
        Span::styled(
            format!(" {}", text::fit_to_width(label, label_width)),
            Style::default().fg(app.theme.dim).bg(bg),
        ),
        Span::styled(value.to_string(), Style::default().fg(app.theme.text).bg(bg)),
    ])
}

/// Tags as `#tag` spans in their configured colors
pub(super) fn tag_spans<'a>(app: &App, tags: &[String], bg: Color) -> Vec<Span<'a>> {
    let mut spans = Vec::new();
    for (i, tag) in tags.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" ", Style::default().bg(bg)));
        }
        spans.push(Span::styled(
            format!("#{}", tag),
            Style::default().fg(app.theme.tag_color(tag)).bg(bg),
        ));
    }
    spans
}
