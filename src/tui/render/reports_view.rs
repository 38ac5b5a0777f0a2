use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, ReportRow};

use super::helpers::{pad_to, row_bg};

/// Render report categories, each followed by its reports when open. The
/// cursor moves over categories and open reports alike.
pub fn render_reports(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let cursor = app.list_cursor(app.screen());

    let mut lines: Vec<Line> = vec![Line::from("")];
    let mut cursor_line = 0;
    for (i, row) in app.report_rows().into_iter().enumerate() {
        if matches!(row, ReportRow::Group(g) if g > 0) {
            lines.push(Line::from(""));
        }
        if i == cursor {
            cursor_line = lines.len();
        }
        let row_color = row_bg(app, i == cursor);
        let spans = match row {
            ReportRow::Group(g) => {
                let group = &app.catalog.reports[g];
                let open = app.expanded_reports.contains(&group.category);
                let arrow = if open { "\u{25BE} " } else { "\u{25B8} " };
                vec![
                    Span::styled(format!(" {}", arrow), Style::default().fg(app.theme.dim).bg(row_color)),
                    Span::styled(
                        group.category.clone(),
                        Style::default()
                            .fg(app.theme.highlight)
                            .bg(row_color)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!(" ({})", group.reports.len()),
                        Style::default().fg(app.theme.dim).bg(row_color),
                    ),
                ]
            }
            ReportRow::Report { group, index } => vec![
                Span::styled("     \u{2022} ", Style::default().fg(app.theme.dim).bg(row_color)),
                Span::styled(
                    app.catalog.reports[group].reports[index].clone(),
                    Style::default().fg(app.theme.text_bright).bg(row_color),
                ),
            ],
        };
        lines.push(pad_to(spans, width, row_color));
    }

    // Keep the cursor row on screen
    let scroll = (cursor_line + 1).saturating_sub(area.height as usize) as u16;

    frame.render_widget(
        Paragraph::new(lines)
            .style(Style::default().bg(bg))
            .scroll((scroll, 0)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Screen;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn first_category_starts_open() {
        let mut app = test_app();
        app.session.select_section("reports").unwrap();
        let out = render_to_string(TERM_W, TERM_H, |frame, area| render_reports(frame, &app, area));
        assert!(out.contains(" \u{25BE} Activity Reports (4)"));
        assert!(out.contains("     \u{2022} Productivity Report"));
        assert!(out.contains(" \u{25B8} Route Reports (2)"));
        assert!(!out.contains("Overdue Tasks Report"));
    }

    #[test]
    fn opened_category_lists_its_reports() {
        let mut app = test_app();
        app.session.select_section("reports").unwrap();
        app.toggle_report_group(0);
        app.toggle_report_group(4);
        let out = render_to_string(TERM_W, TERM_H, |frame, area| render_reports(frame, &app, area));
        assert!(out.contains(" \u{25B8} Activity Reports"));
        assert!(!out.contains("Productivity Report"));
        assert!(out.contains("Overdue Tasks Report"));
    }

    #[test]
    fn last_report_scrolled_into_view() {
        let mut app = test_app();
        app.session.select_section("reports").unwrap();
        app.toggle_report_group(4);
        let last = app.report_rows().len() - 1;
        app.list_cursors.insert(Screen::Reports, last);
        let out = render_to_string(TERM_W, 5, |frame, area| render_reports(frame, &app, area));
        assert!(out.contains("Overdue Tasks Report"));
        assert!(!out.contains("Activity Reports"));
    }
}
