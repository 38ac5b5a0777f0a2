use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

use super::helpers::{dim_line, heading, labeled};

/// Render the upload screen: destination, accepted types and the two ways
/// in (file prompt or scan), with a countdown while a scan is pending
pub fn render_upload_view(frame: &mut Frame, app: &App, area: Rect) {
    render_upload_view_at(frame, app, area, Instant::now());
}

pub(super) fn render_upload_view_at(frame: &mut Frame, app: &App, area: Rect, now: Instant) {
    let bg = app.theme.background;
    let nav = app.session.nav();
    let mut lines: Vec<Line> = vec![Line::from(""), heading(app, "Upload Document"), Line::from("")];

    lines.push(labeled(
        app,
        "Department",
        nav.selected_department.as_deref().unwrap_or("-"),
        16,
    ));
    lines.push(labeled(
        app,
        "Sub-department",
        nav.selected_sub_department.as_deref().unwrap_or("-"),
        16,
    ));
    let accept = app
        .session
        .accept()
        .iter()
        .map(|ext| format!(".{}", ext))
        .collect::<Vec<_>>()
        .join(" ");
    lines.push(labeled(app, "Accepted", &accept, 16));
    lines.push(Line::from(""));

    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    lines.push(Line::from(vec![
        Span::styled(" u ", key_style),
        Span::styled("Choose files", desc_style),
    ]));
    lines.push(Line::from(vec![
        Span::styled(" s ", key_style),
        Span::styled("Scan a document", desc_style),
    ]));
    lines.push(Line::from(""));

    if let Some(remaining) = app.session.scan_remaining(now) {
        let secs = remaining.as_secs_f32();
        lines.push(Line::from(Span::styled(
            format!(" Scanning\u{2026} {:.1}s", secs),
            Style::default().fg(app.theme.yellow).bg(bg),
        )));
    } else {
        lines.push(dim_line(app, "Files are indexed on the next screen."));
    }

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn destination_and_accepted_types() {
        let app = app_at_upload("Marketing", "Campaigns");
        let out = render_to_string(TERM_W, 16, |frame, area| render_upload_view(frame, &app, area));
        assert!(out.contains("Department      Marketing"));
        assert!(out.contains("Sub-department  Campaigns"));
        assert!(out.contains(".pdf .doc .docx .jpg .jpeg .png .tiff"));
        assert!(out.contains("Files are indexed on the next screen."));
    }

    #[test]
    fn pending_scan_countdown() {
        let mut app = app_at_upload("Marketing", "Campaigns");
        let t0 = Instant::now();
        app.session.start_scan(t0).unwrap();
        let out = render_to_string(TERM_W, 16, |frame, area| {
            render_upload_view_at(frame, &app, area, t0 + Duration::from_millis(500))
        });
        assert!(out.contains("Scanning\u{2026} 1.5s"));
    }
}
