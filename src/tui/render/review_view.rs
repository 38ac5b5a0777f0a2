use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::{DocumentDraft, DraftField};
use crate::tui::app::App;

use super::helpers::{dim_line, heading, labeled, tag_spans};

const LABEL_WIDTH: usize = 16;

/// Read-only summary of a draft or a saved document
fn summary_lines<'a>(app: &App, doc: &DocumentDraft) -> Vec<Line<'a>> {
    let bg = app.theme.background;
    let mut lines = Vec::new();
    lines.push(labeled(app, "File", &doc.file_name, LABEL_WIDTH));
    lines.push(labeled(app, "Size", &doc.file_size, LABEL_WIDTH));
    for field in DraftField::ALL {
        let value = doc.field(field);
        let shown = if value.is_empty() { "\u{2014}" } else { value };
        lines.push(labeled(app, field.label(), shown, LABEL_WIDTH));
    }
    let mut tags = vec![Span::styled(
        format!(" {:<width$}", "Tags", width = LABEL_WIDTH),
        Style::default().fg(app.theme.dim).bg(bg),
    )];
    if doc.tags.is_empty() {
        tags.push(Span::styled("\u{2014}", Style::default().fg(app.theme.dim).bg(bg)));
    } else {
        tags.extend(tag_spans(app, &doc.tags, bg));
    }
    lines.push(Line::from(tags));
    lines
}

/// Render the review screen: everything entered so far, read-only
pub fn render_review_view(frame: &mut Frame, app: &App, area: Rect) {
    let draft = app.session.draft();
    let mut lines: Vec<Line> = vec![Line::from(""), heading(app, "Review Document"), Line::from("")];
    lines.extend(summary_lines(app, draft));
    lines.push(Line::from(""));

    let missing: Vec<&str> = DraftField::ALL
        .iter()
        .filter(|f| f.is_required() && draft.field(**f).is_empty())
        .map(|f| f.label())
        .collect();
    if !missing.is_empty() {
        lines.push(Line::from(Span::styled(
            format!(" Missing: {}", missing.join(", ")),
            Style::default().fg(app.theme.yellow).bg(app.theme.background),
        )));
    }
    lines.push(dim_line(app, "S to save, b to go back and edit."));

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(app.theme.background)),
        area,
    );
}

/// Render the saved-document screen for the most recent instance
pub fn render_instance_view(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let mut lines: Vec<Line> = vec![Line::from("")];

    match app.session.last_instance() {
        Some(instance) => {
            lines.push(Line::from(vec![
                Span::styled(" \u{2714} ", Style::default().fg(app.theme.green).bg(bg)),
                Span::styled(
                    format!("Document saved as {}", instance.id()),
                    Style::default()
                        .fg(app.theme.text_bright)
                        .bg(bg)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(labeled(
                app,
                "Created",
                &instance.created().format("%Y-%m-%d %H:%M UTC").to_string(),
                LABEL_WIDTH,
            ));
            lines.push(Line::from(""));
            lines.extend(summary_lines(app, instance.document()));
        }
        None => lines.push(dim_line(app, "No document saved yet.")),
    }
    lines.push(Line::from(""));
    lines.push(dim_line(app, "N to upload another document, h for home."));

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}
