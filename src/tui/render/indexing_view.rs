use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::{App, FORM_ROWS, FormRow};
use crate::util::text::{fit_to_width, truncate_to_width};

use super::helpers::{dim_line, heading, labeled, pad_to, row_bg, tag_spans};

const LABEL_WIDTH: usize = 14;

/// Render the indexing screen: editable form on the left, preview of the
/// uploaded file on the right
pub fn render_indexing_view(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);
    render_form(frame, app, chunks[0]);
    render_preview(frame, app, chunks[1]);
}

fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let draft = app.session.draft();
    let width = area.width as usize;
    let mut lines: Vec<Line> = vec![Line::from(""), heading(app, "Document Details"), Line::from("")];

    for (i, row) in FORM_ROWS.iter().enumerate() {
        let is_cursor = i == app.form_cursor;
        let bg = row_bg(app, is_cursor);
        let (label, required) = match row {
            FormRow::Field(field) => (field.label(), field.is_required()),
            FormRow::Tags => ("Tags", false),
        };
        let marker = if required { "*" } else { " " };
        let mut spans = vec![
            Span::styled(
                format!(" {}", fit_to_width(label, LABEL_WIDTH)),
                Style::default().fg(app.theme.dim).bg(bg),
            ),
            Span::styled(
                format!("{} ", marker),
                Style::default().fg(app.theme.highlight).bg(bg),
            ),
        ];
        match row {
            FormRow::Field(field) => {
                let value = draft.field(*field);
                if value.is_empty() {
                    spans.push(Span::styled("\u{2014}", Style::default().fg(app.theme.dim).bg(bg)));
                } else {
                    let room = width.saturating_sub(LABEL_WIDTH + 4);
                    spans.push(Span::styled(
                        truncate_to_width(value, room),
                        Style::default().fg(app.theme.text_bright).bg(bg),
                    ));
                }
            }
            FormRow::Tags => {
                if draft.tags.is_empty() {
                    spans.push(Span::styled("\u{2014}", Style::default().fg(app.theme.dim).bg(bg)));
                } else {
                    spans.extend(tag_spans(app, &draft.tags, bg));
                }
            }
        }
        lines.push(pad_to(spans, width, bg));
    }

    lines.push(Line::from(""));
    lines.push(dim_line(app, "* required"));

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(app.theme.background)),
        area,
    );
}

fn render_preview(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let draft = app.session.draft();
    let files = app.session.uploaded_files();

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            format!(" {}", draft.file_name),
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )),
        labeled(app, "Size", &draft.file_size, 8),
        Line::from(""),
    ];
    if files.len() > 1 {
        lines.push(dim_line(app, &format!("{} files uploaded:", files.len())));
        for file in files {
            lines.push(Line::from(Span::styled(
                format!("   {}", file.name),
                Style::default().fg(app.theme.text).bg(bg),
            )));
        }
    } else {
        lines.push(dim_line(app, "Preview not available in the terminal."));
    }

    let block = Block::default()
        .title(" Preview ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
