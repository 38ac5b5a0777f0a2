use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, TreeRow};
use crate::util::text::truncate_to_width;

use super::helpers::{dim_line, pad_to};

/// Render the tree panel: tree tabs on top, then departments with the
/// sub-departments of expanded ones indented below.
pub fn render_tree_panel(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let nav = app.session.nav();

    let mut lines: Vec<Line> = Vec::new();

    // Tree tabs
    let mut tabs: Vec<Span> = vec![Span::styled(" ", Style::default().bg(bg))];
    for name in app.tree_names() {
        let current = nav.selected_tree.as_deref() == Some(name);
        let style = if current {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.selection_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.dim).bg(bg)
        };
        tabs.push(Span::styled(format!(" {} ", name), style));
    }
    lines.push(pad_to(tabs, width, bg));
    lines.push(Line::from(""));

    if nav.selected_tree.is_none() {
        lines.push(dim_line(app, "Press ] to pick a tree"));
        frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
        return;
    }

    let rows = app.tree_rows();
    // Scroll so the cursor stays visible below the two header lines
    let visible = (area.height as usize).saturating_sub(2);
    let scroll = (app.tree_cursor + 1).saturating_sub(visible);

    for (i, row) in rows.iter().enumerate().skip(scroll).take(visible) {
        let is_cursor = i == app.tree_cursor;
        let row_bg = if is_cursor { app.theme.selection_bg } else { bg };
        let spans = match row {
            TreeRow::Department(dept) => {
                let arrow = if nav.is_expanded(dept) {
                    "\u{25BE}"
                } else {
                    "\u{25B8}"
                };
                let selected = nav.selected_department.as_deref() == Some(dept.as_str());
                let style = if selected {
                    Style::default()
                        .fg(app.theme.highlight)
                        .bg(row_bg)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(app.theme.text_bright).bg(row_bg)
                };
                vec![
                    Span::styled(format!(" {} ", arrow), Style::default().fg(app.theme.dim).bg(row_bg)),
                    Span::styled(truncate_to_width(dept, width.saturating_sub(4)), style),
                ]
            }
            TreeRow::SubDepartment { department, name } => {
                let selected = nav.selected_department.as_deref() == Some(department.as_str())
                    && nav.selected_sub_department.as_deref() == Some(name.as_str());
                let style = if selected {
                    Style::default().fg(app.theme.highlight).bg(row_bg)
                } else {
                    Style::default().fg(app.theme.text).bg(row_bg)
                };
                vec![
                    Span::styled("     ", Style::default().bg(row_bg)),
                    Span::styled(truncate_to_width(name, width.saturating_sub(6)), style),
                ]
            }
        };
        lines.push(pad_to(spans, width, row_bg));
    }

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}
