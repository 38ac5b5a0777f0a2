use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

use super::helpers::{dim_line, heading, labeled};

/// Content area of the trees section: what is selected so far and what to
/// do next
pub fn render_trees_view(frame: &mut Frame, app: &App, area: Rect) {
    let nav = app.session.nav();
    let mut lines: Vec<Line> = vec![Line::from(""), heading(app, "Document Trees"), Line::from("")];

    match (&nav.selected_tree, &nav.selected_department) {
        (None, _) => {
            lines.push(dim_line(app, "Choose a tree to browse its departments."));
            lines.push(Line::from(""));
            for name in app.tree_names() {
                let departments = app.config.tree(name).map_or(0, |t| t.len());
                lines.push(labeled(app, name, &format!("{} departments", departments), 16));
            }
        }
        (Some(tree), None) => {
            lines.push(labeled(app, "Tree", tree, 14));
            lines.push(Line::from(""));
            lines.push(dim_line(app, "Select a department, then a sub-department to upload into."));
        }
        (Some(tree), Some(dept)) => {
            lines.push(labeled(app, "Tree", tree, 14));
            lines.push(labeled(app, "Department", dept, 14));
            lines.push(Line::from(""));
            lines.push(dim_line(app, "Select a sub-department to upload into."));
        }
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, area);
}
