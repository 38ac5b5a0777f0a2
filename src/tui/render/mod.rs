pub mod action_bar;
pub mod dashboard;
pub mod document_list;
pub mod header;
pub mod help_overlay;
mod helpers;
pub mod indexing_view;
pub mod notifications_view;
pub mod reports_view;
pub mod review_view;
pub mod sidebar;
pub mod status_row;
pub mod toolbar;
pub mod tree_panel;
pub mod trees_view;
pub mod upload_view;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;

use crate::model::Screen;
use crate::ops::registry::view_spec;

use super::app::App;

pub const SIDEBAR_WIDTH: u16 = 22;
pub const TREE_PANEL_WIDTH: u16 = 30;

/// Main render function: chrome from the view registry, then the screen
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    let spec = view_spec(app.screen());

    // Layout: header | toolbar? | body | action bar? | status row
    let mut constraints = vec![Constraint::Length(1)];
    if spec.toolbar {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Min(1));
    if spec.action_bar {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Length(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut next = 0;
    header::render_header(frame, app, chunks[next]);
    next += 1;
    if spec.toolbar {
        toolbar::render_toolbar(frame, app, chunks[next]);
        next += 1;
    }
    let body = chunks[next];
    next += 1;
    if spec.action_bar {
        action_bar::render_action_bar(frame, app, chunks[next]);
        next += 1;
    }
    status_row::render_status_row(frame, app, chunks[next]);

    render_body(frame, app, body, spec.sidebar);

    // Help overlay (rendered on top of everything)
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }
}

/// Sidebar and tree panel on the left, the active screen in the rest
fn render_body(frame: &mut Frame, app: &App, area: Rect, sidebar: bool) {
    let show_tree_panel = app.tree_panel_visible();

    let mut constraints = Vec::new();
    if sidebar {
        constraints.push(Constraint::Length(SIDEBAR_WIDTH));
    }
    if show_tree_panel {
        constraints.push(Constraint::Length(TREE_PANEL_WIDTH));
    }
    constraints.push(Constraint::Min(1));

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    let mut next = 0;
    if sidebar {
        sidebar::render_sidebar(frame, app, chunks[next]);
        next += 1;
    }
    if show_tree_panel {
        tree_panel::render_tree_panel(frame, app, chunks[next]);
        next += 1;
    }
    render_content(frame, app, chunks[next]);
}

fn render_content(frame: &mut Frame, app: &App, area: Rect) {
    match app.screen() {
        Screen::Dashboard => dashboard::render_dashboard(frame, app, area),
        Screen::Inbox | Screen::Outbox | Screen::Recent | Screen::Favorites => {
            document_list::render_document_list(frame, app, area)
        }
        Screen::Notifications => notifications_view::render_notifications(frame, app, area),
        Screen::Reports => reports_view::render_reports(frame, app, area),
        Screen::TreeSelection => trees_view::render_trees_view(frame, app, area),
        Screen::UploadSelection => upload_view::render_upload_view(frame, app, area),
        Screen::Indexing => indexing_view::render_indexing_view(frame, app, area),
        Screen::Review => review_view::render_review_view(frame, app, area),
        Screen::Instance => review_view::render_instance_view(frame, app, area),
    }
}
