use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::model::Screen;
use crate::tui::app::App;

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    // Center the overlay, leaving some margin
    let overlay_area = centered_rect(60, 80, area);

    // Clear the area behind the overlay
    frame.render_widget(Clear, overlay_area);

    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(" Key Bindings", header_style)));
    lines.push(Line::from(""));

    // Context-sensitive help
    let screen = app.screen();
    match screen {
        Screen::TreeSelection | Screen::UploadSelection => {
            lines.push(Line::from(Span::styled(" Trees", header_style)));
            add_binding(&mut lines, " [ / ]", "Previous / next tree", key_style, desc_style);
            add_binding(&mut lines, " j/k", "Move cursor", key_style, desc_style);
            add_binding(&mut lines, " Space", "Expand / collapse department", key_style, desc_style);
            add_binding(&mut lines, " Enter", "Select department or sub-department", key_style, desc_style);
            if screen == Screen::UploadSelection {
                add_binding(&mut lines, " u", "Choose files to upload", key_style, desc_style);
                add_binding(&mut lines, " s", "Scan a document", key_style, desc_style);
            }
            lines.push(Line::from(""));
        }
        Screen::Indexing => {
            lines.push(Line::from(Span::styled(" Indexing", header_style)));
            add_binding(&mut lines, " j/k", "Move between fields", key_style, desc_style);
            add_binding(&mut lines, " e / Enter", "Edit field", key_style, desc_style);
            add_binding(&mut lines, " t", "Add tag", key_style, desc_style);
            add_binding(&mut lines, " x", "Remove tag", key_style, desc_style);
            add_binding(&mut lines, " n", "Next: review", key_style, desc_style);
            add_binding(&mut lines, " c", "Cancel", key_style, desc_style);
            lines.push(Line::from(""));
        }
        Screen::Review => {
            lines.push(Line::from(Span::styled(" Review", header_style)));
            add_binding(&mut lines, " b", "Back to indexing", key_style, desc_style);
            add_binding(&mut lines, " S", "Save document", key_style, desc_style);
            lines.push(Line::from(""));
        }
        Screen::Instance => {
            lines.push(Line::from(Span::styled(" Saved", header_style)));
            add_binding(&mut lines, " N", "Upload another document", key_style, desc_style);
            lines.push(Line::from(""));
        }
        Screen::Reports => {
            lines.push(Line::from(Span::styled(" Reports", header_style)));
            add_binding(&mut lines, " j/k", "Move cursor", key_style, desc_style);
            add_binding(&mut lines, " Enter / Space", "Open / close category", key_style, desc_style);
            lines.push(Line::from(""));
        }
        _ => {
            lines.push(Line::from(Span::styled(" Lists", header_style)));
            add_binding(&mut lines, " j/k", "Move cursor", key_style, desc_style);
            add_binding(&mut lines, " f", "Toggle favorite", key_style, desc_style);
            lines.push(Line::from(""));
        }
    }

    // Global keys
    lines.push(Line::from(Span::styled(" Global", header_style)));
    add_binding(&mut lines, " 1-8", "Switch section", key_style, desc_style);
    add_binding(&mut lines, " h / Esc", "Home (discards the draft)", key_style, desc_style);
    add_binding(&mut lines, " ?", "Toggle this help", key_style, desc_style);
    add_binding(&mut lines, " q", "Quit", key_style, desc_style);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));

    frame.render_widget(paragraph, overlay_area);
}

fn add_binding<'a>(
    lines: &mut Vec<Line<'a>>,
    key: &'a str,
    desc: &'a str,
    key_style: Style,
    desc_style: Style,
) {
    let key_width = 14;
    let padded_key = format!("{:<width$}", key, width = key_width);
    lines.push(Line::from(vec![
        Span::styled(padded_key, key_style),
        Span::styled(desc, desc_style),
    ]));
}

/// Create a centered rectangle of the given percentage of the parent
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
