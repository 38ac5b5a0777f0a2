use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::model::{AppConfig, Catalog};
use crate::tui::app::App;

pub const TERM_W: u16 = 100;
pub const TERM_H: u16 = 30;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// An app on the dashboard with default config and sample data.
pub fn test_app() -> App {
    App::new(AppConfig::default(), Catalog::sample())
}

/// An app on the upload screen for `dept` / `sub` in the departments tree.
pub fn app_at_upload(dept: &str, sub: &str) -> App {
    let mut app = test_app();
    app.session.select_section("trees").unwrap();
    app.session.select_tree("departments").unwrap();
    app.session.toggle_department(dept).unwrap();
    app.session.select_department(dept).unwrap();
    app.session.select_sub_department(sub).unwrap();
    app
}
