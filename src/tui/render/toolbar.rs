use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;

use crate::model::Screen;
use crate::tui::app::App;

use super::helpers::{pad_to, spans_width};

/// Key hints relevant to a screen, shown at the right of the toolbar
pub fn screen_hints(screen: Screen) -> &'static str {
    match screen {
        Screen::Dashboard => "",
        Screen::Inbox | Screen::Outbox | Screen::Recent | Screen::Favorites => {
            "j/k move  f favorite"
        }
        Screen::Notifications => "j/k move",
        Screen::Reports => "j/k move  Enter open/close",
        Screen::TreeSelection => "[/] tree  Space expand  Enter select",
        Screen::UploadSelection => "u upload  s scan  Enter select",
        Screen::Indexing => "e edit  t tag  x untag  n next",
        Screen::Review => "b back  S save",
        Screen::Instance => "N new document",
    }
}

/// Render the toolbar: back-to-home affordance, screen title, key hints
pub fn render_toolbar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let screen = app.screen();
    let mut spans: Vec<Span> = vec![
        Span::styled(" \u{25C2} Home ", Style::default().fg(app.theme.dim).bg(bg)),
        Span::styled("\u{2502} ", Style::default().fg(app.theme.dim).bg(bg)),
        Span::styled(
            screen.title(),
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    let hints = screen_hints(screen);
    let width = area.width as usize;
    let used = spans_width(&spans);
    let hint_width = crate::util::text::display_width(hints) + 1;
    if !hints.is_empty() && app.config.ui.show_key_hints && used + hint_width < width {
        spans.push(Span::styled(
            " ".repeat(width - used - hint_width),
            Style::default().bg(bg),
        ));
        spans.push(Span::styled(hints, Style::default().fg(app.theme.dim).bg(bg)));
    }

    let line = pad_to(spans, width, bg);
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn title_and_home() {
        let mut app = test_app();
        app.session.select_section("outbox").unwrap();
        let out = render_to_string(TERM_W, 1, |frame, area| render_toolbar(frame, &app, area));
        assert_eq!(out, " \u{25C2} Home \u{2502} Document Outbox");
    }

    #[test]
    fn hints_when_enabled() {
        let mut app = test_app();
        app.config.ui.show_key_hints = true;
        app.session.select_section("favorites").unwrap();
        let out = render_to_string(TERM_W, 1, |frame, area| render_toolbar(frame, &app, area));
        assert!(out.ends_with("j/k move  f favorite"));
    }
}
