use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::text::display_width;

use super::helpers::pad_to;

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    render_status_row_at(frame, app, area, Instant::now());
}

pub(super) fn render_status_row_at(frame: &mut Frame, app: &App, area: Rect, now: Instant) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = match (app.mode, &app.prompt) {
        (Mode::Prompt, Some(prompt)) => {
            // label: text▌ with the cursor drawn at its byte offset
            let (before, after) = prompt.buffer.split_at(prompt.cursor.min(prompt.buffer.len()));
            let mut spans = vec![
                Span::styled(
                    format!(" {}: ", prompt.kind.label()),
                    Style::default().fg(app.theme.dim).bg(bg),
                ),
                Span::styled(before.to_string(), Style::default().fg(app.theme.text_bright).bg(bg)),
                Span::styled("\u{258C}", Style::default().fg(app.theme.highlight).bg(bg)),
                Span::styled(after.to_string(), Style::default().fg(app.theme.text_bright).bg(bg)),
            ];
            let hint = "Enter confirm  Esc cancel";
            let used: usize = spans.iter().map(|s| display_width(&s.content)).sum();
            if used + display_width(hint) < width {
                spans.push(Span::styled(
                    " ".repeat(width - used - display_width(hint)),
                    Style::default().bg(bg),
                ));
                spans.push(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
            }
            Line::from(spans)
        }
        _ => {
            if let Some(error) = app.current_error(now) {
                pad_to(
                    vec![Span::styled(
                        format!(" {}", error),
                        Style::default().fg(app.theme.red).bg(bg),
                    )],
                    width,
                    bg,
                )
            } else if let Some(notice) = app.session.notifier().current(now) {
                pad_to(
                    vec![Span::styled(
                        format!(" {}", notice.text),
                        Style::default().fg(app.theme.notice_color(notice.level)).bg(bg),
                    )],
                    width,
                    bg,
                )
            } else {
                // Empty in navigate mode, apart from the help hint
                let hint = "? help";
                let mut spans = Vec::new();
                if width > display_width(hint) {
                    spans.push(Span::styled(
                        " ".repeat(width - display_width(hint) - 1),
                        Style::default().bg(bg),
                    ));
                    spans.push(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
                }
                pad_to(spans, width, bg)
            }
        }
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DocumentId;
    use crate::tui::app::{Prompt, PromptKind, STATUS_TTL};
    use crate::tui::render::test_helpers::*;

    fn row(app: &App, now: Instant) -> String {
        render_to_string(TERM_W, 1, |frame, area| render_status_row_at(frame, app, area, now))
    }

    #[test]
    fn idle_shows_help_hint() {
        let app = test_app();
        assert!(row(&app, Instant::now()).ends_with("? help"));
    }

    #[test]
    fn notice_then_expiry() {
        let mut app = test_app();
        app.session.toggle_favorite(DocumentId(7));
        let now = Instant::now();
        assert_eq!(row(&app, now), " Added to favorites");
        assert!(row(&app, now + STATUS_TTL).ends_with("? help"));
    }

    #[test]
    fn error_wins_over_notice() {
        let mut app = test_app();
        app.session.toggle_favorite(DocumentId(7));
        let result = app.session.next();
        app.report(result);
        assert_eq!(
            row(&app, Instant::now()),
            " cannot go from dashboard to review"
        );
    }

    #[test]
    fn prompt_with_cursor() {
        let mut app = test_app();
        let mut prompt = Prompt::new(PromptKind::AddTag, "budget");
        prompt.cursor = 3;
        app.prompt = Some(prompt);
        app.mode = Mode::Prompt;
        let out = row(&app, Instant::now());
        assert!(out.starts_with(" add tag: bud\u{258C}get"));
        assert!(out.ends_with("Esc cancel"));
    }
}
