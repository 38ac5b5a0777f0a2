use crossterm::event::{KeyCode, KeyEvent};

use crate::model::Screen;
use crate::tui::app::{App, ReportRow};

use super::*;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Help overlay swallows everything except its own toggles
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
            app.show_help = false;
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('h') | KeyCode::Esc => go_home(app),
        KeyCode::Char(c @ '1'..='8') => {
            let idx = (c as u8 - b'1') as usize;
            let key = Screen::SECTIONS[idx].key();
            let result = app.session.select_section(key);
            app.report(result);
        }
        KeyCode::Char('j') | KeyCode::Down => move_cursor(app, 1),
        KeyCode::Char('k') | KeyCode::Up => move_cursor(app, -1),
        KeyCode::Char('[') => cycle_tree(app, -1),
        KeyCode::Char(']') => cycle_tree(app, 1),
        KeyCode::Char(' ') if app.screen() == Screen::Reports => toggle_report_at_cursor(app),
        KeyCode::Char(' ') => toggle_tree_row(app),
        KeyCode::Enter => activate(app),
        KeyCode::Char('f') => toggle_favorite_at_cursor(app),
        KeyCode::Char('c') => app.session.cancel(),
        _ => handle_pipeline_key(app, key),
    }
}

fn go_home(app: &mut App) {
    app.session.go_home();
    app.tree_cursor = 0;
    app.form_cursor = 0;
    app.error = None;
}

/// Move whichever cursor the active screen owns
fn move_cursor(app: &mut App, delta: isize) {
    let screen = app.screen();
    match screen {
        Screen::TreeSelection | Screen::UploadSelection => {
            let len = app.tree_rows().len();
            app.tree_cursor = step(app.tree_cursor, delta, len);
        }
        Screen::Indexing => {
            app.form_cursor = step(app.form_cursor, delta, crate::tui::app::FORM_ROWS.len());
        }
        _ => {
            let len = app.list_len(screen);
            let current = app.list_cursor(screen);
            app.list_cursors.insert(screen, step(current, delta, len));
        }
    }
}

fn step(cursor: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    cursor.saturating_add_signed(delta).min(len - 1)
}

fn activate(app: &mut App) {
    match app.screen() {
        Screen::TreeSelection | Screen::UploadSelection => activate_tree_row(app),
        Screen::Indexing => edit_form_row(app),
        Screen::Reports => toggle_report_at_cursor(app),
        _ => {}
    }
}

/// Open or close the category under the cursor. From a report row the
/// cursor lands back on its category.
fn toggle_report_at_cursor(app: &mut App) {
    let cursor = app.list_cursor(Screen::Reports);
    let Some(row) = app.report_rows().get(cursor).copied() else {
        return;
    };
    let group = row.group();
    if !app.toggle_report_group(group) {
        if let Some(pos) = app.report_rows().iter().position(|r| *r == ReportRow::Group(group)) {
            app.list_cursors.insert(Screen::Reports, pos);
        }
    }
}

fn toggle_favorite_at_cursor(app: &mut App) {
    let screen = app.screen();
    let ids = app.list_ids(screen);
    if let Some(&id) = ids.get(app.list_cursor(screen)) {
        app.session.toggle_favorite(id);
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_keys::*;
    use crate::model::DocumentId;
    use crate::tui::app::STATUS_TTL;
    use std::time::Instant;

    use super::*;

    #[test]
    fn number_keys_select_sections() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.screen(), Screen::Inbox);
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.screen(), Screen::TreeSelection);
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.screen(), Screen::Dashboard);
    }

    #[test]
    fn report_categories_open_and_close() {
        let mut app = app();
        press(&mut app, KeyCode::Char('8'));
        assert_eq!(app.list_len(Screen::Reports), 9);

        // Close Activity Reports from one of its reports
        chars(&mut app, "jj ");
        assert!(!app.expanded_reports.contains("Activity Reports"));
        assert_eq!(app.list_cursor(Screen::Reports), 0);
        assert_eq!(app.list_len(Screen::Reports), 5);

        // Open Route Reports with Enter
        chars(&mut app, "jjjj");
        press(&mut app, KeyCode::Enter);
        assert!(app.expanded_reports.contains("Route Reports"));
        assert_eq!(app.list_len(Screen::Reports), 7);
        assert_eq!(app.list_cursor(Screen::Reports), 4);
    }

    #[test]
    fn esc_goes_home() {
        let mut app = app();
        press(&mut app, KeyCode::Char('6'));
        assert_eq!(app.screen(), Screen::Notifications);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.screen(), Screen::Dashboard);
    }

    #[test]
    fn list_cursor_stops_at_ends() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        chars(&mut app, "jjjj");
        assert_eq!(app.list_cursor(Screen::Outbox), 1);
        chars(&mut app, "kkk");
        assert_eq!(app.list_cursor(Screen::Outbox), 0);
    }

    #[test]
    fn f_toggles_favorite_under_cursor() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('f'));
        assert!(app.session.favorites().is_favorite(DocumentId(2)));

        let notice = app.session.notifier().current(Instant::now()).unwrap();
        assert_eq!(notice.text, "Added to favorites");
        assert!(app.session.notifier().current(Instant::now() + STATUS_TTL).is_none());
    }

    #[test]
    fn unfavoriting_shrinks_favorites_list() {
        let mut app = app();
        press(&mut app, KeyCode::Char('7'));
        assert_eq!(app.list_len(Screen::Favorites), 2);
        press(&mut app, KeyCode::Char('f'));
        assert_eq!(app.list_len(Screen::Favorites), 1);
        assert!(!app.session.favorites().is_favorite(DocumentId(1)));
    }

    #[test]
    fn help_overlay_swallows_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.screen(), Screen::Dashboard);
        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
    }

    #[test]
    fn q_quits() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
