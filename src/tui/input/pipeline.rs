use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};

use crate::model::Screen;
use crate::tui::app::{App, FormRow, Mode, Prompt, PromptKind};

/// Keys for the upload → indexing → review → instance pipeline
pub(super) fn handle_pipeline_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('u') => {
            if app.screen() == Screen::UploadSelection {
                open_prompt(app, PromptKind::Files, "");
            }
        }
        KeyCode::Char('s') => {
            let result = app.session.start_scan(Instant::now());
            app.report(result);
        }
        KeyCode::Char('e') => edit_form_row(app),
        KeyCode::Char('t') => {
            if app.screen() == Screen::Indexing {
                open_prompt(app, PromptKind::AddTag, "");
            }
        }
        KeyCode::Char('x') => {
            if app.screen() == Screen::Indexing {
                open_prompt(app, PromptKind::RemoveTag, "");
            }
        }
        KeyCode::Char('n') => {
            let result = app.session.next();
            app.report(result);
        }
        KeyCode::Char('b') => {
            let result = app.session.back();
            app.report(result);
        }
        KeyCode::Char('S') => {
            let result = app.session.save(chrono::Utc::now()).map(|_| ());
            app.report(result);
        }
        KeyCode::Char('N') => {
            let result = app.session.new_document();
            if app.report(result).is_some() {
                app.form_cursor = 0;
            }
        }
        _ => {}
    }
}

/// Open the prompt for the form row under the cursor, prefilled with the
/// current value
pub(super) fn edit_form_row(app: &mut App) {
    if app.screen() != Screen::Indexing {
        return;
    }
    match app.form_row() {
        FormRow::Field(field) => {
            let current = app.session.draft().field(field).to_string();
            open_prompt(app, PromptKind::Field(field), &current);
        }
        FormRow::Tags => open_prompt(app, PromptKind::AddTag, ""),
    }
}

pub(super) fn open_prompt(app: &mut App, kind: PromptKind, initial: &str) {
    app.prompt = Some(Prompt::new(kind, initial));
    app.mode = Mode::Prompt;
}
