use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::io::files::PathFileSource;
use crate::tui::app::{App, Mode, PromptKind};
use crate::util::text::{next_grapheme_boundary, prev_grapheme_boundary};

pub(super) fn handle_prompt(app: &mut App, key: KeyEvent) {
    let Some(prompt) = app.prompt.as_mut() else {
        app.mode = Mode::Navigate;
        return;
    };

    match key.code {
        KeyCode::Esc => {
            close_prompt(app);
            app.session.cancel();
        }
        KeyCode::Enter => submit(app),
        KeyCode::Backspace => {
            if let Some(prev) = prev_grapheme_boundary(&prompt.buffer, prompt.cursor) {
                prompt.buffer.replace_range(prev..prompt.cursor, "");
                prompt.cursor = prev;
            }
        }
        KeyCode::Delete => {
            if let Some(next) = next_grapheme_boundary(&prompt.buffer, prompt.cursor) {
                prompt.buffer.replace_range(prompt.cursor..next, "");
            }
        }
        KeyCode::Left => {
            if let Some(prev) = prev_grapheme_boundary(&prompt.buffer, prompt.cursor) {
                prompt.cursor = prev;
            }
        }
        KeyCode::Right => {
            if let Some(next) = next_grapheme_boundary(&prompt.buffer, prompt.cursor) {
                prompt.cursor = next;
            }
        }
        KeyCode::Home => prompt.cursor = 0,
        KeyCode::End => prompt.cursor = prompt.buffer.len(),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            prompt.buffer.replace_range(..prompt.cursor, "");
            prompt.cursor = 0;
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            prompt.buffer.insert(prompt.cursor, c);
            prompt.cursor += c.len_utf8();
        }
        _ => {}
    }
}

fn close_prompt(app: &mut App) {
    app.prompt = None;
    app.mode = Mode::Navigate;
}

fn submit(app: &mut App) {
    let Some(prompt) = app.prompt.take() else {
        return;
    };
    app.mode = Mode::Navigate;
    let value = prompt.buffer;
    match prompt.kind {
        PromptKind::Files => {
            let source = PathFileSource::from_input(&value);
            let result = app.session.choose_files(&source);
            if app.report(result).is_some() {
                app.form_cursor = 0;
            }
        }
        PromptKind::Field(field) => {
            let result = app.session.update_field(field, &value);
            app.report(result);
        }
        PromptKind::AddTag => {
            let result = app.session.add_tag(&value);
            app.report(result);
        }
        PromptKind::RemoveTag => {
            let result = app.session.remove_tag(value.trim());
            app.report(result);
        }
    }
}
