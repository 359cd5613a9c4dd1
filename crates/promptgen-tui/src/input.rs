//! Key handling for the generator form.
//!
//! Every key press maps to at most one [`Session`] action. While the unlock
//! dialog is open it captures all keys.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use promptgen::clipboard::Clipboard;
use promptgen::session::Session;
use promptgen::store::KeyValueStore;

use crate::app::{App, Field, InputMode};

pub(crate) fn handle_key_event<S: KeyValueStore, C: Clipboard>(
    key: KeyEvent,
    app: &mut App,
    session: &mut Session<S, C>,
    now: Instant,
) {
    // Ctrl+C always quits.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    if session.dialog_open() {
        handle_dialog_key(key, app, session, now);
        app.fix_focus(session);
        return;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_key(key, app, session),
        InputMode::EditingText => handle_text_key(key, app, session),
        InputMode::Picking { cursor } => handle_picking_key(key, app, session, cursor),
    }
    app.fix_focus(session);
}

fn handle_normal_key<S: KeyValueStore, C: Clipboard>(
    key: KeyEvent,
    app: &mut App,
    session: &mut Session<S, C>,
) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char(',') => app.show_logs = !app.show_logs,
        KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => app.move_focus(session, 1),
        KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => app.move_focus(session, -1),
        KeyCode::Char('g') => generate(app, session),
        KeyCode::Char('y') => copy(app, session),
        KeyCode::Char('u') if session.show_upgrade_banner() => open_dialog(app, session),
        KeyCode::Enter => activate(app, session),
        KeyCode::Delete | KeyCode::Backspace => {
            if let Field::Category(index) = app.focus {
                let key = category_key(session, index);
                if let Err(e) = session.choose(key, "") {
                    app.status_message = Some(e.to_string());
                }
            }
        }
        _ => {}
    }
}

/// Enter on the focused field.
fn activate<S: KeyValueStore, C: Clipboard>(app: &mut App, session: &mut Session<S, C>) {
    match app.focus {
        Field::FreeText => {
            app.input_mode = InputMode::EditingText;
            app.status_message = None;
        }
        Field::Category(index) => {
            let views = session.categories();
            let view = &views[index];
            if !view.available {
                // The locked selector links straight to the unlock dialog.
                open_dialog(app, session);
                return;
            }
            let cursor = view
                .values
                .iter()
                .position(|v| *v == view.value)
                .map_or(0, |i| i + 1);
            app.input_mode = InputMode::Picking { cursor };
            app.status_message = None;
        }
        Field::Generate => generate(app, session),
        Field::Copy => copy(app, session),
        Field::Unlock => open_dialog(app, session),
    }
}

fn generate<S: KeyValueStore, C: Clipboard>(app: &mut App, session: &mut Session<S, C>) {
    if session.generate().is_empty() {
        app.status_message = Some("Nothing selected yet.".into());
    } else {
        app.status_message = Some("Prompt generated.".into());
    }
}

fn copy<S: KeyValueStore, C: Clipboard>(app: &mut App, session: &mut Session<S, C>) {
    app.status_message = Some(match session.copy_prompt() {
        Ok(message) => message.to_string(),
        Err(e) => e.to_string(),
    });
}

fn open_dialog<S: KeyValueStore, C: Clipboard>(app: &mut App, session: &mut Session<S, C>) {
    session.open_unlock_dialog();
    app.dialog_error = None;
    app.status_message = None;
}

fn category_key<S: KeyValueStore, C: Clipboard>(
    session: &Session<S, C>,
    index: usize,
) -> &'static str {
    session.catalog().list_categories()[index].key
}

fn handle_text_key<S: KeyValueStore, C: Clipboard>(
    key: KeyEvent,
    app: &mut App,
    session: &mut Session<S, C>,
) {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Tab => app.input_mode = InputMode::Normal,
        KeyCode::Backspace => {
            let mut text = session.free_text().to_string();
            text.pop();
            session.set_free_text(text);
        }
        KeyCode::Char(c) => {
            let mut text = session.free_text().to_string();
            text.push(c);
            session.set_free_text(text);
        }
        _ => {}
    }
}

fn handle_picking_key<S: KeyValueStore, C: Clipboard>(
    key: KeyEvent,
    app: &mut App,
    session: &mut Session<S, C>,
    cursor: usize,
) {
    let Field::Category(index) = app.focus else {
        app.input_mode = InputMode::Normal;
        return;
    };
    let category = &session.catalog().list_categories()[index];
    // Entry 0 is the placeholder that clears the selection.
    let entries = category.values.len() + 1;

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            app.input_mode = InputMode::Picking {
                cursor: cursor.saturating_sub(1),
            };
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.input_mode = InputMode::Picking {
                cursor: (cursor + 1).min(entries - 1),
            };
        }
        KeyCode::Enter => {
            let value = cursor
                .checked_sub(1)
                .and_then(|i| category.values.get(i))
                .copied()
                .unwrap_or("");
            if let Err(e) = session.choose(category.key, value) {
                app.status_message = Some(e.to_string());
            }
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Esc => app.input_mode = InputMode::Normal,
        _ => {}
    }
}

fn handle_dialog_key<S: KeyValueStore, C: Clipboard>(
    key: KeyEvent,
    app: &mut App,
    session: &mut Session<S, C>,
    now: Instant,
) {
    match key.code {
        KeyCode::Enter => match session.submit_unlock(now) {
            Ok(_) => {
                app.dialog_error = None;
                app.status_message = None;
            }
            Err(e) => app.dialog_error = Some(e.to_string()),
        },
        KeyCode::Esc => {
            session.cancel_unlock();
            app.dialog_error = None;
        }
        KeyCode::Backspace => {
            let mut code = session.dialog().entered_code.clone();
            code.pop();
            session.set_entered_code(code);
        }
        KeyCode::Char(c) => {
            let mut code = session.dialog().entered_code.clone();
            code.push(c);
            session.set_entered_code(code);
        }
        _ => {}
    }
}
