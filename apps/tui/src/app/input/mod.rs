mod alert;
mod helpers;
mod predict;

use crate::app::state::App;
use crate::domain::Tab;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use helpers::digit_index;

/// Entry point for terminal key events. Ctrl/Alt chords never reach the
/// text box as plain characters.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    let is_chord = key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
    if app.editing && is_chord && matches!(key.code, KeyCode::Char(_)) {
        return;
    }

    handle_input(app, key.code);
}

pub fn handle_input(app: &mut App, key: KeyCode) {
    if app.alert.is_some() {
        alert::handle_alert_input(app, key);
        return;
    }

    // Tab cycling is available everywhere, including while typing.
    match key {
        KeyCode::Tab => {
            app.next_tab();
            return;
        }
        KeyCode::BackTab => {
            app.prev_tab();
            return;
        }
        _ => {}
    }

    if app.editing {
        predict::handle_text_input(app, key);
        return;
    }

    match key {
        KeyCode::Char('q') => {
            app.running = false;
        }
        KeyCode::Left => app.prev_tab(),
        KeyCode::Right => app.next_tab(),
        KeyCode::Char(ch) if digit_index(ch).and_then(Tab::from_index).is_some() => {
            if let Some(tab) = digit_index(ch).and_then(Tab::from_index) {
                app.select_tab(tab);
            }
        }
        _ if app.active_tab == Tab::Predict && app.is_dashboard_ready() => {
            predict::handle_predict_input(app, key);
        }
        _ => {}
    }
}
