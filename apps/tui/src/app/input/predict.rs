use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::state::App;
use crate::view::EXAMPLE_TEXTS;
use crossterm::event::KeyCode;

/// Keys on the Live Prediction tab while the text box is not focused.
pub fn handle_predict_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char('i' | 'e') => {
            app.editing = true;
        }
        KeyCode::Enter | KeyCode::Char('p') => {
            app.request_prediction();
        }
        KeyCode::Up => {
            app.example_index = wrap_decrement(app.example_index, EXAMPLE_TEXTS.len());
        }
        KeyCode::Down => {
            app.example_index = wrap_increment(app.example_index, EXAMPLE_TEXTS.len());
        }
        KeyCode::Char('x') => {
            if let Some(example) = EXAMPLE_TEXTS.get(app.example_index) {
                app.input_text = (*example).to_string();
            }
        }
        KeyCode::Char('c') => {
            app.input_text.clear();
        }
        _ => {}
    }
}

/// Keys while the text box is focused.
pub fn handle_text_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char(c) => app.input_text.push(c),
        KeyCode::Backspace => {
            app.input_text.pop();
        }
        KeyCode::Enter => {
            if app.request_prediction() {
                app.editing = false;
            }
        }
        KeyCode::Esc => {
            app.editing = false;
        }
        _ => {}
    }
}
