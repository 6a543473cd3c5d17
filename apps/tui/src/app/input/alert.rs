use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_alert_input(app: &mut App, key: KeyCode) {
    if matches!(key, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
        app.dismiss_alert();
    }
}
