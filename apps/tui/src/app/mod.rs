// App module for ner_dashboard
// Handles view state, background requests and key input

pub mod actions;
pub mod input;
pub mod state;

pub use actions::AppActions;
pub use input::{handle_input, handle_key_event};
pub use state::{Alert, App, AppEvent};
