// Export our modules for use in the binary and tests
pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod event;
pub mod logging;
pub mod terminal;
pub mod ui;
pub mod view;

#[cfg(test)]
mod test_support;

pub use domain::{EntityType, Tab};
