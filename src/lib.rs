// Core infrastructure modules
pub mod core;

// Event model
pub mod event_log;
pub mod platform;
pub mod remote;
pub mod touchable;

// Front ends
pub mod command_palette;
pub mod config;
pub mod repl;
pub mod screen;
pub mod tui;
