//! linkdeck-tui - Terminal UI for LinkDeck
//!
//! This crate provides the ratatui-based terminal interface. It wires the
//! reducer from linkdeck-app to terminal rendering, event polling, mouse
//! hit-testing, and the async wallet/navigation side effects.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
