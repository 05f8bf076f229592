//! Screen layout definitions for the TUI
//!
//! Fixed three-band layout: nav bar on top, section content in the middle,
//! a one-row status bar at the bottom.

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Navigation bar (tabs + studio trigger + wallet pill)
    pub nav: Rect,

    /// Active section content
    pub content: Rect,

    /// Status bar (last status line + key hints)
    pub status: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Nav bar (glass container: border + row + border)
        Constraint::Min(3),    // Content
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    ScreenAreas {
        nav: chunks[0],
        content: chunks[1],
        status: chunks[2],
    }
}
