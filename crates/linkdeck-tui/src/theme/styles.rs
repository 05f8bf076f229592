//! Semantic style builders for the dashboard theme.

use linkdeck_core::registry::Accent;
use linkdeck_core::types::StatusLevel;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// "Black on Cyan" - used for the active tab and selected menu rows
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// Map a destination accent to its terminal color
pub fn accent_color(accent: Accent) -> Color {
    match accent {
        Accent::Cyan => palette::ACCENT_CYAN,
        Accent::Blue => palette::ACCENT_BLUE,
        Accent::Green => palette::ACCENT_GREEN,
        Accent::Yellow => palette::ACCENT_YELLOW,
        Accent::Magenta => palette::ACCENT_MAGENTA,
        Accent::Red => palette::ACCENT_RED,
    }
}

/// Map a status feed level to its text style
pub fn status_level(level: StatusLevel) -> Style {
    match level {
        StatusLevel::Info => Style::default().fg(palette::TEXT_SECONDARY),
        StatusLevel::Warning => Style::default().fg(palette::STATUS_YELLOW),
        StatusLevel::Error => Style::default().fg(palette::STATUS_RED),
    }
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

pub fn menu_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_active())
        .style(Style::default().bg(palette::POPUP_BG))
}
