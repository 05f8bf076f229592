//! Color palette for the dashboard theme.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const CARD_BG: Color = Color::Black; // Panel/card backgrounds
pub const POPUP_BG: Color = Color::DarkGray; // Overlay/menu backgrounds

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray; // Inactive borders
pub const BORDER_ACTIVE: Color = Color::Cyan; // Focused/scrolled borders

// --- Accent ---
pub const ACCENT: Color = Color::Cyan; // Primary accent
pub const CONTRAST_FG: Color = Color::Black; // Foreground on accent backgrounds

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const TEXT_BRIGHT: Color = Color::White;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green; // Connected/success
pub const STATUS_RED: Color = Color::Red; // Errors
pub const STATUS_YELLOW: Color = Color::Yellow; // Warnings, key hints
pub const STATUS_BLUE: Color = Color::Blue; // Info

// --- Destination accents ---
pub const ACCENT_CYAN: Color = Color::Cyan;
pub const ACCENT_BLUE: Color = Color::Blue;
pub const ACCENT_GREEN: Color = Color::Green;
pub const ACCENT_YELLOW: Color = Color::Yellow;
pub const ACCENT_MAGENTA: Color = Color::Magenta;
pub const ACCENT_RED: Color = Color::Red;

// --- Effects ---
pub const SHADOW: Color = Color::Black;
