//! Application state (Model in TEA pattern)

use linkdeck_core::registry::{self, STUDIO_TAB_ID};
use linkdeck_core::types::{NavContext, StatusEntry, StatusSource};

use crate::config::Settings;

/// Navigation controller state.
///
/// Owned exclusively by the reducer; everything else reads it. The route
/// reported by the route provider is the ground truth — whenever it changes,
/// `active_tab`/`context` are re-derived from it rather than trusted from
/// previous interactive state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    /// Active tab id: a primary entry id, or [`STUDIO_TAB_ID`] while the
    /// studio menu is pending or a studio destination is resolved.
    pub active_tab: &'static str,

    /// Which context owns the current route.
    pub context: NavContext,

    /// Whether the transient studio menu overlay is open.
    ///
    /// Open implies the secondary context has not been committed for the
    /// current route yet (menu-open is always a pre-commitment state).
    pub menu_open: bool,

    /// Cursor position inside the studio menu (keyboard navigation).
    pub menu_cursor: usize,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            active_tab: registry::default_entry().id,
            context: NavContext::Primary,
            menu_open: false,
            menu_cursor: 0,
        }
    }
}

impl NavState {
    /// True when the studio trigger should be highlighted (pending or resolved).
    pub fn studio_highlighted(&self) -> bool {
        self.active_tab == STUDIO_TAB_ID
    }
}

/// Wallet display state.
///
/// The controller only renders what the adapter reports; `connected` flips
/// solely on adapter-confirmed results. `connecting` latches out duplicate
/// connect requests while one is in flight.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalletState {
    pub connected: bool,
    pub connecting: bool,
    pub address: String,
    pub balance: String,
    /// Pre-seeded from the persisted `wallet_connected` flag. Display-only,
    /// never authoritative.
    pub remembered: bool,
}

impl WalletState {
    /// Address shortened for display (`0x1234…abcd`).
    ///
    /// Counts chars, not bytes: the address is provider-supplied input and
    /// must never panic the renderer on a multi-byte boundary.
    pub fn short_address(&self) -> String {
        let chars: Vec<char> = self.address.chars().collect();
        if chars.len() > 10 {
            let head: String = chars[..6].iter().collect();
            let tail: String = chars[chars.len() - 4..].iter().collect();
            format!("{head}…{tail}")
        } else {
            self.address.clone()
        }
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Navigation controller state
    pub nav: NavState,

    /// Current route as last reported by the route provider
    pub current_route: String,

    /// Wallet display state
    pub wallet: WalletState,

    /// Content scroll offset of the active section page, in rows
    pub scroll_offset: u16,

    /// Settled "scrolled past threshold" flag for the header visual state
    pub is_scrolled: bool,

    /// Status feed (bounded ring)
    pub status: Vec<StatusEntry>,

    /// Maximum status feed size
    pub max_status: usize,

    /// Loaded settings
    pub settings: Settings,

    quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            nav: NavState::default(),
            current_route: registry::default_entry().route.to_string(),
            wallet: WalletState::default(),
            scroll_offset: 0,
            is_scrolled: false,
            status: Vec::new(),
            max_status: 200,
            settings,
            quit: false,
        }
    }

    /// Append a status entry, trimming the ring if over capacity
    pub fn push_status(&mut self, entry: StatusEntry) {
        self.status.push(entry);
        if self.status.len() > self.max_status {
            let drain_count = self.status.len() - self.max_status;
            self.status.drain(0..drain_count);
        }
    }

    pub fn status_info(&mut self, source: StatusSource, message: impl Into<String>) {
        self.push_status(StatusEntry::info(source, message));
    }

    pub fn status_error(&mut self, source: StatusSource, message: impl Into<String>) {
        self.push_status(StatusEntry::error(source, message));
    }

    /// Most recent status entry, for the status bar
    pub fn last_status(&self) -> Option<&StatusEntry> {
        self.status.last()
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }
}
