//! Configuration types for LinkDeck

use serde::{Deserialize, Serialize};

/// Global application settings, loaded from `.linkdeck/config.toml`.
///
/// Every field has a default; a missing or partial file merges cleanly and
/// never fails startup.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct Settings {
    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub wallet: WalletSettings,
}

/// Startup behavior
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct BehaviorSettings {
    /// Route to open at startup. Unknown routes resolve to the default
    /// primary section, so a stale value here is harmless.
    #[serde(default)]
    pub start_route: Option<String>,
}

/// Presentation tuning
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct UiSettings {
    /// Rows scrolled before the header switches to its elevated state
    #[serde(default = "default_scroll_threshold")]
    pub scroll_threshold_rows: u16,

    /// Debounce window for coalescing scroll bursts, in milliseconds
    #[serde(default = "default_scroll_debounce_ms")]
    pub scroll_debounce_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            scroll_threshold_rows: default_scroll_threshold(),
            scroll_debounce_ms: default_scroll_debounce_ms(),
        }
    }
}

fn default_scroll_threshold() -> u16 {
    10
}

fn default_scroll_debounce_ms() -> u64 {
    80
}

/// Wallet behavior
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct WalletSettings {
    /// Whether to persist the `wallet_connected` flag between runs.
    /// The flag only pre-seeds display state; it is never authoritative.
    #[serde(default = "default_remember_connection")]
    pub remember_connection: bool,
}

impl Default for WalletSettings {
    fn default() -> Self {
        Self {
            remember_connection: default_remember_connection(),
        }
    }
}

fn default_remember_connection() -> bool {
    true
}
