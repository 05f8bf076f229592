//! Configuration loading and preference persistence
//!
//! - `types`: `Settings` and its sections
//! - `settings`: `.linkdeck/config.toml` parsing with default merging
//! - `prefs`: the small persisted preference store (`wallet_connected` flag)

pub mod prefs;
pub mod settings;
pub mod types;

pub use prefs::Prefs;
pub use settings::{config_path, load_settings};
pub use types::{BehaviorSettings, Settings, UiSettings, WalletSettings};
