//! Persisted preference store
//!
//! A single small toml file standing in for the browser key-value store.
//! Currently holds only the `wallet_connected` flag, which pre-seeds the
//! wallet display state at startup and is never treated as authoritative.

use std::path::{Path, PathBuf};

use linkdeck_core::prelude::*;
use serde::{Deserialize, Serialize};

const PREFS_FILENAME: &str = "prefs.toml";

/// Persisted preferences
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Prefs {
    /// Whether the wallet was connected when the app last ran
    #[serde(default)]
    pub wallet_connected: bool,
}

impl Prefs {
    /// Default store location under the platform data dir.
    pub fn default_path() -> PathBuf {
        let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        base.join("linkdeck").join(PREFS_FILENAME)
    }

    /// Load from `path`. Missing or malformed files yield defaults.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(text) => toml::from_str(&text).unwrap_or_else(|e| {
                warn!("malformed prefs at {}: {e}, using defaults", path.display());
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Save to `path`, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let text = toml::to_string(self)
            .map_err(|e| Error::config(format!("failed to serialize prefs: {e}")))?;
        std::fs::write(path, text)?;
        Ok(())
    }
}
