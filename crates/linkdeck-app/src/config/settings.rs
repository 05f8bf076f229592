//! Settings parser for .linkdeck/config.toml

use std::path::{Path, PathBuf};

use linkdeck_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const LINKDECK_DIR: &str = ".linkdeck";

/// Path of the config file under `base` (usually the home directory).
pub fn config_path(base: &Path) -> PathBuf {
    base.join(LINKDECK_DIR).join(CONFIG_FILENAME)
}

/// Load settings from `base/.linkdeck/config.toml`.
///
/// A missing file yields defaults. A malformed file is logged and also
/// yields defaults — configuration problems never block startup.
pub fn load_settings(base: &Path) -> Settings {
    let path = config_path(base);

    let text = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("no config file at {}, using defaults", path.display());
            return Settings::default();
        }
        Err(e) => {
            warn!("failed to read {}: {e}, using defaults", path.display());
            return Settings::default();
        }
    };

    match toml::from_str(&text) {
        Ok(settings) => {
            info!("loaded settings from {}", path.display());
            settings
        }
        Err(e) => {
            warn!("malformed config at {}: {e}, using defaults", path.display());
            Settings::default()
        }
    }
}

/// Write settings back to `base/.linkdeck/config.toml`, creating the
/// directory if needed.
pub fn save_settings(base: &Path, settings: &Settings) -> Result<()> {
    let path = config_path(base);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let text = toml::to_string_pretty(settings)
        .map_err(|e| Error::config(format!("failed to serialize settings: {e}")))?;
    std::fs::write(&path, text)?;
    Ok(())
}
