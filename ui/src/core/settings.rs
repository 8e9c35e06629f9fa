//! User settings read from `settings.json` in the platform config directory.
//!
//! Only the desktop build reads a file; the web build always uses defaults.
//!
//! ```json
//! { "columns": { "center": "SITE", "ticket": "TICKET" } }
//! ```
//! Keys that are left out keep their default header names.

use serde::{Deserialize, Serialize};

use crate::report::ColumnMap;

pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub columns: ColumnMap,
}

impl Settings {
    /// Load settings, falling back to defaults when the file is missing or malformed.
    pub fn load() -> Self {
        match read_settings() {
            Ok(Some(settings)) => {
                tracing::info!("loaded settings from {SETTINGS_FILE}");
                settings
            }
            Ok(None) => Self::default(),
            Err(err) => {
                tracing::warn!("ignoring {SETTINGS_FILE}: {err}");
                Self::default()
            }
        }
    }

    pub fn from_json(text: &str) -> Result<Self, String> {
        serde_json::from_str(text).map_err(|err| err.to_string())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn read_settings() -> Result<Option<Settings>, String> {
    let dirs = directories::ProjectDirs::from("com", "Alarmdash", "Alarmdash")
        .ok_or("Unable to determine config directory")?;
    let path = dirs.config_dir().join(SETTINGS_FILE);
    if !path.exists() {
        return Ok(None);
    }
    let text = std::fs::read_to_string(&path).map_err(|err| err.to_string())?;
    Settings::from_json(&text).map(Some)
}

#[cfg(target_arch = "wasm32")]
fn read_settings() -> Result<Option<Settings>, String> {
    Ok(None)
}
