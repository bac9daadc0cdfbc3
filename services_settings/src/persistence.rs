//! Settings persistence layer
//!
//! Loading and saving the settings document. A broken or foreign settings
//! file falls back to defaults instead of failing the session.

use crate::{EditorSettings, SettingsError};
use std::path::Path;

/// Serializes settings to pretty JSON bytes
pub fn serialize_settings(settings: &EditorSettings) -> Result<Vec<u8>, SettingsError> {
    serde_json::to_vec_pretty(settings)
        .map_err(|e| SettingsError::SerializationFailed(e.to_string()))
}

/// Deserializes and validates settings from JSON bytes
///
/// Missing fields take their default values.
pub fn deserialize_settings(bytes: &[u8]) -> Result<EditorSettings, SettingsError> {
    let settings: EditorSettings = serde_json::from_slice(bytes)
        .map_err(|e| SettingsError::DeserializationFailed(e.to_string()))?;

    if settings.version != EditorSettings::CURRENT_VERSION {
        return Err(SettingsError::UnsupportedVersion(settings.version));
    }

    settings.validate()?;
    Ok(settings)
}

/// Attempts to load settings from bytes, falling back to defaults on error
pub fn load_settings_safe(bytes: &[u8]) -> EditorSettings {
    deserialize_settings(bytes).unwrap_or_default()
}

/// Reads a settings file from disk
pub fn load_settings_file(path: &Path) -> Result<EditorSettings, SettingsError> {
    let bytes = std::fs::read(path)
        .map_err(|e| SettingsError::Io(format!("{}: {}", path.display(), e)))?;
    deserialize_settings(&bytes)
}
