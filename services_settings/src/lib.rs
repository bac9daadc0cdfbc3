//! # Editor Settings
//!
//! A typed, versioned settings document for the path editor.
//!
//! ## Philosophy
//!
//! - **Typed settings**: every knob has an explicit type, not a string bag
//! - **Defaults baked in**: a missing or broken settings file never stops the editor
//! - **Deterministic**: settings serialize to stable JSON and round-trip exactly
//! - **No ambient config**: the host hands settings to the session explicitly
//!
//! ## Example
//!
//! ```ignore
//! use services_settings::{persistence, EditorSettings};
//!
//! let settings = persistence::load_settings_safe(bytes);
//! assert_eq!(settings.storage_key, "paths");
//! ```

pub mod persistence;

use path_types::{EditMode, InsertionEnd};
use services_path_store::validate_key;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use persistence::{
    deserialize_settings, load_settings_file, load_settings_safe, serialize_settings,
};

/// Settings errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Failed to serialize settings: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize settings: {0}")]
    DeserializationFailed(String),

    #[error("Unsupported settings version: {0}")]
    UnsupportedVersion(u32),

    #[error("Invalid setting {field}: {reason}")]
    Invalid { field: &'static str, reason: String },

    #[error("Failed to read settings file: {0}")]
    Io(String),
}

/// Settings for one editing session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Version of the settings format (for future migrations)
    pub version: u32,
    /// Durable storage key holding the serialized collection
    pub storage_key: String,
    /// Prefix of generated names ("Unnamed path 1", "Unnamed path 2", ...)
    pub default_name_prefix: String,
    /// File name of the structured export
    pub json_file_name: String,
    /// File name of the tabular export
    pub csv_file_name: String,
    /// Decimal places shown in the cursor readout
    pub cursor_precision: usize,
    pub initial_mode: EditMode,
    pub initial_insertion_end: InsertionEnd,
    /// Maximum number of retained log entries
    pub log_capacity: usize,
}

impl EditorSettings {
    /// Current version of the settings format
    pub const CURRENT_VERSION: u32 = 1;

    pub fn new() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            storage_key: "paths".to_string(),
            default_name_prefix: "Unnamed path".to_string(),
            json_file_name: "paths.json".to_string(),
            csv_file_name: "paths.csv".to_string(),
            cursor_precision: 2,
            initial_mode: EditMode::Moving,
            initial_insertion_end: InsertionEnd::Back,
            log_capacity: 256,
        }
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.default_name_prefix = prefix.into();
        self
    }

    /// Checks that every setting is usable
    pub fn validate(&self) -> Result<(), SettingsError> {
        let non_empty = [
            ("storage_key", &self.storage_key),
            ("default_name_prefix", &self.default_name_prefix),
            ("json_file_name", &self.json_file_name),
            ("csv_file_name", &self.csv_file_name),
        ];
        for (field, value) in non_empty {
            if value.trim().is_empty() {
                return Err(SettingsError::Invalid {
                    field,
                    reason: "must not be empty".to_string(),
                });
            }
        }

        if validate_key(&self.storage_key).is_err() {
            return Err(SettingsError::Invalid {
                field: "storage_key",
                reason: format!(
                    "{:?} may only use ASCII letters, digits, '_', '-' and '.', and must not start with '.'",
                    self.storage_key
                ),
            });
        }

        for (field, value) in [
            ("json_file_name", &self.json_file_name),
            ("csv_file_name", &self.csv_file_name),
        ] {
            if value.contains('/') || value.contains('\\') {
                return Err(SettingsError::Invalid {
                    field,
                    reason: format!("{:?} is not a bare file name", value),
                });
            }
        }

        if self.cursor_precision > 15 {
            return Err(SettingsError::Invalid {
                field: "cursor_precision",
                reason: format!("{} exceeds 15 decimal places", self.cursor_precision),
            });
        }

        if self.log_capacity == 0 {
            return Err(SettingsError::Invalid {
                field: "log_capacity",
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self::new()
    }
}
