//! User settings for contest scoring
//!
//! Manages the remote store endpoint, the over-time ranking threshold and the
//! printable document title.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::paths::ScoringPaths;
use crate::error::ScoringError;

/// Default over-time threshold in minutes
pub const DEFAULT_OVER_TIME_THRESHOLD: f64 = 23.0;

/// User settings for contest scoring
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Base URL of the shared remote store (e.g. `http://localhost:5000`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_url: Option<String>,

    /// Timeout applied to every remote request
    #[serde(default = "default_remote_timeout_secs")]
    pub remote_timeout_secs: u64,

    /// Records slower than this are ranked after every on-time record
    #[serde(default = "default_over_time_threshold")]
    pub over_time_threshold_minutes: f64,

    /// Title printed at the top of the results document
    #[serde(default = "default_document_title")]
    pub document_title: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_remote_timeout_secs() -> u64 {
    5
}

fn default_over_time_threshold() -> f64 {
    DEFAULT_OVER_TIME_THRESHOLD
}

fn default_document_title() -> String {
    "Sanskriti RKT 2026".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            remote_url: None,
            remote_timeout_secs: default_remote_timeout_secs(),
            over_time_threshold_minutes: default_over_time_threshold(),
            document_title: default_document_title(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &ScoringPaths) -> Result<Self, ScoringError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| ScoringError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ScoringError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ScoringPaths) -> Result<(), ScoringError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ScoringError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ScoringError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    pub fn remote_timeout(&self) -> Duration {
        Duration::from_secs(self.remote_timeout_secs)
    }
}
