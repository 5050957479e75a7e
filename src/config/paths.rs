//! Path management for contest scoring
//!
//! Provides XDG-compliant path resolution for configuration, data, and backups.
//!
//! ## Path Resolution Order
//!
//! 1. `CONTEST_SCORING_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/contest-scoring` or `~/.config/contest-scoring`
//! 3. Windows: `%APPDATA%\contest-scoring`

use std::path::PathBuf;

use crate::error::ScoringError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "CONTEST_SCORING_DATA_DIR";

/// File name of the primary store
pub const STORE_FILE_NAME: &str = "contest-scoring-data.json";

/// File name prefix of the backup slots
pub const BACKUP_FILE_PREFIX: &str = "contest-scoring-backup-";

/// Manages all paths used by contest scoring
#[derive(Debug, Clone)]
pub struct ScoringPaths {
    base_dir: PathBuf,
}

impl ScoringPaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home/config directory can be determined.
    pub fn new() -> Result<Self, ScoringError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/contest-scoring/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the backup directory (~/.config/contest-scoring/backups/)
    pub fn backup_dir(&self) -> PathBuf {
        self.base_dir.join("backups")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the primary store file
    pub fn store_file(&self) -> PathBuf {
        self.data_dir().join(STORE_FILE_NAME)
    }

    /// Get the path to a backup slot file (slot 1 or 2)
    pub fn backup_file(&self, slot: u8) -> PathBuf {
        self.backup_dir()
            .join(format!("{}{}.json", BACKUP_FILE_PREFIX, slot))
    }

    /// Ensure the base, data and backup directories exist
    pub fn ensure_directories(&self) -> Result<(), ScoringError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ScoringError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| ScoringError::Io(format!("Failed to create data directory: {}", e)))?;

        std::fs::create_dir_all(self.backup_dir())
            .map_err(|e| ScoringError::Io(format!("Failed to create backup directory: {}", e)))?;

        Ok(())
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, ScoringError> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg).join("contest-scoring"));
    }
    let home = std::env::var("HOME").map_err(|_| {
        ScoringError::Config("Could not determine HOME directory".into())
    })?;
    Ok(PathBuf::from(home).join(".config").join("contest-scoring"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, ScoringError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| ScoringError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("contest-scoring"))
}
