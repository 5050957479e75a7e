//! Local file backend
//!
//! The store lives in `data/contest-scoring-data.json`; backup slots in
//! `backups/contest-scoring-backup-{1,2}.json`. Writes are synchronous and
//! atomic.

use std::fs;

use serde_json::Value;

use crate::config::paths::ScoringPaths;
use crate::error::{ScoringError, ScoringResult};
use crate::models::{Backup, Store};

use super::backend::{BackendKind, BackupSlot, StorageBackend};
use super::file_io::{read_json_value, write_json_atomic};

/// Backend that keeps everything on local disk
pub struct LocalBackend {
    paths: ScoringPaths,
}

impl LocalBackend {
    pub fn new(paths: ScoringPaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &ScoringPaths {
        &self.paths
    }
}

impl StorageBackend for LocalBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Local
    }

    fn read_data(&self) -> ScoringResult<Option<Value>> {
        read_json_value(self.paths.store_file())
    }

    fn write_data(&self, store: &Store) -> ScoringResult<()> {
        write_json_atomic(self.paths.store_file(), store)
    }

    fn read_backup(&self, slot: BackupSlot) -> ScoringResult<Option<Value>> {
        read_json_value(self.paths.backup_file(slot.number()))
    }

    fn rotate_backups(&self, newest: &Backup) -> ScoringResult<()> {
        let slot1 = self.paths.backup_file(BackupSlot::One.number());
        let slot2 = self.paths.backup_file(BackupSlot::Two.number());

        // Slot 1 moves over verbatim, even if it no longer parses
        if slot1.exists() {
            fs::rename(&slot1, &slot2).map_err(|e| {
                ScoringError::Storage(format!("Failed to rotate backup slot 1: {}", e))
            })?;
        }

        write_json_atomic(&slot1, newest)
    }
}
