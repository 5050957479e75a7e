//! Backup manager for contest scoring
//!
//! Keeps exactly two rotating snapshots of the store. Backups go through the
//! same backend the `DataStore` selected for the session.

use chrono::{DateTime, TimeZone, Utc};
use tracing::{info, warn};

use crate::error::ScoringResult;
use crate::models::{Backup, BackupHeader, Store};
use crate::storage::{BackupSlot, DataStore};

/// Metadata about a populated backup slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackupInfo {
    pub slot: BackupSlot,
    /// Epoch milliseconds
    pub timestamp: i64,
}

impl BackupInfo {
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.timestamp).single()
    }
}

/// Creates, lists and restores the two backup slots
pub struct BackupManager<'a> {
    pub(super) store: &'a DataStore,
}

impl<'a> BackupManager<'a> {
    pub fn new(store: &'a DataStore) -> Self {
        Self { store }
    }

    /// Snapshot the current store into slot 1, shifting slot 1 into slot 2
    pub fn save_backup(&self) -> ScoringResult<BackupInfo> {
        let backup = Backup {
            timestamp: Utc::now().timestamp_millis(),
            data: self.store.load(),
        };
        self.store.backend().rotate_backups(&backup)?;

        info!(
            backend = %self.store.kind(),
            timestamp = backup.timestamp,
            contestants = backup.data.len(),
            "backup saved"
        );
        Ok(BackupInfo {
            slot: BackupSlot::One,
            timestamp: backup.timestamp,
        })
    }

    /// Populated slots in slot order
    ///
    /// Only the timestamp is decoded; slots that cannot be read are skipped.
    pub fn list_backups(&self) -> Vec<BackupInfo> {
        BackupSlot::ALL
            .into_iter()
            .filter_map(|slot| {
                let raw = match self.store.backend().read_backup(slot) {
                    Ok(raw) => raw?,
                    Err(e) => {
                        warn!(slot = %slot, error = %e, "backup slot unreadable");
                        return None;
                    }
                };
                match serde_json::from_value::<BackupHeader>(raw) {
                    Ok(header) => Some(BackupInfo {
                        slot,
                        timestamp: header.timestamp,
                    }),
                    Err(e) => {
                        warn!(slot = %slot, error = %e, "backup slot has no timestamp");
                        None
                    }
                }
            })
            .collect()
    }

    /// Back up, then clear every contest
    pub fn reset_all_data(&self) -> ScoringResult<()> {
        self.save_backup()?;
        self.store.save(&Store::empty(self.store.catalog()))?;
        info!(backend = %self.store.kind(), "all data reset");
        Ok(())
    }
}
