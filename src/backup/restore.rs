//! Backup restoration
//!
//! Restoring overwrites the active store with a slot's snapshot. Any problem
//! with the slot leaves the active store untouched.

use serde_json::Value;
use tracing::{info, warn};

use crate::error::{ScoringError, ScoringResult};
use crate::models::Store;
use crate::storage::BackupSlot;

use super::manager::BackupManager;

impl BackupManager<'_> {
    /// Restore the store from backup slot `slot` (1 or 2)
    ///
    /// Returns `false` without touching the store if the slot number is out
    /// of range, the slot is empty, or its snapshot cannot be read.
    pub fn restore_from_backup(&self, slot: u8) -> bool {
        let Some(slot) = BackupSlot::from_number(slot) else {
            warn!(slot, "no such backup slot");
            return false;
        };

        match self.try_restore(slot) {
            Ok(contestants) => {
                info!(slot = %slot, contestants, "store restored from backup");
                true
            }
            Err(e) => {
                warn!(slot = %slot, error = %e, "restore failed; store unchanged");
                false
            }
        }
    }

    fn try_restore(&self, slot: BackupSlot) -> ScoringResult<usize> {
        let raw = self
            .store
            .backend()
            .read_backup(slot)?
            .ok_or_else(|| ScoringError::backup_not_found(slot.to_string()))?;

        let data = match raw.get("data") {
            Some(data @ Value::Object(_)) => data,
            _ => {
                return Err(ScoringError::Validation(format!(
                    "Backup {} holds no snapshot",
                    slot
                )))
            }
        };

        let restored = Store::from_value(Some(data), self.store.catalog());
        self.store.save(&restored)?;
        Ok(restored.len())
    }
}

#[cfg(test)]
mod tests {
    use crate::backup::BackupManager;
    use crate::config::paths::ScoringPaths;
    use crate::models::{ContestCatalog, ContestantFields};
    use crate::storage::remote::testing::FakeTransport;
    use crate::storage::{DataStore, RemoteBackend, RemoteState};
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn create_store() -> (DataStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ScoringPaths::with_base_dir(temp_dir.path().to_path_buf());
        (DataStore::local(paths).unwrap(), temp_dir)
    }

    fn add(store: &DataStore, name: &str) {
        store
            .add_contestant(
                "sanskriti",
                ContestantFields {
                    contestant_name: name.into(),
                    age_group: "Group 3".into(),
                    score: 14.0,
                    total_time_minutes: 20.0,
                    ..Default::default()
                },
            )
            .unwrap();
    }

    fn names(store: &DataStore) -> Vec<String> {
        store
            .load()
            .contestants("sanskriti")
            .iter()
            .map(|r| r.contestant_name.clone())
            .collect()
    }

    #[test]
    fn test_restore_previous_state() {
        let (store, _temp) = create_store();
        let manager = BackupManager::new(&store);

        add(&store, "Before");
        manager.save_backup().unwrap();
        add(&store, "After");

        assert!(manager.restore_from_backup(1));
        assert_eq!(names(&store), vec!["Before"]);
    }

    #[test]
    fn test_restore_slot_two() {
        let (store, _temp) = create_store();
        let manager = BackupManager::new(&store);

        add(&store, "One");
        manager.save_backup().unwrap();
        add(&store, "Two");
        manager.save_backup().unwrap();

        assert!(manager.restore_from_backup(2));
        assert_eq!(names(&store), vec!["One"]);
    }

    #[test]
    fn test_restore_empty_slot_is_noop() {
        let (store, temp) = create_store();
        add(&store, "Untouched");
        let file = temp.path().join("data").join("contest-scoring-data.json");
        let before = fs::read(&file).unwrap();

        assert!(!BackupManager::new(&store).restore_from_backup(1));
        assert_eq!(fs::read(&file).unwrap(), before);
    }

    #[test]
    fn test_restore_out_of_range_slot() {
        let (store, _temp) = create_store();
        let manager = BackupManager::new(&store);
        manager.save_backup().unwrap();

        assert!(!manager.restore_from_backup(0));
        assert!(!manager.restore_from_backup(3));
    }

    #[test]
    fn test_restore_corrupt_slot_is_noop() {
        let (store, temp) = create_store();
        add(&store, "Untouched");
        let file = temp.path().join("data").join("contest-scoring-data.json");
        let before = fs::read(&file).unwrap();

        let backups = temp.path().join("backups");
        fs::write(backups.join("contest-scoring-backup-1.json"), "{ nope").unwrap();
        fs::write(
            backups.join("contest-scoring-backup-2.json"),
            r#"{"timestamp": 5}"#,
        )
        .unwrap();

        let manager = BackupManager::new(&store);
        assert!(!manager.restore_from_backup(1));
        assert!(!manager.restore_from_backup(2));
        assert_eq!(fs::read(&file).unwrap(), before);
    }

    #[test]
    fn test_restore_fills_missing_contests() {
        let (store, temp) = create_store();
        fs::write(
            temp.path()
                .join("backups")
                .join("contest-scoring-backup-1.json"),
            json!({"timestamp": 1, "data": {"iq": []}}).to_string(),
        )
        .unwrap();

        assert!(BackupManager::new(&store).restore_from_backup(1));
        assert_eq!(store.load().contest_ids().count(), 4);
    }

    #[test]
    fn test_restore_remote() {
        let transport = FakeTransport::reachable(RemoteState {
            data: json!({}),
            backup1: None,
            backup2: Some(json!({
                "timestamp": 10,
                "data": {"maths": [{
                    "id": "legacy-1",
                    "contestName": "Maths Quiz Contest",
                    "contestantName": "Old Timer",
                    "ageGroup": "Group 4",
                    "score": 18,
                    "totalTimeMinutes": 12
                }]}
            })),
        });
        let backend = RemoteBackend::probe(Box::new(transport.clone())).unwrap();
        let store = DataStore::new(Box::new(backend), ContestCatalog::standard());
        let manager = BackupManager::new(&store);

        assert!(!manager.restore_from_backup(1));
        assert!(transport.pushes().is_empty());

        assert!(manager.restore_from_backup(2));
        let loaded = store.load();
        assert_eq!(loaded.contestants("maths")[0].id.as_str(), "legacy-1");
        assert_eq!(transport.pushes().len(), 1);
    }
}
