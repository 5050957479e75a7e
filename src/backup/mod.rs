//! Backup system for contest scoring
//!
//! Two rotating snapshot slots of the whole store: slot 1 holds the most
//! recent snapshot, slot 2 the one before it. A snapshot is
//! `{ "timestamp": <epoch millis>, "data": <store> }`.
//!
//! Backups are taken explicitly and before every reset. They live wherever
//! the session's `DataStore` keeps its data, so a remote session backs up to
//! the remote store and a local one to the `backups/` directory.
//!
//! # Example
//!
//! ```rust,ignore
//! use contest_scoring::backup::BackupManager;
//! use contest_scoring::config::paths::ScoringPaths;
//! use contest_scoring::storage::DataStore;
//!
//! let store = DataStore::local(ScoringPaths::new()?)?;
//! let backups = BackupManager::new(&store);
//!
//! backups.save_backup()?;
//! for info in backups.list_backups() {
//!     println!("slot {} at {}", info.slot, info.timestamp);
//! }
//! assert!(backups.restore_from_backup(1));
//! ```

mod manager;
mod restore;

pub use manager::{BackupInfo, BackupManager};
