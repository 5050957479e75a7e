//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the scoring core.

pub mod backup;
pub mod contestant;
pub mod export;
pub mod results;

pub use backup::{handle_backup_command, handle_reset_command, BackupCommands};
pub use contestant::{handle_contestant_command, ContestantCommands};
pub use export::{handle_export_command, ExportCommands};
pub use results::handle_results_command;

use crate::error::{ScoringError, ScoringResult};
use crate::models::Contest;
use crate::storage::DataStore;

/// Resolve a contest given by id or path
pub fn resolve_contest(store: &DataStore, identifier: &str) -> ScoringResult<&'static Contest> {
    store.catalog().find(identifier).ok_or_else(|| {
        let known: Vec<_> = store.catalog().ids().collect();
        ScoringError::Validation(format!(
            "Unknown contest: '{}'. Valid contests: {}",
            identifier,
            known.join(", ")
        ))
    })
}
