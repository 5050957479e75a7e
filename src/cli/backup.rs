//! Backup CLI commands
//!
//! Implements backup management and the full data reset.

use clap::Subcommand;

use crate::backup::BackupManager;
use crate::display::backup::format_backup_list;
use crate::error::{ScoringError, ScoringResult};
use crate::storage::{BackupSlot, DataStore};

/// Backup subcommands
#[derive(Subcommand)]
pub enum BackupCommands {
    /// Snapshot the current data into backup slot 1
    Create,

    /// List available backups
    List,

    /// Replace all current data with a backup
    Restore {
        /// Backup slot (1 = most recent, 2 = previous)
        slot: u8,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a backup command
pub fn handle_backup_command(store: &DataStore, cmd: BackupCommands) -> ScoringResult<()> {
    let manager = BackupManager::new(store);

    match cmd {
        BackupCommands::Create => {
            let info = manager.save_backup()?;
            println!("Backup saved to slot {}.", info.slot);
        }

        BackupCommands::List => {
            println!("{}", format_backup_list(&manager.list_backups()).trim_end());
        }

        BackupCommands::Restore { slot, force } => {
            if BackupSlot::from_number(slot).is_none() {
                return Err(ScoringError::Validation(format!(
                    "Invalid backup slot: {}. Valid slots: 1, 2",
                    slot
                )));
            }

            if !force {
                println!("WARNING: This will overwrite ALL current data!");
                println!("To proceed, run again with --force flag:");
                println!("  contest backup restore {} --force", slot);
                return Ok(());
            }

            if !manager.restore_from_backup(slot) {
                return Err(ScoringError::Storage(format!(
                    "Failed to restore backup {}",
                    slot
                )));
            }
            println!("Data restored from backup {}.", slot);
        }
    }

    Ok(())
}

/// Back up, then clear every contest
pub fn handle_reset_command(store: &DataStore, force: bool) -> ScoringResult<()> {
    if !force {
        println!("WARNING: This will clear ALL contestants in every contest!");
        println!("A backup is saved first. To proceed, run again with --force flag:");
        println!("  contest reset --force");
        return Ok(());
    }

    BackupManager::new(store).reset_all_data()?;
    println!("All data reset. A backup has been saved.");
    Ok(())
}
