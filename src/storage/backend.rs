//! Storage backend abstraction
//!
//! A backend owns the raw resource behind the store and the two backup slots.
//! Backends deal in JSON documents; decoding and the "never fail a load"
//! policy live in `DataStore`.

use std::fmt;

use serde_json::Value;

use crate::error::ScoringResult;
use crate::models::{Backup, Store};

/// One of the two rotating backup slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BackupSlot {
    /// Most recent snapshot
    One,
    /// Previous snapshot
    Two,
}

impl BackupSlot {
    pub const ALL: [BackupSlot; 2] = [BackupSlot::One, BackupSlot::Two];

    /// Map a user-facing slot number; anything but 1 or 2 is rejected
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            _ => None,
        }
    }

    pub fn number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }
}

impl fmt::Display for BackupSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Which backend a session ended up with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Local,
    Remote,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::Remote => write!(f, "remote"),
        }
    }
}

/// Where the store and its backups physically live
pub trait StorageBackend: Send + Sync {
    fn kind(&self) -> BackendKind;

    /// Raw store document, `None` if nothing has been stored yet
    fn read_data(&self) -> ScoringResult<Option<Value>>;

    /// Replace the whole store
    fn write_data(&self, store: &Store) -> ScoringResult<()>;

    /// Raw backup document in `slot`, `None` if the slot is empty
    fn read_backup(&self, slot: BackupSlot) -> ScoringResult<Option<Value>>;

    /// Move slot 1 into slot 2 (dropping slot 2) and install `newest` in slot 1
    fn rotate_backups(&self, newest: &Backup) -> ScoringResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_numbers() {
        assert_eq!(BackupSlot::from_number(1), Some(BackupSlot::One));
        assert_eq!(BackupSlot::from_number(2), Some(BackupSlot::Two));
        assert_eq!(BackupSlot::from_number(0), None);
        assert_eq!(BackupSlot::from_number(3), None);
        assert_eq!(BackupSlot::Two.number(), 2);
    }

    #[test]
    fn test_slot_order() {
        assert!(BackupSlot::One < BackupSlot::Two);
        assert_eq!(BackupSlot::ALL, [BackupSlot::One, BackupSlot::Two]);
    }
}
