//! Remote-synchronized backend
//!
//! The whole remote state (store plus both backup slots) is fetched once at
//! session start and cached in memory. Every mutation updates the cache
//! synchronously, then hands a full snapshot to the transport for a
//! best-effort push. The push result is never observed: last full write wins.

use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{ScoringError, ScoringResult};
use crate::models::{Backup, Store};

use super::backend::{BackendKind, BackupSlot, StorageBackend};

/// Wire shape of `GET`/`POST /api/data`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteState {
    pub data: Value,
    #[serde(default)]
    pub backup1: Option<Value>,
    #[serde(default)]
    pub backup2: Option<Value>,
}

impl Default for RemoteState {
    fn default() -> Self {
        Self {
            data: Value::Object(Map::new()),
            backup1: None,
            backup2: None,
        }
    }
}

impl RemoteState {
    fn slot(&self, slot: BackupSlot) -> Option<&Value> {
        let value = match slot {
            BackupSlot::One => self.backup1.as_ref(),
            BackupSlot::Two => self.backup2.as_ref(),
        };
        value.filter(|v| !v.is_null())
    }
}

/// Network side of the remote backend
pub trait RemoteTransport: Send + Sync {
    /// Fetch the authoritative state; any failure means "remote unavailable"
    fn fetch(&self) -> ScoringResult<RemoteState>;

    /// Queue a full-state upsert; must return without waiting on the network
    fn push(&self, state: RemoteState);
}

/// Backend backed by the shared remote store
pub struct RemoteBackend {
    cache: RwLock<RemoteState>,
    transport: Box<dyn RemoteTransport>,
}

impl std::fmt::Debug for RemoteBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteBackend")
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

impl RemoteBackend {
    /// Probe the remote; succeeds only if the current state could be fetched
    /// and carries a `data` object
    pub fn probe(transport: Box<dyn RemoteTransport>) -> ScoringResult<Self> {
        let state = transport.fetch()?;
        if !state.data.is_object() {
            return Err(ScoringError::Remote("response has no data object".to_string()));
        }
        debug!(
            has_backup1 = state.backup1.is_some(),
            has_backup2 = state.backup2.is_some(),
            "remote store reachable"
        );
        Ok(Self {
            cache: RwLock::new(state),
            transport,
        })
    }

    /// Apply `change` to the cache and push the resulting snapshot
    fn mutate<F>(&self, change: F) -> ScoringResult<()>
    where
        F: FnOnce(&mut RemoteState) -> ScoringResult<()>,
    {
        let snapshot = {
            let mut cache = self.cache.write().map_err(|e| {
                ScoringError::Storage(format!("Failed to acquire write lock: {}", e))
            })?;
            change(&mut cache)?;
            cache.clone()
        };
        self.transport.push(snapshot);
        Ok(())
    }

    fn read_cache<T>(&self, read: impl FnOnce(&RemoteState) -> T) -> ScoringResult<T> {
        let cache = self
            .cache
            .read()
            .map_err(|e| ScoringError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(read(&cache))
    }
}

impl StorageBackend for RemoteBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Remote
    }

    fn read_data(&self) -> ScoringResult<Option<Value>> {
        self.read_cache(|state| Some(state.data.clone()).filter(|v| !v.is_null()))
    }

    fn write_data(&self, store: &Store) -> ScoringResult<()> {
        let data = serde_json::to_value(store)?;
        self.mutate(|state| {
            state.data = data;
            Ok(())
        })
    }

    fn read_backup(&self, slot: BackupSlot) -> ScoringResult<Option<Value>> {
        self.read_cache(|state| state.slot(slot).cloned())
    }

    fn rotate_backups(&self, newest: &Backup) -> ScoringResult<()> {
        let newest = serde_json::to_value(newest)?;
        self.mutate(|state| {
            state.backup2 = state.backup1.take();
            state.backup1 = Some(newest);
            Ok(())
        })
    }
}
