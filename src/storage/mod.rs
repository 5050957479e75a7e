//! Storage layer for contest scoring
//!
//! `DataStore` is the session's handle on the store. It is built once at
//! startup, either over local JSON files or over the shared remote store,
//! and every operation goes through it.

pub mod backend;
pub mod file_io;
pub mod http;
pub mod local;
pub mod remote;

pub use backend::{BackendKind, BackupSlot, StorageBackend};
pub use file_io::{read_json_value, write_bytes_atomic, write_json_atomic};
pub use http::HttpTransport;
pub use local::LocalBackend;
pub use remote::{RemoteBackend, RemoteState, RemoteTransport};

use tracing::{debug, info, warn};

use crate::config::paths::ScoringPaths;
use crate::config::settings::Settings;
use crate::error::{ScoringError, ScoringResult};
use crate::models::{
    ContestCatalog, ContestantFields, ContestantId, ContestantRecord, ContestantUpdate, Store,
};

/// Single source of truth for contestant records
pub struct DataStore {
    backend: Box<dyn StorageBackend>,
    catalog: ContestCatalog,
}

impl DataStore {
    /// Wrap an already-selected backend
    pub fn new(backend: Box<dyn StorageBackend>, catalog: ContestCatalog) -> Self {
        Self { backend, catalog }
    }

    /// Open the local file backend
    pub fn local(paths: ScoringPaths) -> ScoringResult<Self> {
        paths.ensure_directories()?;
        Ok(Self::new(
            Box::new(LocalBackend::new(paths)),
            ContestCatalog::standard(),
        ))
    }

    /// Pick the backend for this session
    ///
    /// With a remote URL configured the remote store is probed once; if it
    /// cannot be reached the local backend is used for the whole session.
    pub fn connect(paths: &ScoringPaths, settings: &Settings) -> ScoringResult<Self> {
        if let Some(url) = settings.remote_url.as_deref() {
            let probe = HttpTransport::new(url, settings.remote_timeout())
                .and_then(|transport| RemoteBackend::probe(Box::new(transport)));
            match probe {
                Ok(backend) => {
                    info!(url = %url, "using remote store");
                    return Ok(Self::new(Box::new(backend), ContestCatalog::standard()));
                }
                Err(e) => {
                    warn!(url = %url, error = %e, "remote store unavailable; falling back to local storage");
                }
            }
        }
        Self::local(paths.clone())
    }

    pub fn kind(&self) -> BackendKind {
        self.backend.kind()
    }

    pub fn catalog(&self) -> &ContestCatalog {
        &self.catalog
    }

    pub(crate) fn backend(&self) -> &dyn StorageBackend {
        self.backend.as_ref()
    }

    /// Load the full store; never fails
    ///
    /// Every known contest is present. Unreadable payloads degrade to empty
    /// lists.
    pub fn load(&self) -> Store {
        let raw = match self.backend.read_data() {
            Ok(raw) => raw,
            Err(e) => {
                warn!(backend = %self.kind(), error = %e, "store unreadable; using empty store");
                None
            }
        };
        Store::from_value(raw.as_ref(), &self.catalog)
    }

    /// Persist the full store
    pub fn save(&self, store: &Store) -> ScoringResult<()> {
        self.backend.write_data(store)?;
        debug!(backend = %self.kind(), contestants = store.len(), "store saved");
        Ok(())
    }

    /// Add a contestant to a contest and return the stored record
    pub fn add_contestant(
        &self,
        contest_id: &str,
        fields: ContestantFields,
    ) -> ScoringResult<ContestantRecord> {
        let contest = self
            .catalog
            .by_id(contest_id)
            .ok_or_else(|| ScoringError::contest_not_found(contest_id))?;

        let mut record = ContestantRecord::new(fields);
        record.contest_name = contest.name.to_string();

        let mut store = self.load();
        store
            .contestants_mut(contest.id)
            .ok_or_else(|| ScoringError::contest_not_found(contest_id))?
            .push(record.clone());
        self.save(&store)?;

        info!(contest = %contest.id, id = %record.id, "contestant added");
        Ok(record)
    }

    /// Merge `update` into an existing contestant
    ///
    /// Returns a not-found error, leaving the store untouched, if the contest
    /// holds no record with `id`.
    pub fn update_contestant(
        &self,
        contest_id: &str,
        id: &ContestantId,
        update: &ContestantUpdate,
    ) -> ScoringResult<ContestantRecord> {
        let mut store = self.load();
        let record = store
            .contestants_mut(contest_id)
            .and_then(|list| list.iter_mut().find(|r| &r.id == id))
            .ok_or_else(|| ScoringError::contestant_not_found(id.as_str()))?;

        record.apply(update);
        let updated = record.clone();
        self.save(&store)?;

        info!(contest = %contest_id, id = %updated.id, "contestant updated");
        Ok(updated)
    }
}
