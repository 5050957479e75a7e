//! Store and backup snapshot models
//!
//! A `Store` maps contest id to the contest's records in insertion order.
//! Decoding from JSON is lenient: records are decoded one by one, so a
//! record that cannot be read is dropped without taking its contest's other
//! records with it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use super::contest::ContestCatalog;
use super::contestant::ContestantRecord;

/// Mapping from contest id to its ordered contestant records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Store {
    contests: BTreeMap<String, Vec<ContestantRecord>>,
}

impl Store {
    /// A store with an empty list for every contest in the catalog
    pub fn empty(catalog: &ContestCatalog) -> Self {
        let mut store = Self::default();
        store.ensure_contests(catalog);
        store
    }

    /// Decode a persisted payload, degrading malformed parts to empty lists
    pub fn from_value(value: Option<&Value>, catalog: &ContestCatalog) -> Self {
        let mut store = Self::default();

        match value {
            Some(Value::Object(map)) => {
                for (contest_id, records) in map {
                    store
                        .contests
                        .insert(contest_id.clone(), decode_records(contest_id, records));
                }
            }
            Some(Value::Null) | None => {}
            Some(other) => {
                warn!(kind = json_kind(other), "stored payload is not an object; using empty store");
            }
        }

        store.ensure_contests(catalog);
        store
    }

    /// Make sure every known contest has at least an empty list
    pub fn ensure_contests(&mut self, catalog: &ContestCatalog) {
        for id in catalog.ids() {
            self.contests.entry(id.to_string()).or_default();
        }
    }

    /// Records of one contest (empty if the contest is unknown)
    pub fn contestants(&self, contest_id: &str) -> &[ContestantRecord] {
        self.contests
            .get(contest_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contestants_mut(&mut self, contest_id: &str) -> Option<&mut Vec<ContestantRecord>> {
        self.contests.get_mut(contest_id)
    }

    pub fn contest_ids(&self) -> impl Iterator<Item = &str> {
        self.contests.keys().map(String::as_str)
    }

    /// Total number of records across all contests
    pub fn len(&self) -> usize {
        self.contests.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A timestamped full-store snapshot held in a backup slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Backup {
    /// Epoch milliseconds
    pub timestamp: i64,
    pub data: Store,
}

/// Backup fields needed for listing; the snapshot payload is skipped
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct BackupHeader {
    pub timestamp: i64,
}

/// Decode one contest's list record by record
fn decode_records(contest_id: &str, value: &Value) -> Vec<ContestantRecord> {
    let Value::Array(items) = value else {
        warn!(contest = %contest_id, kind = json_kind(value), "contest list is not an array; using empty list");
        return Vec::new();
    };

    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            match ContestantRecord::deserialize(item) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!(contest = %contest_id, index, error = %e, "dropping unreadable record");
                    None
                }
            }
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
