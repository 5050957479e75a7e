//! Core data models for contest scoring
//!
//! This module contains the data structures of the scoring domain: the
//! contest catalog, contestant records, age groups, the per-contest store
//! and backup snapshots.

pub mod age_group;
pub mod contest;
pub mod contestant;
pub mod ids;
pub mod store;

pub use age_group::{age_group_label, normalize_age_group, AgeGroup, AGE_GROUPS, OTHER_GROUP};
pub use contest::{Contest, ContestCatalog};
pub use contestant::{
    clamp_score, clamp_time, ContestantFields, ContestantRecord, ContestantUpdate, MAX_SCORE,
};
pub use ids::ContestantId;
pub use store::{Backup, BackupHeader, Store};
