//! Contest Scoring - records, ranks and exports contest results
//!
//! This library is the scoring data layer for running several contests at
//! once: contestants are recorded per contest, ranked within their age group
//! and exported for spreadsheets, printing or the clipboard.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and persisted settings
//! - `error`: Custom error types
//! - `models`: Contest catalog, contestant records, store and backup snapshots
//! - `storage`: Local and remote-synchronized backends behind `DataStore`
//! - `backup`: Two-slot rotating backups, restore and reset
//! - `ranking`: Per-age-group ranking
//! - `export`: CSV, spreadsheet, document and clipboard exports
//! - `display`: Plain-text tables for the CLI
//! - `cli`: Command handlers for the `contest` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use contest_scoring::config::{paths::ScoringPaths, settings::Settings};
//! use contest_scoring::ranking::rank_groups;
//! use contest_scoring::storage::DataStore;
//!
//! let paths = ScoringPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let store = DataStore::connect(&paths, &settings)?;
//!
//! let data = store.load();
//! for group in rank_groups(data.contestants("iq"), settings.over_time_threshold_minutes) {
//!     println!("{}: {} ranked", group.age_group, group.contestants.len());
//! }
//! ```

pub mod backup;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod ranking;
pub mod storage;

pub use error::{ScoringError, ScoringResult};
