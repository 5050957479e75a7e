//! Display formatting for terminal output
//!
//! Plain fixed-width tables for contest lists, contestants, ranked results
//! and backups.

pub mod backup;
pub mod contestant;
pub mod results;

pub use backup::format_backup_list;
pub use contestant::{format_contest_list, format_contestant_details, format_contestant_list};
pub use results::format_results;
