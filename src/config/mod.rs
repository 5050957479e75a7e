//! Configuration module for contest scoring
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence (remote store, over-time threshold, export title)

pub mod paths;
pub mod settings;

pub use paths::ScoringPaths;
pub use settings::Settings;
