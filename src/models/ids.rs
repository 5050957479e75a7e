//! Contestant identifiers
//!
//! Ids are opaque strings on disk so that records written by any earlier
//! client load unchanged; freshly generated ids are UUID v4.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Identifier of a contestant record, unique within its contest
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContestantId(String);

impl ContestantId {
    /// Generate a fresh collision-resistant id
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContestantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl FromStr for ContestantId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().to_string()))
    }
}

impl From<&str> for ContestantId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_uuids() {
        let id = ContestantId::generate();
        assert!(Uuid::parse_str(id.as_str()).is_ok());
    }

    #[test]
    fn test_generated_ids_differ() {
        let id1 = ContestantId::generate();
        let id2 = ContestantId::generate();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_legacy_ids_round_trip() {
        let json = r#""id_1738000000000_k3j9x2a""#;
        let id: ContestantId = serde_json::from_str(json).unwrap();
        assert_eq!(id.as_str(), "id_1738000000000_k3j9x2a");
        assert_eq!(serde_json::to_string(&id).unwrap(), json);
    }

    #[test]
    fn test_parse_trims_input() {
        let id: ContestantId = " abc-123 ".parse().unwrap();
        assert_eq!(id.as_str(), "abc-123");
        assert_eq!(format!("[{:<8}]", id), "[abc-123 ]");
    }
}
