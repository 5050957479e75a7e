//! Contest catalog
//!
//! The set of contests is fixed at build time; the catalog is a pure lookup
//! table with no state.

use std::fmt;

use serde::Serialize;

/// One of the fixed competitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Contest {
    pub id: &'static str,
    pub name: &'static str,
    pub path: &'static str,
}

impl fmt::Display for Contest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

const CONTESTS: &[Contest] = &[
    Contest {
        id: "iq",
        name: "IQ Quiz Contest",
        path: "/iq",
    },
    Contest {
        id: "sanskriti",
        name: "Sanskriti Contest",
        path: "/sanskriti",
    },
    Contest {
        id: "maths",
        name: "Maths Quiz Contest",
        path: "/maths",
    },
    Contest {
        id: "sudoku",
        name: "Sudoku Contest",
        path: "/sudoku",
    },
];

/// Static registry of known contests
#[derive(Debug, Clone, Copy)]
pub struct ContestCatalog {
    contests: &'static [Contest],
}

impl Default for ContestCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl ContestCatalog {
    /// The built-in catalog
    pub fn standard() -> Self {
        Self {
            contests: CONTESTS,
        }
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> {
        self.contests.iter().map(|c| c.id)
    }

    pub fn by_id(&self, id: &str) -> Option<&'static Contest> {
        self.contests.iter().find(|c| c.id == id)
    }

    /// Look up by route path; the leading slash is optional and case is ignored
    pub fn by_path(&self, path: &str) -> Option<&'static Contest> {
        let normalized = path.strip_prefix('/').unwrap_or(path).to_lowercase();
        self.contests
            .iter()
            .find(|c| c.path.trim_start_matches('/') == normalized)
    }

    /// Resolve user input that may be an id or a path
    pub fn find(&self, identifier: &str) -> Option<&'static Contest> {
        let identifier = identifier.trim();
        self.by_id(identifier).or_else(|| self.by_path(identifier))
    }

    /// Contests ordered by display name
    pub fn sorted_by_name(&self) -> Vec<&'static Contest> {
        let mut sorted: Vec<_> = self.contests.iter().collect();
        sorted.sort_by(|a, b| a.name.cmp(b.name));
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_id() {
        let catalog = ContestCatalog::standard();
        assert_eq!(catalog.by_id("maths").unwrap().name, "Maths Quiz Contest");
        assert!(catalog.by_id("chess").is_none());
    }

    #[test]
    fn test_lookup_by_path() {
        let catalog = ContestCatalog::standard();
        assert_eq!(catalog.by_path("/sudoku").unwrap().id, "sudoku");
        assert_eq!(catalog.by_path("IQ").unwrap().id, "iq");
        assert!(catalog.by_path("/").is_none());
    }

    #[test]
    fn test_find_accepts_id_or_path() {
        let catalog = ContestCatalog::standard();
        assert_eq!(catalog.find("sanskriti").unwrap().id, "sanskriti");
        assert_eq!(catalog.find("/Sanskriti").unwrap().id, "sanskriti");
    }

    #[test]
    fn test_sorted_by_name() {
        let catalog = ContestCatalog::standard();
        let names: Vec<_> = catalog.sorted_by_name().iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            vec![
                "IQ Quiz Contest",
                "Maths Quiz Contest",
                "Sanskriti Contest",
                "Sudoku Contest"
            ]
        );
    }
}
