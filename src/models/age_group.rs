//! Age groups
//!
//! Age groups are free-form on records; this module only knows the
//! conventional labels and the grouping sentinel.

/// Grouping label for records with a blank age group
pub const OTHER_GROUP: &str = "Other";

/// A conventional age group and its human-readable label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeGroup {
    pub value: &'static str,
    pub label: &'static str,
}

pub const AGE_GROUPS: &[AgeGroup] = &[
    AgeGroup {
        value: "Group 1",
        label: "Group 1: 5-7 Yrs",
    },
    AgeGroup {
        value: "Group 2",
        label: "Group 2: 8-10 Yrs",
    },
    AgeGroup {
        value: "Group 3",
        label: "Group 3: 11-14 Yrs",
    },
    AgeGroup {
        value: "Group 4",
        label: "Group 4: 15-18 Yrs",
    },
];

/// Label for a known group value, or the value itself
pub fn age_group_label(value: &str) -> &str {
    AGE_GROUPS
        .iter()
        .find(|g| g.value == value)
        .map(|g| g.label)
        .unwrap_or(value)
}

/// Key used to bucket a record for display and export
pub fn normalize_age_group(value: &str) -> &str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        OTHER_GROUP
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_label() {
        assert_eq!(age_group_label("Group 3"), "Group 3: 11-14 Yrs");
    }

    #[test]
    fn test_unknown_label_passes_through() {
        assert_eq!(age_group_label("Seniors"), "Seniors");
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize_age_group("  Group 1 "), "Group 1");
        assert_eq!(normalize_age_group("   "), OTHER_GROUP);
        assert_eq!(normalize_age_group(""), OTHER_GROUP);
        assert_eq!(normalize_age_group("Seniors"), "Seniors");
    }
}
