//! Age-group bucketing
//!
//! Buckets are keyed by the normalized age group and iterate in
//! lexicographic label order. Ranks restart at 1 in every bucket.

use std::collections::BTreeMap;

use crate::models::{normalize_age_group, ContestantRecord};

use super::engine::{rank, RankedContestant};

/// Contestants of one age group, ranked
#[derive(Debug, Clone, PartialEq)]
pub struct RankedGroup<'a> {
    pub age_group: &'a str,
    pub contestants: Vec<RankedContestant<'a>>,
}

/// Bucket records by normalized age group, keeping insertion order
pub fn group_by_age<'a, I>(records: I) -> BTreeMap<&'a str, Vec<&'a ContestantRecord>>
where
    I: IntoIterator<Item = &'a ContestantRecord>,
{
    let mut groups: BTreeMap<&str, Vec<&ContestantRecord>> = BTreeMap::new();
    for record in records {
        groups
            .entry(normalize_age_group(&record.age_group))
            .or_default()
            .push(record);
    }
    groups
}

/// Group and rank every record
pub fn rank_groups(records: &[ContestantRecord], over_time_threshold: f64) -> Vec<RankedGroup<'_>> {
    into_ranked(group_by_age(records), over_time_threshold)
}

/// Group and rank the records whose name contains `query`, ignoring case
///
/// Ranks are assigned within the matching subset. Groups with no match are
/// left out. A blank query matches everything.
pub fn rank_groups_filtered<'a>(
    records: &'a [ContestantRecord],
    query: &str,
    over_time_threshold: f64,
) -> Vec<RankedGroup<'a>> {
    let needle = query.trim().to_lowercase();
    let matching = records
        .iter()
        .filter(|r| needle.is_empty() || r.contestant_name.to_lowercase().contains(&needle));
    into_ranked(group_by_age(matching), over_time_threshold)
}

fn into_ranked<'a>(
    groups: BTreeMap<&'a str, Vec<&'a ContestantRecord>>,
    over_time_threshold: f64,
) -> Vec<RankedGroup<'a>> {
    groups
        .into_iter()
        .map(|(age_group, members)| RankedGroup {
            age_group,
            contestants: rank(members, over_time_threshold),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContestantFields;

    fn record(name: &str, group: &str, score: f64, minutes: f64) -> ContestantRecord {
        ContestantRecord::new(ContestantFields {
            contestant_name: name.into(),
            age_group: group.into(),
            score,
            total_time_minutes: minutes,
            ..Default::default()
        })
    }

    fn sample() -> Vec<ContestantRecord> {
        vec![
            record("Asha", "Group 2", 12.0, 10.0),
            record("Bilal", "Group 1", 9.0, 8.0),
            record("Chitra", "Group 2", 15.0, 11.0),
            record("Dev", "   ", 7.0, 5.0),
            record("Esha", "Group 1", 18.0, 25.0),
        ]
    }

    #[test]
    fn test_groups_sorted_and_ranks_restart() {
        let records = sample();
        let groups = rank_groups(&records, 23.0);

        let labels: Vec<_> = groups.iter().map(|g| g.age_group).collect();
        assert_eq!(labels, vec!["Group 1", "Group 2", "Other"]);

        let group1: Vec<_> = groups[0]
            .contestants
            .iter()
            .map(|c| (c.record.contestant_name.as_str(), c.rank, c.over_time))
            .collect();
        assert_eq!(group1, vec![("Bilal", 1, false), ("Esha", 2, true)]);

        let group2: Vec<_> = groups[1]
            .contestants
            .iter()
            .map(|c| (c.record.contestant_name.as_str(), c.rank))
            .collect();
        assert_eq!(group2, vec![("Chitra", 1), ("Asha", 2)]);

        assert_eq!(groups[2].contestants[0].rank, 1);
    }

    #[test]
    fn test_group_by_age_keeps_insertion_order() {
        let records = sample();
        let groups = group_by_age(&records);
        let names: Vec<_> = groups["Group 2"]
            .iter()
            .map(|r| r.contestant_name.as_str())
            .collect();
        assert_eq!(names, vec!["Asha", "Chitra"]);
    }

    #[test]
    fn test_filter_is_case_insensitive_and_skips_empty_groups() {
        let records = sample();
        let groups = rank_groups_filtered(&records, "SHA", 23.0);

        let labels: Vec<_> = groups.iter().map(|g| g.age_group).collect();
        assert_eq!(labels, vec!["Group 1", "Group 2"]);
        assert_eq!(groups[0].contestants[0].record.contestant_name, "Esha");
        // Ranked within the filtered subset
        assert_eq!(groups[0].contestants[0].rank, 1);
    }

    #[test]
    fn test_blank_filter_matches_all() {
        let records = sample();
        assert_eq!(
            rank_groups_filtered(&records, "  ", 23.0),
            rank_groups(&records, 23.0)
        );
    }

    #[test]
    fn test_no_records_no_groups() {
        assert!(rank_groups(&[], 23.0).is_empty());
    }
}
