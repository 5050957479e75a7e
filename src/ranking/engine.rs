//! Rank ordering within one group of contestants

use std::cmp::Ordering;

use serde::Serialize;

use crate::models::ContestantRecord;

/// A record with its position in a ranked group
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedContestant<'a> {
    /// 1-based, sequential within the group
    pub rank: usize,
    pub over_time: bool,
    pub record: &'a ContestantRecord,
}

/// Rank records for one group
///
/// On-time records (time at or under the threshold) come first, then
/// over-time ones. Each partition is ordered by score descending with ties
/// broken by time ascending. Exact ties keep their input order.
pub fn rank<'a, I>(records: I, over_time_threshold: f64) -> Vec<RankedContestant<'a>>
where
    I: IntoIterator<Item = &'a ContestantRecord>,
{
    let (mut on_time, mut over_time): (Vec<_>, Vec<_>) = records
        .into_iter()
        .partition(|r| !r.is_over_time(over_time_threshold));

    on_time.sort_by(|a, b| compare(a, b));
    over_time.sort_by(|a, b| compare(a, b));

    let on_time_count = on_time.len();
    on_time
        .into_iter()
        .chain(over_time)
        .enumerate()
        .map(|(index, record)| RankedContestant {
            rank: index + 1,
            over_time: index >= on_time_count,
            record,
        })
        .collect()
}

fn compare(a: &ContestantRecord, b: &ContestantRecord) -> Ordering {
    b.effective_score()
        .partial_cmp(&a.effective_score())
        .unwrap_or(Ordering::Equal)
        .then_with(|| {
            a.total_time_minutes
                .partial_cmp(&b.total_time_minutes)
                .unwrap_or(Ordering::Equal)
        })
}
