//! Flat result rows shared by every export encoding

use serde::Serialize;

use crate::models::{ContestCatalog, Store};
use crate::ranking::rank_groups;

/// One ranked contestant, flattened for export
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRow {
    pub contest: String,
    pub age_group: String,
    pub rank: usize,
    pub contestant: String,
    /// Clamped score
    pub score: f64,
    /// Stored minutes as written, not clamped
    pub time: String,
    pub note: String,
}

/// All rows of one contest
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSection {
    pub contest_id: String,
    pub contest_name: String,
    pub rows: Vec<ExportRow>,
}

/// Note attached to over-time rows
pub fn over_time_note(threshold_minutes: f64) -> String {
    format!("Over {} min", threshold_minutes)
}

/// Ranked rows of one contest, age groups in lexicographic order
///
/// An unknown contest yields no rows.
pub fn build_rows(
    store: &Store,
    catalog: &ContestCatalog,
    contest_id: &str,
    over_time_threshold: f64,
) -> Vec<ExportRow> {
    let Some(contest) = catalog.by_id(contest_id) else {
        return Vec::new();
    };
    let note = over_time_note(over_time_threshold);

    rank_groups(store.contestants(contest.id), over_time_threshold)
        .into_iter()
        .flat_map(|group| {
            let note = &note;
            group.contestants.into_iter().map(move |ranked| ExportRow {
                contest: contest.name.to_string(),
                age_group: group.age_group.to_string(),
                rank: ranked.rank,
                contestant: ranked.record.contestant_name.clone(),
                score: ranked.record.effective_score(),
                time: ranked.record.total_time_minutes.to_string(),
                note: if ranked.over_time {
                    note.clone()
                } else {
                    String::new()
                },
            })
        })
        .collect()
}

/// One section per contest, ordered by contest name
pub fn build_all_contests(
    store: &Store,
    catalog: &ContestCatalog,
    over_time_threshold: f64,
) -> Vec<ExportSection> {
    catalog
        .sorted_by_name()
        .into_iter()
        .map(|contest| ExportSection {
            contest_id: contest.id.to_string(),
            contest_name: contest.name.to_string(),
            rows: build_rows(store, catalog, contest.id, over_time_threshold),
        })
        .collect()
}
