//! Results CLI command

use crate::config::settings::Settings;
use crate::display::results::format_results;
use crate::error::ScoringResult;
use crate::export::over_time_note;
use crate::ranking::rank_groups_filtered;
use crate::storage::DataStore;

use super::resolve_contest;

/// Print ranked results of one contest, optionally narrowed by name
pub fn handle_results_command(
    store: &DataStore,
    settings: &Settings,
    contest: &str,
    search: Option<&str>,
) -> ScoringResult<()> {
    let contest = resolve_contest(store, contest)?;
    let threshold = settings.over_time_threshold_minutes;

    let data = store.load();
    let groups = rank_groups_filtered(
        data.contestants(contest.id),
        search.unwrap_or_default(),
        threshold,
    );

    println!(
        "{}",
        format_results(contest, &groups, &over_time_note(threshold)).trim_end()
    );
    Ok(())
}
