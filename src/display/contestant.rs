//! Contestant display formatting
//!
//! Formats the contest catalog and contestant lists for terminal output.

use crate::models::{age_group_label, Contest, ContestantRecord};
use crate::ranking::group_by_age;

/// Format the contest catalog as a table
pub fn format_contest_list(contests: &[&Contest]) -> String {
    if contests.is_empty() {
        return "No contests configured.".to_string();
    }

    let id_width = contests.iter().map(|c| c.id.len()).max().unwrap_or(2).max(2);
    let name_width = contests
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<id_width$}  {:<name_width$}  {}\n",
        "ID",
        "Name",
        "Path",
        id_width = id_width,
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<id_width$}  {:-<name_width$}  {:-<4}\n",
        "",
        "",
        "",
        id_width = id_width,
        name_width = name_width,
    ));

    for contest in contests {
        output.push_str(&format!(
            "{:<id_width$}  {:<name_width$}  {}\n",
            contest.id,
            contest.name,
            contest.path,
            id_width = id_width,
            name_width = name_width,
        ));
    }

    output
}

/// Format a contest's contestants grouped by age group, in entry order
///
/// `query` narrows the list to names containing it, ignoring case.
pub fn format_contestant_list(
    contest: &Contest,
    records: &[ContestantRecord],
    query: Option<&str>,
) -> String {
    let needle = query.map(|q| q.trim().to_lowercase()).unwrap_or_default();
    let matching: Vec<&ContestantRecord> = records
        .iter()
        .filter(|r| needle.is_empty() || r.contestant_name.to_lowercase().contains(&needle))
        .collect();

    if matching.is_empty() {
        return if needle.is_empty() {
            format!("No contestants in {} yet.", contest.name)
        } else {
            format!("No contestants in {} match \"{}\".", contest.name, needle)
        };
    }

    let name_width = matching
        .iter()
        .map(|r| r.contestant_name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let id_width = matching
        .iter()
        .map(|r| r.id.as_str().len())
        .max()
        .unwrap_or(2)
        .max(2);

    let mut output = format!("{}\n", contest.name);

    for (group, members) in group_by_age(matching.iter().copied()) {
        output.push('\n');
        output.push_str(&format!("{} ({})\n", age_group_label(group), members.len()));
        output.push_str(&format!(
            "  {:<id_width$}  {:<name_width$}  {:>6}  {:>10}\n",
            "ID",
            "Name",
            "Score",
            "Time (min)",
            id_width = id_width,
            name_width = name_width,
        ));
        output.push_str(&format!(
            "  {:-<id_width$}  {:-<name_width$}  {:->6}  {:->10}\n",
            "",
            "",
            "",
            "",
            id_width = id_width,
            name_width = name_width,
        ));
        for record in members {
            output.push_str(&format!(
                "  {:<id_width$}  {:<name_width$}  {:>6}  {:>10}\n",
                record.id.as_str(),
                record.contestant_name,
                record.score,
                record.total_time_minutes,
                id_width = id_width,
                name_width = name_width,
            ));
        }
    }

    output
}

/// Format a single contestant's details
pub fn format_contestant_details(record: &ContestantRecord) -> String {
    let mut output = String::new();
    output.push_str(&format!("Contestant: {}\n", record.contestant_name));
    output.push_str(&format!("  ID:         {}\n", record.id));
    output.push_str(&format!("  Contest:    {}\n", record.contest_name));
    output.push_str(&format!(
        "  Age Group:  {}\n",
        age_group_label(&record.age_group)
    ));
    output.push_str(&format!("  Score:      {}\n", record.score));
    output.push_str(&format!("  Time (min): {}\n", record.total_time_minutes));
    output
}
