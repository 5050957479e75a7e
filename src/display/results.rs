//! Ranked results display

use crate::models::{age_group_label, Contest};
use crate::ranking::RankedGroup;

/// Format ranked age groups as one table per group
pub fn format_results(contest: &Contest, groups: &[RankedGroup<'_>], over_time_note: &str) -> String {
    if groups.is_empty() {
        return format!("No results for {}.", contest.name);
    }

    let name_width = groups
        .iter()
        .flat_map(|g| &g.contestants)
        .map(|c| c.record.contestant_name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = format!("Results: {}\n", contest.name);

    for group in groups {
        output.push('\n');
        output.push_str(&format!("{}\n", age_group_label(group.age_group)));
        output.push_str(&format!(
            "  {:>4}  {:<name_width$}  {:>6}  {:>10}  {}\n",
            "Rank",
            "Name",
            "Score",
            "Time (min)",
            "Note",
            name_width = name_width,
        ));
        output.push_str(&format!(
            "  {:->4}  {:-<name_width$}  {:->6}  {:->10}  {:-<4}\n",
            "",
            "",
            "",
            "",
            "",
            name_width = name_width,
        ));

        for ranked in &group.contestants {
            let note = if ranked.over_time { over_time_note } else { "" };
            output.push_str(
                format!(
                    "  {:>4}  {:<name_width$}  {:>6}  {:>10}  {}",
                    ranked.rank,
                    ranked.record.contestant_name,
                    ranked.record.effective_score(),
                    ranked.record.total_time_minutes,
                    note,
                    name_width = name_width,
                )
                .trim_end(),
            );
            output.push('\n');
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContestCatalog, ContestantFields, ContestantRecord};
    use crate::ranking::rank_groups;

    fn record(name: &str, score: f64, minutes: f64) -> ContestantRecord {
        ContestantRecord::new(ContestantFields {
            contestant_name: name.into(),
            age_group: "Group 4".into(),
            score,
            total_time_minutes: minutes,
            ..Default::default()
        })
    }

    #[test]
    fn test_format_results() {
        let contest = ContestCatalog::standard().by_id("sudoku").unwrap();
        let records = vec![record("Late", 19.0, 40.0), record("Quick", 11.0, 7.0)];
        let groups = rank_groups(&records, 23.0);

        let output = format_results(contest, &groups, "Over 23 min");
        assert!(output.starts_with("Results: Sudoku Contest\n"));
        assert!(output.contains("Group 4: 15-18 Yrs"));

        let quick = output.lines().find(|l| l.contains("Quick")).unwrap();
        assert!(quick.trim_start().starts_with('1'));
        assert!(quick.ends_with('7'));

        let late = output.lines().find(|l| l.contains("Late")).unwrap();
        assert!(late.trim_start().starts_with('2'));
        assert!(late.ends_with("Over 23 min"));
    }

    #[test]
    fn test_format_no_results() {
        let contest = ContestCatalog::standard().by_id("iq").unwrap();
        assert_eq!(format_results(contest, &[], "Over 23 min"), "No results for IQ Quiz Contest.");
    }
}
