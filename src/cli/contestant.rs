//! Contestant CLI commands
//!
//! Data entry: add, edit and list the contestants of a contest.

use clap::Subcommand;
use tracing::warn;

use crate::display::contestant::{format_contestant_details, format_contestant_list};
use crate::error::{ScoringError, ScoringResult};
use crate::models::{ContestantFields, ContestantId, ContestantUpdate, AGE_GROUPS};
use crate::storage::DataStore;

use super::resolve_contest;

/// Contestant subcommands
#[derive(Subcommand)]
pub enum ContestantCommands {
    /// Add a contestant to a contest
    Add {
        /// Contest ID or path (e.g. "iq" or "/iq")
        contest: String,
        /// Contestant name
        #[arg(short, long)]
        name: String,
        /// Age group (e.g. "Group 1")
        #[arg(short, long)]
        age_group: String,
        /// Score out of 20
        #[arg(short, long, allow_negative_numbers = true)]
        score: f64,
        /// Total time in minutes
        #[arg(short, long, allow_negative_numbers = true)]
        time: f64,
    },
    /// Edit an existing contestant
    Update {
        /// Contest ID or path
        contest: String,
        /// Contestant ID
        id: ContestantId,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New age group
        #[arg(short, long)]
        age_group: Option<String>,
        /// New score
        #[arg(short, long, allow_negative_numbers = true)]
        score: Option<f64>,
        /// New total time in minutes
        #[arg(short, long, allow_negative_numbers = true)]
        time: Option<f64>,
    },
    /// List contestants grouped by age group
    List {
        /// Contest ID or path
        contest: String,
        /// Only show names containing this text
        #[arg(long)]
        search: Option<String>,
    },
}

/// Handle a contestant command
pub fn handle_contestant_command(store: &DataStore, cmd: ContestantCommands) -> ScoringResult<()> {
    match cmd {
        ContestantCommands::Add {
            contest,
            name,
            age_group,
            score,
            time,
        } => {
            let contest = resolve_contest(store, &contest)?;
            if name.trim().is_empty() {
                return Err(ScoringError::Validation(
                    "Contestant name cannot be empty".into(),
                ));
            }
            if !AGE_GROUPS.iter().any(|g| g.value == age_group.trim()) {
                warn!(age_group = %age_group, "unlisted age group");
            }

            let record = store.add_contestant(
                contest.id,
                ContestantFields {
                    contest_name: contest.name.to_string(),
                    contestant_name: name,
                    age_group,
                    score,
                    total_time_minutes: time,
                },
            )?;

            println!("Added contestant to {}", contest.name);
            println!();
            print!("{}", format_contestant_details(&record));
        }

        ContestantCommands::Update {
            contest,
            id,
            name,
            age_group,
            score,
            time,
        } => {
            let contest = resolve_contest(store, &contest)?;
            let update = ContestantUpdate {
                contestant_name: name,
                age_group,
                score,
                total_time_minutes: time,
            };
            if update.is_empty() {
                return Err(ScoringError::Validation(
                    "Nothing to update: pass at least one of --name, --age-group, --score, --time"
                        .into(),
                ));
            }

            let record =
                store.update_contestant(contest.id, &id, &update)?;

            println!("Updated contestant");
            println!();
            print!("{}", format_contestant_details(&record));
        }

        ContestantCommands::List { contest, search } => {
            let contest = resolve_contest(store, &contest)?;
            let data = store.load();
            println!(
                "{}",
                format_contestant_list(contest, data.contestants(contest.id), search.as_deref())
                    .trim_end()
            );
        }
    }

    Ok(())
}
