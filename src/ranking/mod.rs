//! Ranking engine
//!
//! Pure functions from contestant records to ranked age groups. The results
//! view and every export go through the same functions, so what is shown is
//! what is exported.

mod engine;
mod groups;

pub use engine::{rank, RankedContestant};
pub use groups::{group_by_age, rank_groups, rank_groups_filtered, RankedGroup};
