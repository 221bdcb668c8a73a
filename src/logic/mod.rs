//! League business logic: standings, result entry, group reassignment and scheduling.

mod collation;
mod fixtures;
mod match_update;
mod ranking;
mod reassignment;
mod schedule;
mod setup;
mod standings;

pub use collation::{sort_teams_by_name, NameCollator};
pub use fixtures::{FixtureGenerator, RoundRobin};
pub use match_update::{apply_match_result, record_result};
pub use ranking::{ranked_standings, Standing};
pub use reassignment::{move_team, MoveTeam};
pub use schedule::{assign_courts, sort_by_start_time, ScheduleOptions};
pub use setup::add_group;
pub use standings::{
    recalculate, recalculate_group, POINTS_DRAW, POINTS_LOSS, POINTS_TIEBREAK_LOSS,
    POINTS_TIEBREAK_WIN, POINTS_WIN,
};
