//! League standings: library with models and business logic.

pub mod logic;
pub mod models;

pub use logic::{
    add_group, apply_match_result, assign_courts, move_team, ranked_standings, recalculate,
    recalculate_group, record_result, sort_by_start_time, sort_teams_by_name, FixtureGenerator,
    MoveTeam, NameCollator, RoundRobin, ScheduleOptions, Standing, POINTS_DRAW, POINTS_LOSS,
    POINTS_TIEBREAK_LOSS, POINTS_TIEBREAK_WIN, POINTS_WIN,
};
pub use models::{
    Competition, CompetitionId, Group, LeagueError, LeagueTable, Match, MatchId, Team, TeamId,
    TeamStat,
};
