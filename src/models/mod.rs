//! Data structures for the league: competitions, groups, teams and matches.

mod competition;
mod game;
mod team;
pub mod wire;

pub use competition::{Competition, CompetitionId, Group, LeagueError, LeagueTable};
pub use game::{Match, MatchId};
pub use team::{Team, TeamId, TeamStat};
