//! Competition, LeagueTable, Group and LeagueError.

use crate::models::game::{Match, MatchId};
use crate::models::team::{Team, TeamId, TeamStat};
use crate::models::wire;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Errors returned to the caller when an edit cannot be applied.
///
/// The input snapshot is never touched when one of these is returned.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum LeagueError {
    #[error("Team id must not be empty")]
    EmptyTeamId,
    #[error("Group name must not be empty")]
    EmptyGroupName,
    #[error("Court count must be at least 1 (got {0})")]
    InvalidCourtCount(u32),
    #[error("Group '{0}' not found")]
    GroupNotFound(String),
    #[error("Team {team_id} is not in group '{group}'")]
    TeamNotInGroup { team_id: TeamId, group: String },
    #[error("Match {0} not found in group")]
    MatchNotFound(MatchId),
    #[error("Invalid start time '{0}' (expected HH:MM)")]
    InvalidStartTime(String),
    #[error("A group named '{0}' already exists")]
    DuplicateGroupName(String),
    #[error("Team name must not be empty")]
    EmptyTeamName,
    #[error("A team named '{0}' already exists")]
    DuplicateTeamName(String),
    #[error("Name collation unavailable: {0}")]
    Collator(String),
}

/// Unique identifier for a competition.
pub type CompetitionId = Uuid;

/// One group of the preliminary round: its teams' records and its fixtures.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    #[serde(default)]
    pub teams: Vec<TeamStat>,
    /// `None` when the snapshot carried no usable match list; healed to empty on the next
    /// recalculation.
    #[serde(default, deserialize_with = "wire::lenient_matches")]
    pub matches: Option<Vec<Match>>,
}

impl Group {
    /// Empty group with an empty match list.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            teams: Vec::new(),
            matches: Some(Vec::new()),
        }
    }

    /// Group with fresh zeroed records for the given teams and no fixtures yet.
    pub fn with_teams(name: impl Into<String>, teams: Vec<Team>) -> Self {
        Self {
            teams: teams.into_iter().map(TeamStat::new).collect(),
            ..Self::new(name)
        }
    }

    /// The fixtures, or an empty slice when the list is missing.
    pub fn matches(&self) -> &[Match] {
        self.matches.as_deref().unwrap_or(&[])
    }

    pub fn team(&self, team_id: &str) -> Option<&TeamStat> {
        self.teams.iter().find(|t| t.team.id == team_id)
    }

    pub fn contains_team(&self, team_id: &str) -> bool {
        self.team(team_id).is_some()
    }

    pub fn match_by_id(&self, id: MatchId) -> Option<&Match> {
        self.matches().iter().find(|m| m.id == id)
    }

    /// Every fixture has been played and has both scores.
    pub fn is_complete(&self) -> bool {
        self.matches().iter().all(Match::is_completed)
    }

    /// Zero every team's counters.
    pub fn reset_stats(&mut self) {
        for stat in &mut self.teams {
            stat.reset();
        }
    }

    /// Substitute an empty match list if it is missing, warning about it.
    pub(crate) fn heal_matches(&mut self) -> &mut Vec<Match> {
        if self.matches.is_none() {
            log::warn!(
                "Group '{}' has no valid match list; treating it as empty",
                self.name
            );
        }
        self.matches.get_or_insert_with(Vec::new)
    }
}

/// The groups of one round, keyed by unique name.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct LeagueTable {
    #[serde(default)]
    pub groups: Vec<Group>,
}

impl LeagueTable {
    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.name == name)
    }

    pub fn group_mut(&mut self, name: &str) -> Option<&mut Group> {
        self.groups.iter_mut().find(|g| g.name == name)
    }

    pub(crate) fn position(&self, name: &str) -> Option<usize> {
        self.groups.iter().position(|g| g.name == name)
    }

    /// All team records across every group.
    pub fn teams(&self) -> impl Iterator<Item = &TeamStat> {
        self.groups.iter().flat_map(|g| g.teams.iter())
    }
}

/// Root of a competition snapshot. Edits produce a new `Competition`; the old one stays valid.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Competition {
    pub id: CompetitionId,
    pub name: String,
    /// Preliminary (group) round.
    #[serde(default)]
    pub preliminary: LeagueTable,
}

impl Competition {
    /// New competition with no groups.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            preliminary: LeagueTable::default(),
        }
    }

    pub fn group(&self, name: &str) -> Option<&Group> {
        self.preliminary.group(name)
    }

    /// The group currently holding `team_id`, if any.
    pub fn group_of_team(&self, team_id: &str) -> Option<&Group> {
        self.preliminary
            .groups
            .iter()
            .find(|g| g.contains_team(team_id))
    }
}
