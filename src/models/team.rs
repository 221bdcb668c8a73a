//! Team and TeamStat data structures.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier for a team (used in matches and lookups).
pub type TeamId = String;

/// A team entered in the competition.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
}

impl Team {
    /// Create a team with a fresh random id.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), name)
    }

    pub fn with_id(id: impl Into<TeamId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A team's record inside one group.
///
/// Every counter is derived from the group's matches by the standings recalculation;
/// nothing else should bump them.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamStat {
    pub team: Team,
    #[serde(default)]
    pub played: u32,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub draws: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default)]
    pub goals_for: u32,
    #[serde(default)]
    pub goals_against: u32,
    /// Always `goals_for - goals_against`.
    #[serde(default)]
    pub goal_difference: i32,
    #[serde(default)]
    pub points: u32,
}

impl TeamStat {
    /// Fresh record with every counter at zero.
    pub fn new(team: Team) -> Self {
        Self {
            team,
            played: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            points: 0,
        }
    }

    pub fn id(&self) -> &str {
        &self.team.id
    }

    /// True when every counter is zero.
    pub fn is_blank(&self) -> bool {
        self.played == 0
            && self.wins == 0
            && self.draws == 0
            && self.losses == 0
            && self.goals_for == 0
            && self.goals_against == 0
            && self.goal_difference == 0
            && self.points == 0
    }

    /// Zero every counter, keeping the team.
    pub fn reset(&mut self) {
        self.played = 0;
        self.wins = 0;
        self.draws = 0;
        self.losses = 0;
        self.goals_for = 0;
        self.goals_against = 0;
        self.goal_difference = 0;
        self.points = 0;
    }

    /// Count one completed match with the given goals scored and conceded.
    ///
    /// Counters saturate instead of overflowing; scores come straight from clients.
    pub(crate) fn record_goals(&mut self, scored: u32, conceded: u32) {
        self.played = self.played.saturating_add(1);
        self.goals_for = self.goals_for.saturating_add(scored);
        self.goals_against = self.goals_against.saturating_add(conceded);
        self.goal_difference = goal_difference(self.goals_for, self.goals_against);
    }

    pub(crate) fn add_win(&mut self, points: u32) {
        self.wins = self.wins.saturating_add(1);
        self.points = self.points.saturating_add(points);
    }

    pub(crate) fn add_loss(&mut self, points: u32) {
        self.losses = self.losses.saturating_add(1);
        self.points = self.points.saturating_add(points);
    }

    pub(crate) fn add_draw(&mut self, points: u32) {
        self.draws = self.draws.saturating_add(1);
        self.points = self.points.saturating_add(points);
    }
}

/// `goals_for - goals_against`, clamped to the `i32` range.
fn goal_difference(goals_for: u32, goals_against: u32) -> i32 {
    let diff = i64::from(goals_for) - i64::from(goals_against);
    i32::try_from(diff).unwrap_or(if diff < 0 { i32::MIN } else { i32::MAX })
}
