//! A single group fixture and its (optional) result.

use crate::models::team::TeamId;
use crate::models::wire;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Identifier for a match, unique within its group.
pub type MatchId = u32;

/// One pairing inside a group. Scores, winner, time and court are all optional:
/// freshly generated fixtures carry none of them.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub team1_id: TeamId,
    pub team2_id: TeamId,
    /// None if not entered (or not a usable number).
    #[serde(default, deserialize_with = "wire::lenient_score")]
    pub team1_score: Option<u32>,
    #[serde(default, deserialize_with = "wire::lenient_score")]
    pub team2_score: Option<u32>,
    #[serde(default)]
    pub played: bool,
    /// Decides a level score, e.g. after a shootout.
    #[serde(default)]
    pub winner_id: Option<TeamId>,
    #[serde(default, with = "wire::clock")]
    pub start_time: Option<NaiveTime>,
    /// 1-based court number.
    #[serde(default)]
    pub court: Option<u32>,
}

impl Match {
    /// Unplayed fixture between two teams.
    pub fn new(id: MatchId, team1_id: impl Into<TeamId>, team2_id: impl Into<TeamId>) -> Self {
        Self {
            id,
            team1_id: team1_id.into(),
            team2_id: team2_id.into(),
            team1_score: None,
            team2_score: None,
            played: false,
            winner_id: None,
            start_time: None,
            court: None,
        }
    }

    /// Mark as played with the given score.
    pub fn with_score(mut self, team1_score: u32, team2_score: u32) -> Self {
        self.team1_score = Some(team1_score);
        self.team2_score = Some(team2_score);
        self.played = true;
        self
    }

    pub fn with_winner(mut self, winner_id: impl Into<TeamId>) -> Self {
        self.winner_id = Some(winner_id.into());
        self
    }

    /// The score, if the match is played and both sides have one.
    pub fn final_score(&self) -> Option<(u32, u32)> {
        if !self.played {
            return None;
        }
        Some((self.team1_score?, self.team2_score?))
    }

    pub fn is_completed(&self) -> bool {
        self.final_score().is_some()
    }
}
