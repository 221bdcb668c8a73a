//! Fixture generation: who plays whom inside a group.

use crate::models::{Match, MatchId, TeamStat};

/// Produces a fresh, unplayed match list for a group's teams.
///
/// Implemented for closures too, so callers can plug in their own pairing.
pub trait FixtureGenerator {
    fn generate(&self, teams: &[TeamStat]) -> Vec<Match>;
}

impl<F> FixtureGenerator for F
where
    F: Fn(&[TeamStat]) -> Vec<Match>,
{
    fn generate(&self, teams: &[TeamStat]) -> Vec<Match> {
        self(teams)
    }
}

/// Single round-robin using the circle method.
///
/// Matches come out round by round with ids `1..=n`. With an odd team count a bye slot is
/// added and its pairings are dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct RoundRobin;

impl FixtureGenerator for RoundRobin {
    fn generate(&self, teams: &[TeamStat]) -> Vec<Match> {
        if teams.len() < 2 {
            return Vec::new();
        }
        let mut slots: Vec<Option<&str>> = teams.iter().map(|t| Some(t.id())).collect();
        if slots.len() % 2 == 1 {
            slots.push(None);
        }
        let n = slots.len();
        let mut matches = Vec::with_capacity(teams.len() * (teams.len() - 1) / 2);

        for _round in 0..n - 1 {
            for i in 0..n / 2 {
                if let (Some(home), Some(away)) = (slots[i], slots[n - 1 - i]) {
                    let id = matches.len() as MatchId + 1;
                    matches.push(Match::new(id, home, away));
                }
            }
            // First slot stays put, the rest rotate one place.
            slots[1..].rotate_right(1);
        }
        matches
    }
}
