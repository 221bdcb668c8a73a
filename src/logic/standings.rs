//! Standings: every team's record, rebuilt from the group's completed matches.

use crate::models::{Competition, Group, LeagueError, Match, TeamStat};

/// Points for a win in normal play.
pub const POINTS_WIN: u32 = 3;
/// Points each for a level score with no decisive winner.
pub const POINTS_DRAW: u32 = 1;
/// Points for a loss in normal play.
pub const POINTS_LOSS: u32 = 0;
/// Points for winning a level match on a tiebreak (e.g. shootout).
pub const POINTS_TIEBREAK_WIN: u32 = 2;
/// Points for losing a level match on a tiebreak.
pub const POINTS_TIEBREAK_LOSS: u32 = 1;

/// How a completed match counts in the table.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Outcome {
    Team1Win,
    Team2Win,
    Team1Tiebreak,
    Team2Tiebreak,
    Draw,
}

fn classify(m: &Match, team1_score: u32, team2_score: u32) -> Outcome {
    if team1_score > team2_score {
        return Outcome::Team1Win;
    }
    if team2_score > team1_score {
        return Outcome::Team2Win;
    }
    match m.winner_id.as_deref() {
        None => Outcome::Draw,
        Some(w) if w == m.team1_id => Outcome::Team1Tiebreak,
        Some(w) if w == m.team2_id => Outcome::Team2Tiebreak,
        Some(w) => {
            log::warn!(
                "Match {}: tiebreak winner {} is neither side; counted as a draw",
                m.id,
                w
            );
            Outcome::Draw
        }
    }
}

/// Recompute every team's record in `group` from scratch and return the updated copy.
///
/// Total: a missing match list is replaced by an empty one, and a match naming a team
/// that is not in the group is skipped. Running it twice gives the same records.
pub fn recalculate(group: &Group) -> Group {
    let mut group = group.clone();
    recalculate_in_place(&mut group);
    group
}

/// Recalculate one group of a competition, returning the new competition.
pub fn recalculate_group(
    competition: &Competition,
    group_name: &str,
) -> Result<Competition, LeagueError> {
    let mut next = competition.clone();
    let group = next.preliminary.group_mut(group_name).ok_or_else(|| {
        log::error!("Recalculation rejected: group '{}' not found", group_name);
        LeagueError::GroupNotFound(group_name.to_string())
    })?;
    recalculate_in_place(group);
    Ok(next)
}

pub(crate) fn recalculate_in_place(group: &mut Group) {
    group.heal_matches();
    group.reset_stats();

    let Group {
        name,
        teams,
        matches,
    } = group;
    for m in matches.iter().flatten() {
        let Some((score1, score2)) = m.final_score() else {
            continue;
        };
        let (i1, i2) = (position(teams, &m.team1_id), position(teams, &m.team2_id));
        let (Some(i1), Some(i2)) = (i1, i2) else {
            log::warn!(
                "Group '{}': match {} references a team outside the group; skipped",
                name,
                m.id
            );
            continue;
        };

        teams[i1].record_goals(score1, score2);
        teams[i2].record_goals(score2, score1);

        match classify(m, score1, score2) {
            Outcome::Team1Win => {
                teams[i1].add_win(POINTS_WIN);
                teams[i2].add_loss(POINTS_LOSS);
            }
            Outcome::Team2Win => {
                teams[i2].add_win(POINTS_WIN);
                teams[i1].add_loss(POINTS_LOSS);
            }
            Outcome::Team1Tiebreak => {
                teams[i1].add_win(POINTS_TIEBREAK_WIN);
                teams[i2].add_loss(POINTS_TIEBREAK_LOSS);
            }
            Outcome::Team2Tiebreak => {
                teams[i2].add_win(POINTS_TIEBREAK_WIN);
                teams[i1].add_loss(POINTS_TIEBREAK_LOSS);
            }
            Outcome::Draw => {
                teams[i1].add_draw(POINTS_DRAW);
                teams[i2].add_draw(POINTS_DRAW);
            }
        }
    }
}

fn position(teams: &[TeamStat], team_id: &str) -> Option<usize> {
    teams.iter().position(|t| t.team.id == team_id)
}
