//! League position order for display.

use crate::logic::collation::NameCollator;
use crate::models::{Group, LeagueError, TeamStat};
use serde::Serialize;

/// One row of a ranked table.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Standing {
    /// 1-based.
    pub position: usize,
    #[serde(flatten)]
    pub stat: TeamStat,
}

/// Teams of `group` in table order: points, goal difference, goals scored, wins, then name.
///
/// Reads the stored records as they are; recalculate first if they may be stale.
pub fn ranked_standings(group: &Group) -> Result<Vec<Standing>, LeagueError> {
    let collator = NameCollator::japanese()?;
    let mut teams = group.teams.clone();
    teams.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then(b.goal_difference.cmp(&a.goal_difference))
            .then(b.goals_for.cmp(&a.goals_for))
            .then(b.wins.cmp(&a.wins))
            .then_with(|| collator.compare(&a.team.name, &b.team.name))
    });
    Ok(teams
        .into_iter()
        .enumerate()
        .map(|(i, stat)| Standing {
            position: i + 1,
            stat,
        })
        .collect())
}
