//! Setup: adding groups of teams to a competition.

use crate::logic::collation::{sort_teams_by_name, NameCollator};
use crate::logic::fixtures::FixtureGenerator;
use crate::models::{Competition, Group, LeagueError, Team};

/// Add a group with fresh teams and generated fixtures.
///
/// Group names must be unique; team names must be unique across the whole table
/// (case-insensitive). Teams are stored in name order.
pub fn add_group<S: AsRef<str>>(
    competition: &mut Competition,
    name: &str,
    team_names: &[S],
    fixtures: &impl FixtureGenerator,
) -> Result<(), LeagueError> {
    let reject = |err: LeagueError| {
        log::error!("Group '{}' rejected: {}", name, err);
        err
    };

    let name = name.trim();
    if name.is_empty() {
        return Err(reject(LeagueError::EmptyGroupName));
    }
    if competition.group(name).is_some() {
        return Err(reject(LeagueError::DuplicateGroupName(name.to_string())));
    }

    let mut teams: Vec<Team> = Vec::with_capacity(team_names.len());
    for raw in team_names {
        let team_name = raw.as_ref().trim();
        let is_duplicate = competition
            .preliminary
            .teams()
            .map(|t| &t.team)
            .chain(teams.iter())
            .any(|t| t.name.eq_ignore_ascii_case(team_name));
        if team_name.is_empty() {
            return Err(reject(LeagueError::EmptyTeamName));
        }
        if is_duplicate {
            return Err(reject(LeagueError::DuplicateTeamName(team_name.to_string())));
        }
        teams.push(Team::new(team_name));
    }

    let collator = NameCollator::japanese()?;
    let mut group = Group::with_teams(name, teams);
    sort_teams_by_name(&mut group.teams, &collator);
    group.matches = Some(fixtures.generate(&group.teams));
    competition.preliminary.groups.push(group);
    Ok(())
}
