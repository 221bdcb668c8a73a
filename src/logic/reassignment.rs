//! Moving a team from one group to another.

use crate::logic::collation::{sort_teams_by_name, NameCollator};
use crate::logic::fixtures::FixtureGenerator;
use crate::logic::schedule::{assign_courts, sort_by_start_time, ScheduleOptions};
use crate::models::{Competition, Group, LeagueError, TeamId};

/// A request to move one team between groups.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MoveTeam {
    pub team_id: TeamId,
    pub source_group: String,
    pub target_group: String,
    /// Courts available to the scheduler (at least 1).
    pub court_count: u32,
    /// When set, the regenerated fixtures get start times and courts.
    pub schedule: Option<ScheduleOptions>,
}

impl MoveTeam {
    pub fn new(
        team_id: impl Into<TeamId>,
        source_group: impl Into<String>,
        target_group: impl Into<String>,
        court_count: u32,
    ) -> Self {
        Self {
            team_id: team_id.into(),
            source_group: source_group.into(),
            target_group: target_group.into(),
            court_count,
            schedule: None,
        }
    }

    pub fn scheduled(mut self, options: ScheduleOptions) -> Self {
        self.schedule = Some(options);
        self
    }

    fn validate(&self) -> Result<(), LeagueError> {
        if self.team_id.trim().is_empty() {
            return Err(LeagueError::EmptyTeamId);
        }
        if self.source_group.trim().is_empty() || self.target_group.trim().is_empty() {
            return Err(LeagueError::EmptyGroupName);
        }
        if self.court_count == 0 {
            return Err(LeagueError::InvalidCourtCount(self.court_count));
        }
        Ok(())
    }
}

/// Move a team to another group and return the new competition.
///
/// Both affected groups lose all results: counters are zeroed, fixtures are regenerated
/// for the new team sets (and scheduled if requested), and teams are re-sorted by name.
/// Moving within the same group returns an unchanged copy. On error nothing is produced.
pub fn move_team(
    competition: &Competition,
    request: &MoveTeam,
    fixtures: &impl FixtureGenerator,
) -> Result<Competition, LeagueError> {
    let reject = |err: LeagueError| {
        log::error!("Move of team '{}' rejected: {}", request.team_id, err);
        err
    };

    request.validate().map_err(reject)?;
    if request.source_group == request.target_group {
        return Ok(competition.clone());
    }

    let table = &competition.preliminary;
    let source = table
        .position(&request.source_group)
        .ok_or_else(|| reject(LeagueError::GroupNotFound(request.source_group.clone())))?;
    let target = table
        .position(&request.target_group)
        .ok_or_else(|| reject(LeagueError::GroupNotFound(request.target_group.clone())))?;
    let team_idx = table.groups[source]
        .teams
        .iter()
        .position(|t| t.team.id == request.team_id)
        .ok_or_else(|| {
            reject(LeagueError::TeamNotInGroup {
                team_id: request.team_id.clone(),
                group: request.source_group.clone(),
            })
        })?;
    let collator = NameCollator::japanese()?;

    let mut next = competition.clone();
    let groups = &mut next.preliminary.groups;
    let stat = groups[source].teams.remove(team_idx);
    groups[target].teams.push(stat);
    for idx in [source, target] {
        rebuild_group(&mut groups[idx], request, fixtures, &collator);
    }

    log::info!(
        "Moved team '{}' from group '{}' to group '{}'",
        request.team_id,
        request.source_group,
        request.target_group
    );
    Ok(next)
}

/// Void a group's results after its team set changed.
fn rebuild_group(
    group: &mut Group,
    request: &MoveTeam,
    fixtures: &impl FixtureGenerator,
    collator: &NameCollator,
) {
    group.reset_stats();
    let mut matches = fixtures.generate(&group.teams);
    if let Some(options) = &request.schedule {
        assign_courts(&mut matches, request.court_count, options);
        sort_by_start_time(&mut matches);
    }
    group.matches = Some(matches);
    sort_teams_by_name(&mut group.teams, collator);
}
