//! Entering or correcting a single match result.

use crate::logic::standings::recalculate_in_place;
use crate::models::{Competition, Group, LeagueError, Match};

/// Replace the match with the same id as `updated` and rebuild the group's standings.
///
/// The whole table is recomputed from the full match list rather than patched with the
/// difference, so totals cannot drift from the results.
pub fn apply_match_result(group: &Group, updated: Match) -> Result<Group, LeagueError> {
    let id = updated.id;
    let mut next = group.clone();
    let slot = next.heal_matches().iter_mut().find(|m| m.id == id);
    match slot {
        Some(slot) => *slot = updated,
        None => {
            log::error!("Result rejected: match {} not found in group '{}'", id, group.name);
            return Err(LeagueError::MatchNotFound(id));
        }
    }
    recalculate_in_place(&mut next);
    Ok(next)
}

/// [`apply_match_result`] on one group of a competition, returning the new competition.
pub fn record_result(
    competition: &Competition,
    group_name: &str,
    updated: Match,
) -> Result<Competition, LeagueError> {
    let group = competition.group(group_name).ok_or_else(|| {
        log::error!("Result rejected: group '{}' not found", group_name);
        LeagueError::GroupNotFound(group_name.to_string())
    })?;
    let updated_group = apply_match_result(group, updated)?;

    let mut next = competition.clone();
    if let Some(slot) = next.preliminary.group_mut(group_name) {
        *slot = updated_group;
    }
    Ok(next)
}
