//! Display order for team names: Japanese-locale collation, never byte order.

use crate::models::{LeagueError, TeamStat};
use icu::collator::{Collator, CollatorOptions};
use icu::locid::locale;
use std::cmp::Ordering;

/// Locale-aware string comparator for team names.
pub struct NameCollator {
    collator: Collator,
}

impl NameCollator {
    /// Collator for the `ja` locale.
    pub fn japanese() -> Result<Self, LeagueError> {
        let collator = Collator::try_new(&locale!("ja").into(), CollatorOptions::new())
            .map_err(|e| {
                log::error!("Could not load Japanese collation data: {}", e);
                LeagueError::Collator(e.to_string())
            })?;
        Ok(Self { collator })
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.collator.compare(a, b)
    }
}

/// Sort team records alphabetically by team name (stable for equal names).
pub fn sort_teams_by_name(teams: &mut [TeamStat], collator: &NameCollator) {
    teams.sort_by(|a, b| collator.compare(&a.team.name, &b.team.name));
}
