//! Start times and courts for a fixture list.

use crate::models::wire::{format_clock, parse_clock};
use crate::models::{LeagueError, Match};
use chrono::{Duration, NaiveTime};

/// When the first matches start and how long each court is busy per match.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ScheduleOptions {
    pub start_time: NaiveTime,
    pub match_duration_min: u32,
    pub rest_min: u32,
}

impl ScheduleOptions {
    /// Build from an "HH:MM" start time.
    pub fn parse(
        start_time: &str,
        match_duration_min: u32,
        rest_min: u32,
    ) -> Result<Self, LeagueError> {
        let start_time = parse_clock(start_time).ok_or_else(|| {
            log::error!("Rejected schedule start time '{}'", start_time);
            LeagueError::InvalidStartTime(start_time.to_string())
        })?;
        Ok(Self {
            start_time,
            match_duration_min,
            rest_min,
        })
    }

    /// Minutes a court is occupied by one match, rest included.
    pub fn slot(&self) -> Duration {
        Duration::minutes(i64::from(self.match_duration_min) + i64::from(self.rest_min))
    }
}

/// Greedy list scheduling: each match, in order, goes to the court that frees up first
/// (lowest court number on a tie) and starts at that court's free time.
///
/// Times are clock-of-day only; a schedule running past midnight wraps around.
pub fn assign_courts(matches: &mut [Match], court_count: u32, options: &ScheduleOptions) {
    // Courts beyond the match count are never picked.
    let usable = usize::try_from(court_count).map_or(matches.len(), |c| c.min(matches.len()));
    let mut next_free = vec![options.start_time; usable];
    let slot = options.slot();

    for m in matches.iter_mut() {
        // min_by_key keeps the first of equal minima, i.e. the lowest court.
        let earliest = next_free
            .iter()
            .copied()
            .enumerate()
            .min_by_key(|(_, t)| *t);
        let Some((idx, start)) = earliest else {
            return;
        };
        m.court = Some(idx as u32 + 1);
        m.start_time = Some(start);
        next_free[idx] = start + slot;
        log::debug!(
            "Match {} scheduled on court {} at {}",
            m.id,
            idx + 1,
            format_clock(start)
        );
    }
}

/// Order by start time, then court.
///
/// A missing start time sorts before every clock time, so untimed matches lead the list
/// ordered by court alone, followed by the timed ones.
pub fn sort_by_start_time(matches: &mut [Match]) {
    matches.sort_by_key(|m| (m.start_time, m.court));
}
