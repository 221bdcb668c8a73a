//! Serde helpers for the JSON shape of groups and matches.
//!
//! Incoming snapshots are edited by hand and by forms, so a few fields are read leniently:
//! anything unusable becomes `None` and is dealt with by the standings code.

use crate::models::game::Match;
use chrono::NaiveTime;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Clock format used for match start times.
pub const CLOCK_FORMAT: &str = "%H:%M";

/// Parse a clock-of-day "HH:MM" string.
pub fn parse_clock(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw.trim(), CLOCK_FORMAT).ok()
}

/// Format as zero-padded "HH:MM".
pub fn format_clock(time: NaiveTime) -> String {
    time.format(CLOCK_FORMAT).to_string()
}

/// A score is only kept if it is a non-negative integer; strings, floats and `null` drop to `None`.
pub fn lenient_score<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
        _ => None,
    })
}

/// Anything other than an array (missing, `null`, an object, a string) becomes `None`.
pub fn lenient_matches<'de, D>(deserializer: D) -> Result<Option<Vec<Match>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Array(_) => serde_json::from_value(value)
            .map(Some)
            .map_err(D::Error::custom),
        _ => Ok(None),
    }
}

/// `Option<NaiveTime>` as "HH:MM" (or `null`).
pub mod clock {
    use super::{format_clock, parse_clock};
    use chrono::NaiveTime;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(time: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match time {
            Some(t) => serializer.serialize_str(&format_clock(*t)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        raw.map(|s| {
            parse_clock(&s)
                .ok_or_else(|| D::Error::custom(format!("invalid time '{s}', expected HH:MM")))
        })
        .transpose()
    }
}
