//! Date/time helpers: display timezone, calendar dates and instant parsing.

use crate::errors::{AppError, AppResult};
use chrono::{
    DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc,
};
use std::fmt;

/// Timezone used to turn instants into calendar dates and wall-clock times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayZone {
    #[default]
    Local,
    Fixed(FixedOffset),
}

impl DisplayZone {
    /// Parse `local`, `UTC`/`Z`, or an offset such as `+02:00`, `-0530`, `+01`.
    pub fn parse(s: &str) -> AppResult<Self> {
        let raw = s.trim();
        match raw.to_lowercase().as_str() {
            "local" | "" => return Ok(Self::Local),
            "utc" | "z" => return Ok(Self::utc()),
            _ => {}
        }

        parse_offset(raw)
            .map(Self::Fixed)
            .ok_or_else(|| AppError::InvalidTimezone(raw.to_string()))
    }

    pub fn utc() -> Self {
        Self::Fixed(Utc.fix())
    }

    /// Calendar date of an instant in this zone.
    pub fn date_of(&self, ts: &DateTime<Utc>) -> NaiveDate {
        match self {
            DisplayZone::Local => ts.with_timezone(&Local).date_naive(),
            DisplayZone::Fixed(offset) => ts.with_timezone(offset).date_naive(),
        }
    }

    pub fn format(&self, ts: &DateTime<Utc>, fmt: &str) -> String {
        match self {
            DisplayZone::Local => ts.with_timezone(&Local).format(fmt).to_string(),
            DisplayZone::Fixed(offset) => ts.with_timezone(offset).format(fmt).to_string(),
        }
    }

    /// Interpret a wall-clock time in this zone.
    /// On a DST fold the earlier instant wins; times inside a DST gap are rejected.
    pub fn resolve(&self, naive: NaiveDateTime) -> AppResult<DateTime<Utc>> {
        let resolved = match self {
            DisplayZone::Local => Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc)),
            DisplayZone::Fixed(offset) => offset
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc)),
        };

        resolved.ok_or_else(|| {
            AppError::InvalidTimestamp(format!("{naive} does not exist in timezone {self}"))
        })
    }

    pub fn today(&self) -> NaiveDate {
        self.date_of(&Utc::now())
    }
}

impl fmt::Display for DisplayZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayZone::Local => write!(f, "local"),
            DisplayZone::Fixed(offset) => write!(f, "{offset}"),
        }
    }
}

fn parse_offset(s: &str) -> Option<FixedOffset> {
    let (sign, rest) = match s.chars().next()? {
        '+' => (1, &s[1..]),
        '-' => (-1, &s[1..]),
        _ => return None,
    };

    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let (hours, minutes): (i32, i32) = match digits.len() {
        2 => (digits.parse().ok()?, 0),
        4 => (digits[..2].parse().ok()?, digits[2..].parse().ok()?),
        _ => return None,
    };

    if hours > 23 || minutes > 59 {
        return None;
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

/// Parse an instant given on the command line.
///
/// Accepted forms:
/// - RFC 3339 (`2025-09-01T09:00:00+02:00`, `2025-09-01T07:00:00Z`)
/// - `YYYY-MM-DD HH:MM[:SS]` or `YYYY-MM-DDTHH:MM[:SS]`, read in `zone`
pub fn parse_timestamp(s: &str, zone: DisplayZone) -> AppResult<DateTime<Utc>> {
    let raw = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }

    const NAIVE_FORMATS: [&str; 4] = [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
    ];

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .ok_or_else(|| AppError::InvalidTimestamp(raw.to_string()))
        .and_then(|naive| zone.resolve(naive))
}

/// Parse a timestamp column written by the store.
pub fn parse_stored_timestamp(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
