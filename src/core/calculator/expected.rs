//! Daily target and surplus per calendar date.

use crate::errors::{AppError, AppResult};

use super::grouping::DayGroup;

/// Per-day report line: worked vs. configured target.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySummary {
    pub group: DayGroup,
    pub worked: i64,
    pub expected: i64,
    pub surplus: i64,
}

impl DaySummary {
    pub fn from_group(group: DayGroup, expected: i64) -> Self {
        let worked = group.total_minutes();
        Self {
            group,
            worked,
            expected,
            surplus: worked - expected,
        }
    }
}

/// Parse a work target such as `8h`, `7h30m`, `45m` or plain minutes (`450`).
pub fn parse_work_duration(s: &str) -> AppResult<i64> {
    let raw = s.trim().to_lowercase();
    let invalid = || AppError::InvalidDuration(s.to_string());

    if raw.is_empty() {
        return Err(invalid());
    }
    if let Ok(minutes) = raw.parse::<i64>() {
        return if minutes >= 0 { Ok(minutes) } else { Err(invalid()) };
    }

    let mut total = 0i64;
    let mut digits = String::new();
    let mut seen_unit = false;

    for c in raw.chars() {
        match c {
            '0'..='9' => digits.push(c),
            'h' | 'm' => {
                let value: i64 = digits.parse().map_err(|_| invalid())?;
                total += if c == 'h' { value * 60 } else { value };
                digits.clear();
                seen_unit = true;
            }
            ' ' => {}
            _ => return Err(invalid()),
        }
    }

    if !digits.is_empty() || !seen_unit {
        return Err(invalid());
    }
    Ok(total)
}
