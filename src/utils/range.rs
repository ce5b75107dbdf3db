//! Period expressions used by `list --period` and `export --range`.
//!
//! Supported:
//! - `all`
//! - YYYY, YYYY-MM, YYYY-MM-DD
//! - YYYY:YYYY, YYYY-MM:YYYY-MM, YYYY-MM-DD:YYYY-MM-DD

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

/// Inclusive span of calendar dates, or everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    All,
    Between(NaiveDate, NaiveDate),
}

impl Period {
    pub fn parse(r: &str) -> AppResult<Self> {
        let r = r.trim();
        if r.eq_ignore_ascii_case("all") {
            return Ok(Period::All);
        }

        let (start, end) = parse_range(r)?;
        Ok(Period::Between(start, end))
    }

    /// Calendar month containing `day`.
    pub fn month_of(day: NaiveDate) -> Self {
        let first = day.with_day(1).unwrap_or(day);
        Period::Between(first, last_day_of_month(first.year(), first.month()).unwrap_or(day))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        match self {
            Period::All => true,
            Period::Between(start, end) => *start <= date && date <= *end,
        }
    }

    pub fn label(&self) -> String {
        match self {
            Period::All => "all dates".to_string(),
            Period::Between(start, end) if start == end => start.to_string(),
            Period::Between(start, end) => format!("{start} → {end}"),
        }
    }
}

fn invalid(msg: impl Into<String>) -> AppError {
    AppError::InvalidRange(msg.into())
}

pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match r.split_once(':') {
        Some((start_raw, end_raw)) => {
            let start = start_raw.trim();
            let end = end_raw.trim();

            if start.len() != end.len() {
                return Err(invalid("start and end must have same format"));
            }

            let (from, _) = period_bounds(start)?;
            let (_, to) = period_bounds(end)?;

            if from > to {
                return Err(invalid(format!("start {from} is after end {to}")));
            }
            Ok((from, to))
        }
        None => period_bounds(r),
    }
}

fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p.parse().map_err(|_| invalid(format!("invalid year: {p}")))?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(|| invalid("invalid start date"))?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(|| invalid("invalid end date"))?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 => {
            let first = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d")
                .map_err(|_| invalid(format!("invalid month: {p}")))?;
            let last = last_day_of_month(first.year(), first.month())
                .ok_or_else(|| invalid(format!("invalid month: {p}")))?;
            Ok((first, last))
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d")
                .map_err(|_| invalid(format!("invalid date: {p}")))?;
            Ok((d, d))
        }
        _ => Err(invalid(format!("unsupported range format: {p}"))),
    }
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()
}
