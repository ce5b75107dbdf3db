use super::entry::TimeEntry;
use chrono::NaiveDate;
use serde::Serialize;

/// A check-in paired with the check-out that closes it.
/// Derived on every run, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Session {
    pub date: NaiveDate,
    pub check_in: TimeEntry,
    pub check_out: Option<TimeEntry>,
    pub duration_minutes: Option<i64>,
    pub spans_midnight: bool,
}

impl Session {
    pub fn is_in_progress(&self) -> bool {
        self.check_out.is_none()
    }

    pub fn date_key(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn subject_id(&self) -> &str {
        &self.check_in.subject_id
    }
}
