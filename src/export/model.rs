use crate::core::calculator::format_duration;
use crate::models::{Session, TimeEntry};
use crate::utils::DisplayZone;
use serde::Serialize;

const WALL_CLOCK: &str = "%Y-%m-%d %H:%M";

/// Flat row for one session.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SessionExport {
    pub subject_id: String,
    pub date: String,
    pub check_in: String,
    pub check_out: String,
    pub duration: String,
    pub duration_minutes: Option<i64>,
    pub spans_midnight: bool,
    pub check_in_address: String,
    pub check_out_address: String,
}

impl SessionExport {
    pub fn from_session(s: &Session, zone: DisplayZone) -> Self {
        Self {
            subject_id: s.subject_id().to_string(),
            date: s.date_key(),
            check_in: zone.format(&s.check_in.timestamp, WALL_CLOCK),
            check_out: s
                .check_out
                .as_ref()
                .map(|out| zone.format(&out.timestamp, WALL_CLOCK))
                .unwrap_or_default(),
            duration: format_duration(s.duration_minutes),
            duration_minutes: s.duration_minutes,
            spans_midnight: s.spans_midnight,
            check_in_address: s.check_in.location.describe(),
            check_out_address: s
                .check_out
                .as_ref()
                .map(|out| out.location.describe())
                .unwrap_or_default(),
        }
    }
}

/// Flat row for one raw entry.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct EntryExport {
    pub id: i64,
    pub subject_id: String,
    pub kind: String,
    pub timestamp: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub address: Option<String>,
    pub source: String,
}

impl From<&TimeEntry> for EntryExport {
    fn from(e: &TimeEntry) -> Self {
        Self {
            id: e.id,
            subject_id: e.subject_id.clone(),
            kind: e.kind.to_db_str().to_string(),
            timestamp: e.timestamp_str(),
            latitude: e.location.latitude(),
            longitude: e.location.longitude(),
            address: e.location.address.clone(),
            source: e.source.clone(),
        }
    }
}
