use crate::core::calculator::expected::DaySummary;
use crate::core::calculator::{group_by_date, pair_entries_in, partition_by_subject};
use crate::models::{Session, TimeEntry};
use crate::utils::DisplayZone;
use crate::utils::range::Period;

/// Sessions and per-day totals of one subject over a period.
#[derive(Debug, Clone)]
pub struct SubjectReport {
    pub subject_id: String,
    pub period: Period,
    /// Newest date first.
    pub days: Vec<DaySummary>,
    pub total_worked: i64,
    pub total_surplus: i64,
    pub open_sessions: usize,
}

impl SubjectReport {
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

pub struct Core;

impl Core {
    /// Pair the subject's whole history, then keep the sessions dated inside
    /// `period`. Pairing before filtering keeps overnight sessions whose
    /// check-out falls outside the period intact.
    pub fn sessions_in_period(
        entries: &[TimeEntry],
        zone: DisplayZone,
        period: &Period,
    ) -> Vec<Session> {
        pair_entries_in(entries, zone)
            .into_iter()
            .filter(|s| period.contains(s.date))
            .collect()
    }

    pub fn build_report(
        subject_id: &str,
        entries: &[TimeEntry],
        zone: DisplayZone,
        period: Period,
        expected_daily_minutes: i64,
    ) -> SubjectReport {
        let sessions = Self::sessions_in_period(entries, zone, &period);
        let open_sessions = sessions.iter().filter(|s| s.is_in_progress()).count();

        let days: Vec<DaySummary> = group_by_date(&sessions)
            .newest_first()
            .into_iter()
            .map(|g| DaySummary::from_group(g, expected_daily_minutes))
            .collect();

        SubjectReport {
            subject_id: subject_id.to_string(),
            period,
            total_worked: days.iter().map(|d| d.worked).sum(),
            total_surplus: days.iter().map(|d| d.surplus).sum(),
            days,
            open_sessions,
        }
    }

    /// One report per subject found in `entries`, ordered by subject id.
    pub fn reports_by_subject(
        entries: &[TimeEntry],
        zone: DisplayZone,
        period: Period,
        expected_daily_minutes: i64,
    ) -> Vec<SubjectReport> {
        partition_by_subject(entries)
            .iter()
            .map(|(subject, own)| {
                Self::build_report(subject, own, zone, period, expected_daily_minutes)
            })
            .collect()
    }
}
