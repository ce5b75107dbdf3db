//! Turns raw check-in/check-out entries into work sessions.

use crate::models::{Session, TimeEntry};
use crate::utils::DisplayZone;
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, trace};

/// Pair entries using the machine's local timezone for calendar dates.
pub fn pair_entries(entries: &[TimeEntry]) -> Vec<Session> {
    pair_entries_in(entries, DisplayZone::Local)
}

/// Pair the entries of a single subject into sessions, most recent first.
///
/// Each check-in is closed by the first later check-out not already taken by
/// an earlier check-in, searching the whole input rather than the same day.
/// Check-outs that close nothing are dropped.
pub fn pair_entries_in(entries: &[TimeEntry], zone: DisplayZone) -> Vec<Session> {
    let mut sorted: Vec<&TimeEntry> = entries.iter().collect();
    sorted.sort_by_key(|e| e.timestamp);

    let mut consumed: HashSet<i64> = HashSet::new();
    let mut sessions = Vec::new();

    for (i, entry) in sorted.iter().enumerate() {
        if !entry.is_check_in() {
            continue;
        }

        let check_out = sorted[i + 1..]
            .iter()
            .find(|c| c.is_check_out() && !consumed.contains(&c.id))
            .copied();

        if let Some(out) = check_out {
            consumed.insert(out.id);
            trace!(check_in = entry.id, check_out = out.id, "paired");
        }

        sessions.push(build_session(entry, check_out, zone));
    }

    let orphans = sorted
        .iter()
        .filter(|e| e.is_check_out() && !consumed.contains(&e.id))
        .count();
    if orphans > 0 {
        debug!(orphans, "dropped check-outs without a preceding check-in");
    }

    sessions.sort_by(|a, b| b.check_in.timestamp.cmp(&a.check_in.timestamp));
    sessions
}

fn build_session(check_in: &TimeEntry, check_out: Option<&TimeEntry>, zone: DisplayZone) -> Session {
    let date = zone.date_of(&check_in.timestamp);

    let duration_minutes = check_out.map(|out| whole_minutes(check_in.timestamp, out.timestamp));
    let spans_midnight = check_out.is_some_and(|out| zone.date_of(&out.timestamp) != date);

    Session {
        date,
        check_in: check_in.clone(),
        check_out: check_out.cloned(),
        duration_minutes,
        spans_midnight,
    }
}

/// Elapsed minutes rounded to the nearest minute (halves up), never negative.
fn whole_minutes(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    let ms = (to - from).num_milliseconds();
    if ms <= 0 { 0 } else { (ms + 30_000) / 60_000 }
}

/// Split a mixed collection by subject, keeping each subject's input order.
pub fn partition_by_subject(entries: &[TimeEntry]) -> BTreeMap<String, Vec<TimeEntry>> {
    let mut by_subject: BTreeMap<String, Vec<TimeEntry>> = BTreeMap::new();
    for e in entries {
        by_subject
            .entry(e.subject_id.clone())
            .or_default()
            .push(e.clone());
    }
    by_subject
}
