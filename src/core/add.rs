use crate::core::calculator::pair_entries_in;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{EntryFilter, insert_entry, load_entries};
use crate::errors::AppResult;
use crate::models::{EntryKind, Location, TimeEntry};
use crate::utils::DisplayZone;
use chrono::{DateTime, Utc};
use tracing::info;

/// What recording an entry did to the subject's sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// A check-in; `open_before` counts check-ins still open before it.
    Opened { open_before: usize },
    /// A check-out that closes the check-in with this id.
    Closed { check_in_id: i64, minutes: i64 },
    /// A check-out with no open check-in to close.
    Orphan,
}

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Store a new entry and report how it pairs against the subject's history.
    pub fn apply(
        pool: &mut DbPool,
        subject_id: &str,
        kind: EntryKind,
        timestamp: DateTime<Utc>,
        location: Location,
        zone: DisplayZone,
    ) -> AppResult<(TimeEntry, AddOutcome)> {
        let tx = pool.conn.transaction()?;

        let mut entry = TimeEntry::new(subject_id, kind, timestamp, location);
        let id = insert_entry(&tx, &entry)?;
        entry = entry.with_id(id);

        ttlog(
            &tx,
            "add",
            subject_id,
            &format!(
                "{} at {}",
                kind.to_db_str(),
                zone.format(&entry.timestamp, "%Y-%m-%d %H:%M")
            ),
        )?;

        let history = load_entries(&tx, &EntryFilter::subject(subject_id))?;
        tx.commit()?;

        let sessions = pair_entries_in(&history, zone);
        let outcome = match kind {
            EntryKind::CheckIn => AddOutcome::Opened {
                open_before: sessions
                    .iter()
                    .filter(|s| {
                        s.is_in_progress()
                            && s.check_in.id != id
                            && s.check_in.timestamp <= entry.timestamp
                    })
                    .count(),
            },
            EntryKind::CheckOut => sessions
                .iter()
                .find(|s| s.check_out.as_ref().is_some_and(|o| o.id == id))
                .map(|s| AddOutcome::Closed {
                    check_in_id: s.check_in.id,
                    minutes: s.duration_minutes.unwrap_or(0),
                })
                .unwrap_or(AddOutcome::Orphan),
        };

        info!(id, subject = subject_id, kind = kind.to_db_str(), ?outcome, "entry recorded");
        Ok((entry, outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::date::parse_stored_timestamp;

    fn add(pool: &mut DbPool, kind: EntryKind, ts: &str) -> (TimeEntry, AddOutcome) {
        AddLogic::apply(
            pool,
            "alice",
            kind,
            parse_stored_timestamp(ts).unwrap(),
            Location::default(),
            DisplayZone::utc(),
        )
        .unwrap()
    }

    #[test]
    fn check_out_reports_the_session_it_closes() {
        let mut pool = DbPool::in_memory().unwrap();

        let (first, opened) = add(&mut pool, EntryKind::CheckIn, "2025-09-01T09:00:00Z");
        assert_eq!(opened, AddOutcome::Opened { open_before: 0 });

        let (_, closed) = add(&mut pool, EntryKind::CheckOut, "2025-09-01T17:00:00Z");
        assert_eq!(
            closed,
            AddOutcome::Closed {
                check_in_id: first.id,
                minutes: 480
            }
        );
    }

    #[test]
    fn check_out_without_check_in_is_stored_but_orphaned() {
        let mut pool = DbPool::in_memory().unwrap();

        let (entry, outcome) = add(&mut pool, EntryKind::CheckOut, "2025-09-01T08:00:00Z");

        assert_eq!(outcome, AddOutcome::Orphan);
        assert!(entry.id > 0);
        let stored = load_entries(&pool.conn, &EntryFilter::default()).unwrap();
        assert_eq!(stored.len(), 1);
    }

    #[test]
    fn second_check_in_notices_the_open_one() {
        let mut pool = DbPool::in_memory().unwrap();
        add(&mut pool, EntryKind::CheckIn, "2025-09-01T09:00:00Z");

        let (_, outcome) = add(&mut pool, EntryKind::CheckIn, "2025-09-01T10:00:00Z");

        assert_eq!(outcome, AddOutcome::Opened { open_before: 1 });
    }

    #[test]
    fn fractional_check_in_on_empty_store_opens_cleanly() {
        let mut pool = DbPool::in_memory().unwrap();

        let (entry, outcome) = add(&mut pool, EntryKind::CheckIn, "2025-09-01T09:00:00.500Z");

        assert_eq!(outcome, AddOutcome::Opened { open_before: 0 });
        assert_eq!(entry.timestamp, parse_stored_timestamp("2025-09-01T09:00:00Z").unwrap());
        let stored = load_entries(&pool.conn, &EntryFilter::default()).unwrap();
        assert_eq!(stored[0], entry);
    }

    #[test]
    fn durations_use_the_stored_seconds() {
        let mut pool = DbPool::in_memory().unwrap();
        let (first, _) = add(&mut pool, EntryKind::CheckIn, "2025-09-01T09:00:00.900Z");

        let (_, outcome) = add(&mut pool, EntryKind::CheckOut, "2025-09-01T09:00:30Z");

        assert_eq!(
            outcome,
            AddOutcome::Closed {
                check_in_id: first.id,
                minutes: 1
            }
        );
    }

    #[test]
    fn every_add_is_audited() {
        let mut pool = DbPool::in_memory().unwrap();
        add(&mut pool, EntryKind::CheckIn, "2025-09-01T09:00:00Z");

        let rows = crate::db::log::load_log(&pool.conn).unwrap();
        let adds: Vec<_> = rows.iter().filter(|r| r.operation == "add").collect();
        assert_eq!(adds.len(), 1);
        assert_eq!(adds[0].target, "alice");
        assert_eq!(adds[0].message, "check_in at 2025-09-01 09:00");
    }
}
