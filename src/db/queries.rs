use crate::errors::{AppError, AppResult};
use crate::models::{EntryKind, Location, TimeEntry};
use crate::utils::date::parse_stored_timestamp;
use crate::utils::range::Period;
use chrono::{DateTime, NaiveDate, NaiveTime, SecondsFormat, Utc};
use rusqlite::types::{ToSql, Type};
use rusqlite::{Connection, Row, params};
use tracing::debug;

/// Which entries to load. Bounds are half-open: `from <= ts < until`.
#[derive(Debug, Clone, Default)]
pub struct EntryFilter {
    pub subject_id: Option<String>,
    pub from: Option<DateTime<Utc>>,
    pub until: Option<DateTime<Utc>>,
}

impl EntryFilter {
    pub fn subject(subject_id: impl Into<String>) -> Self {
        Self {
            subject_id: Some(subject_id.into()),
            ..Self::default()
        }
    }

    /// Narrow to instants that can land on a date of `period` in any display
    /// zone. Offsets stay within one day, so the bounds keep a day of slack on
    /// each side; callers still filter on the exact display date.
    pub fn around(mut self, period: &Period) -> Self {
        if let Period::Between(start, end) = period {
            self.from = start.pred_opt().map(midnight_utc);
            self.until = end.succ_opt().and_then(|d| d.succ_opt()).map(midnight_utc);
        }
        self
    }
}

fn midnight_utc(day: NaiveDate) -> DateTime<Utc> {
    day.and_time(NaiveTime::MIN).and_utc()
}

fn conversion_error(col: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(col, Type::Text, Box::new(err))
}

pub fn map_row(row: &Row) -> rusqlite::Result<TimeEntry> {
    let kind_str: String = row.get("kind")?;
    let kind = EntryKind::from_db_str(&kind_str)
        .ok_or_else(|| conversion_error(2, AppError::InvalidEntryKind(kind_str.clone())))?;

    let ts_str: String = row.get("timestamp")?;
    let timestamp = parse_stored_timestamp(&ts_str)
        .ok_or_else(|| conversion_error(3, AppError::InvalidTimestamp(ts_str.clone())))?;

    let location = Location::from_parts(
        row.get("latitude")?,
        row.get("longitude")?,
        row.get("address")?,
    )
    .map_err(|e| conversion_error(4, e))?;

    Ok(TimeEntry {
        id: row.get("id")?,
        subject_id: row.get("subject_id")?,
        kind,
        timestamp,
        location,
        source: row.get("source")?,
        created_at: row.get("created_at")?,
    })
}

/// Store a new entry and return its id.
pub fn insert_entry(conn: &Connection, ev: &TimeEntry) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO entries (subject_id, kind, timestamp, latitude, longitude, address, source, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            ev.subject_id,
            ev.kind.to_db_str(),
            ev.timestamp_str(),
            ev.location.latitude(),
            ev.location.longitude(),
            ev.location.address,
            ev.source,
            ev.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Entries matching `filter`, ordered by `(timestamp, id)`.
pub fn load_entries(conn: &Connection, filter: &EntryFilter) -> AppResult<Vec<TimeEntry>> {
    let mut clauses: Vec<&str> = Vec::new();
    let mut values: Vec<String> = Vec::new();

    if let Some(subject) = &filter.subject_id {
        clauses.push("subject_id = ?");
        values.push(subject.clone());
    }
    if let Some(from) = filter.from {
        clauses.push("timestamp >= ?");
        values.push(from.to_rfc3339_opts(SecondsFormat::Secs, true));
    }
    if let Some(until) = filter.until {
        clauses.push("timestamp < ?");
        values.push(until.to_rfc3339_opts(SecondsFormat::Secs, true));
    }

    let where_sql = if clauses.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", clauses.join(" AND "))
    };

    let sql = format!(
        "SELECT id, subject_id, kind, timestamp, latitude, longitude, address, source, created_at
         FROM entries {where_sql}
         ORDER BY timestamp ASC, id ASC"
    );

    let mut stmt = conn.prepare(&sql)?;
    let params: Vec<&dyn ToSql> = values.iter().map(|v| v as &dyn ToSql).collect();
    let rows = stmt.query_map(params.as_slice(), map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }

    debug!(count = out.len(), ?filter, "loaded entries");
    Ok(out)
}

/// Every subject that has at least one entry, sorted.
pub fn load_subjects(conn: &Connection) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare("SELECT DISTINCT subject_id FROM entries ORDER BY subject_id ASC")?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool::DbPool;
    use crate::utils::date::parse_stored_timestamp;

    fn at(s: &str) -> DateTime<Utc> {
        parse_stored_timestamp(s).unwrap()
    }

    fn store(pool: &DbPool, subject: &str, kind: EntryKind, ts: &str, loc: Location) -> i64 {
        insert_entry(&pool.conn, &TimeEntry::new(subject, kind, at(ts), loc)).unwrap()
    }

    #[test]
    fn round_trips_location_and_kind() {
        let pool = DbPool::in_memory().unwrap();
        let loc = Location::from_parts(Some(40.4168), Some(-3.7038), Some("Sol".into())).unwrap();
        let id = store(&pool, "alice", EntryKind::CheckIn, "2025-09-01T07:00:00Z", loc.clone());

        let loaded = load_entries(&pool.conn, &EntryFilter::subject("alice")).unwrap();

        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, id);
        assert_eq!(loaded[0].kind, EntryKind::CheckIn);
        assert_eq!(loaded[0].location, loc);
        assert_eq!(loaded[0].timestamp, at("2025-09-01T07:00:00Z"));
    }

    #[test]
    fn filters_by_subject_and_bounds() {
        let pool = DbPool::in_memory().unwrap();
        store(&pool, "alice", EntryKind::CheckIn, "2025-09-01T07:00:00Z", Location::default());
        store(&pool, "alice", EntryKind::CheckOut, "2025-09-02T15:00:00Z", Location::default());
        store(&pool, "bob", EntryKind::CheckIn, "2025-09-01T08:00:00Z", Location::default());

        let filter = EntryFilter {
            subject_id: Some("alice".into()),
            from: Some(at("2025-09-01T00:00:00Z")),
            until: Some(at("2025-09-02T00:00:00Z")),
        };
        let loaded = load_entries(&pool.conn, &filter).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].subject_id, "alice");

        let everything = load_entries(&pool.conn, &EntryFilter::default()).unwrap();
        assert_eq!(everything.len(), 3);

        assert_eq!(load_subjects(&pool.conn).unwrap(), ["alice", "bob"]);
    }

    #[test]
    fn fractional_timestamps_are_stored_to_the_second() {
        let pool = DbPool::in_memory().unwrap();
        let fractional = DateTime::parse_from_rfc3339("2025-09-01T09:00:00.750+02:00")
            .unwrap()
            .with_timezone(&Utc);
        let mut entry = TimeEntry::new("alice", EntryKind::CheckIn, fractional, Location::default());
        entry.timestamp = fractional;

        insert_entry(&pool.conn, &entry).unwrap();

        let loaded = load_entries(&pool.conn, &EntryFilter::default()).unwrap();
        assert_eq!(loaded[0].timestamp, at("2025-09-01T07:00:00Z"));
    }

    #[test]
    fn around_a_day_keeps_a_day_of_slack() {
        let pool = DbPool::in_memory().unwrap();
        for ts in [
            "2025-08-30T12:00:00Z",
            "2025-08-31T10:00:00Z",
            "2025-09-01T09:00:00Z",
            "2025-09-02T23:59:59Z",
            "2025-09-03T00:00:00Z",
        ] {
            store(&pool, "alice", EntryKind::CheckIn, ts, Location::default());
        }
        let day = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();

        let filter = EntryFilter::subject("alice").around(&Period::Between(day, day));
        let loaded = load_entries(&pool.conn, &filter).unwrap();

        let stamps: Vec<String> = loaded.iter().map(TimeEntry::timestamp_str).collect();
        assert_eq!(
            stamps,
            [
                "2025-08-31T10:00:00Z",
                "2025-09-01T09:00:00Z",
                "2025-09-02T23:59:59Z"
            ]
        );

        let unbounded = EntryFilter::subject("alice").around(&Period::All);
        assert_eq!(load_entries(&pool.conn, &unbounded).unwrap().len(), 5);
    }

    #[test]
    fn loads_in_chronological_order() {
        let pool = DbPool::in_memory().unwrap();
        store(&pool, "alice", EntryKind::CheckOut, "2025-09-01T17:00:00Z", Location::default());
        store(&pool, "alice", EntryKind::CheckIn, "2025-09-01T09:00:00Z", Location::default());

        let loaded = load_entries(&pool.conn, &EntryFilter::default()).unwrap();

        assert_eq!(loaded[0].kind, EntryKind::CheckIn);
        assert_eq!(loaded[1].kind, EntryKind::CheckOut);
    }
}
