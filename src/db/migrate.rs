//! Versioned schema migrations.
//!
//! Applied versions are recorded in the `log` table as
//! `operation = 'migration_applied'`, `target = <version>`.

use crate::db::log::ttlog;
use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension};
use tracing::info;

struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20250901_0001_create_entries",
        description: "Created entries table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS entries (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            subject_id   TEXT NOT NULL,
            kind         TEXT NOT NULL CHECK(kind IN ('check_in','check_out')),
            timestamp    TEXT NOT NULL,
            latitude     REAL,
            longitude    REAL,
            address      TEXT,
            source       TEXT NOT NULL DEFAULT 'cli',
            created_at   TEXT NOT NULL
        );
        "#,
    },
    Migration {
        version: "20250915_0002_index_entries_subject_timestamp",
        description: "Indexed entries by subject and timestamp",
        sql: r#"
        CREATE INDEX IF NOT EXISTS idx_entries_subject_ts ON entries(subject_id, timestamp);
        CREATE INDEX IF NOT EXISTS idx_entries_ts ON entries(timestamp);
        "#,
    },
];

/// Ensure that the `log` table exists; it doubles as the migration ledger.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> AppResult<bool> {
    let mut chk = conn.prepare_cached(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> AppResult<()> {
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch(m.sql)
        .map_err(|e| AppError::Migration(format!("{}: {}", m.version, e)))?;
    ttlog(&tx, "migration_applied", m.version, m.description)?;

    tx.commit()?;
    info!(version = m.version, "migration applied");
    Ok(())
}

/// Run every migration not yet recorded. Returns the versions applied now.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut applied = Vec::new();
    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }
        apply(conn, m)?;
        applied.push(m.version);
    }

    Ok(applied)
}
