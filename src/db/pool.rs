//! SQLite connection wrapper (one connection per CLI invocation).

use crate::errors::AppResult;
use rusqlite::Connection;
use std::path::Path;
use tracing::debug;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> AppResult<Self> {
        debug!(path, "opening database");
        let conn = Connection::open(Path::new(path))?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(Self { conn })
    }

    /// Fresh in-memory database with the full schema.
    pub fn in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        crate::db::initialize::init_db(&conn)?;
        Ok(Self { conn })
    }
}
