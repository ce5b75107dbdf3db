use super::{entry_kind::EntryKind, location::Location};
use chrono::{DateTime, Local, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// A single check-in or check-out, as written by the entry store.
/// Entries are never modified once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: i64,                  // ⇔ entries.id
    pub subject_id: String,       // ⇔ entries.subject_id
    pub kind: EntryKind,          // ⇔ entries.kind ('check_in' | 'check_out')
    pub timestamp: DateTime<Utc>, // ⇔ entries.timestamp (RFC 3339, UTC)
    #[serde(default)]
    pub location: Location, // ⇔ entries.latitude / longitude / address
    pub source: String,     // ⇔ entries.source (default 'cli')
    pub created_at: String, // ⇔ entries.created_at
}

impl TimeEntry {
    /// Entry created by the CLI, not yet stored (`id = 0`).
    /// The timestamp is cut to whole seconds, the precision the store keeps.
    pub fn new(
        subject_id: impl Into<String>,
        kind: EntryKind,
        timestamp: DateTime<Utc>,
        location: Location,
    ) -> Self {
        Self {
            id: 0,
            subject_id: subject_id.into(),
            kind,
            timestamp: timestamp.trunc_subsecs(0),
            location,
            source: "cli".to_string(),
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    /// Storage form of the timestamp. Second precision with a `Z` suffix
    /// keeps lexical and chronological order identical.
    pub fn timestamp_str(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    pub fn is_check_in(&self) -> bool {
        self.kind.is_check_in()
    }

    pub fn is_check_out(&self) -> bool {
        self.kind.is_check_out()
    }
}
