//! The pairing engine: sessions, date groups and totals.

pub mod expected;
pub mod grouping;
pub mod pairing;
pub mod totals;

pub use grouping::{DayGroup, SessionsByDate, group_by_date};
pub use pairing::{pair_entries, pair_entries_in, partition_by_subject};
pub use totals::{IN_PROGRESS, format_duration, total_duration_minutes};
