use crate::cli::parser::Commands;
use crate::context::AppContext;
use crate::core::add::{AddLogic, AddOutcome};
use crate::core::calculator::format_duration;
use crate::errors::{AppError, AppResult};
use crate::models::{EntryKind, Location};
use crate::ui::messages::{success, warning};
use crate::utils::date::parse_timestamp;
use chrono::Utc;

use super::open_db;

/// Record a check-in or check-out for the current subject.
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Add {
        kind,
        at,
        lat,
        lon,
        address,
    } = cmd
    {
        let kind = EntryKind::from_code(kind).ok_or_else(|| {
            AppError::InvalidEntryKind(format!("'{}' (use 'in' or 'out')", kind))
        })?;

        let timestamp = match at {
            Some(raw) => parse_timestamp(raw, ctx.zone)?,
            None => Utc::now(),
        };

        let location = Location::from_parts(*lat, *lon, address.clone())?;

        let mut pool = open_db(ctx)?;
        let (entry, outcome) =
            AddLogic::apply(&mut pool, &ctx.subject_id, kind, timestamp, location, ctx.zone)?;

        let when = ctx.zone.format(&entry.timestamp, "%Y-%m-%d %H:%M");
        success(format!(
            "Recorded {} for {} at {} (#{}).",
            kind.label(),
            ctx.subject_id,
            when,
            entry.id
        ));

        match outcome {
            AddOutcome::Opened { open_before } if open_before > 0 => warning(format!(
                "{} earlier check-in(s) still open; the next check-out closes the oldest one.",
                open_before
            )),
            AddOutcome::Opened { .. } => {}
            AddOutcome::Closed { check_in_id, minutes } => success(format!(
                "Session from #{} closed: {}.",
                check_in_id,
                format_duration(Some(minutes))
            )),
            AddOutcome::Orphan => warning(
                "No open check-in before this check-out; it will not appear in any session.",
            ),
        }
    }

    Ok(())
}
