use crate::context::AppContext;
use crate::core::logic::Core;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{EntryFilter, load_entries, load_subjects};
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::{ask_overwrite, ensure_writable};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{EntryExport, SessionExport};
use crate::export::ExportFormat;
use crate::models::TimeEntry;
use crate::ui::messages::warning;
use crate::utils::DisplayZone;
use crate::utils::range::Period;
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// Options of one `export` invocation.
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub format: ExportFormat,
    pub file: String,
    /// `None` or `all` exports everything; otherwise a period expression.
    pub range: Option<String>,
    /// Raw entries instead of sessions.
    pub entries: bool,
    pub all_subjects: bool,
    pub force: bool,
}

pub struct ExportLogic;

impl ExportLogic {
    pub fn export(pool: &mut DbPool, ctx: &AppContext, req: &ExportRequest) -> AppResult<()> {
        let path = Path::new(&req.file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {}",
                req.file
            )));
        }

        let period = match &req.range {
            None => Period::All,
            Some(r) => Period::parse(r)?,
        };

        let subjects = if req.all_subjects {
            load_subjects(&pool.conn)?
        } else {
            vec![ctx.subject_id.clone()]
        };

        let written = if req.entries {
            let mut entries = Vec::new();
            for subject in &subjects {
                let filter = EntryFilter::subject(subject.as_str()).around(&period);
                entries.extend(load_entries(&pool.conn, &filter)?);
            }
            let rows = entry_rows(&entries, &period, ctx.zone);
            write_rows(&rows, &req.format, path, req.force)?
        } else {
            // full history per subject, so sessions crossing the period edge pair correctly
            let mut histories = Vec::with_capacity(subjects.len());
            for subject in &subjects {
                histories.push(load_entries(&pool.conn, &EntryFilter::subject(subject.as_str()))?);
            }
            let rows = session_rows(&histories, &period, ctx.zone);
            write_rows(&rows, &req.format, path, req.force)?
        };

        if written > 0 {
            let what = if req.entries { "entries" } else { "sessions" };
            ttlog(
                &pool.conn,
                "export",
                req.format.as_str(),
                &format!("{written} {what} ({}) → {}", period.label(), path.display()),
            )?;
            info!(written, what, path = %path.display(), "export done");
        }

        Ok(())
    }
}

/// One history per subject; each subject's sessions come out newest first.
fn session_rows(
    histories: &[Vec<TimeEntry>],
    period: &Period,
    zone: DisplayZone,
) -> Vec<SessionExport> {
    histories
        .iter()
        .flat_map(|own| Core::sessions_in_period(own, zone, period))
        .map(|s| SessionExport::from_session(&s, zone))
        .collect()
}

fn entry_rows(entries: &[TimeEntry], period: &Period, zone: DisplayZone) -> Vec<EntryExport> {
    entries
        .iter()
        .filter(|e| period.contains(zone.date_of(&e.timestamp)))
        .map(EntryExport::from)
        .collect()
}

/// Returns the number of rows written; nothing is written for an empty set.
fn write_rows<T: Serialize>(
    rows: &[T],
    format: &ExportFormat,
    path: &Path,
    force: bool,
) -> AppResult<usize> {
    if rows.is_empty() {
        warning("No data found for selected range.");
        return Ok(0);
    }

    ensure_writable(path, force, ask_overwrite)?;

    match format {
        ExportFormat::Csv => export_csv(rows, path)?,
        ExportFormat::Json => export_json(rows, path)?,
    }

    Ok(rows.len())
}
