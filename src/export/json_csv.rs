use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::ui::messages::info;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json<T: Serialize>(rows: &[T], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(rows)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;
    file.write_all(b"\n")?;

    notify_export_success("JSON", rows.len(), path);
    Ok(())
}

/// Export CSV; the header comes from the row type's field names.
pub(crate) fn export_csv<T: Serialize>(rows: &[T], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;
    for item in rows {
        wtr.serialize(item)?;
    }
    wtr.flush()?;

    notify_export_success("CSV", rows.len(), path);
    Ok(())
}
