use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, Write};
use std::path::Path;

/// Check that the export target may be written.
///
/// A missing file or `force` passes straight through; otherwise `confirm`
/// decides whether the existing file is overwritten.
pub(crate) fn ensure_writable<F>(path: &Path, force: bool, confirm: F) -> AppResult<()>
where
    F: FnOnce(&Path) -> io::Result<bool>,
{
    if !path.exists() || force {
        return Ok(());
    }

    if confirm(path)? {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(
            "cancelled: existing file not overwritten".into(),
        ))
    }
}

/// Ask on stdin; anything but `y`/`yes` declines.
pub(crate) fn ask_overwrite(path: &Path) -> io::Result<bool> {
    warning(format!("The file '{}' already exists.", path.display()));

    print!("Overwrite? [y/N]: ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
