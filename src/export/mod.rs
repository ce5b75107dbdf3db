mod fs_utils;
mod json_csv;
pub mod logic;
mod model;

pub use logic::{ExportLogic, ExportRequest};
pub use model::{EntryExport, SessionExport};

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

pub(crate) fn notify_export_success(label: &str, rows: usize, path: &Path) {
    success(format!(
        "{label} export completed: {rows} row(s) → {}",
        path.display()
    ));
}

#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}
