use crate::cli::parser::Commands;
use crate::context::AppContext;
use crate::errors::AppResult;
use crate::export::{ExportLogic, ExportRequest};

use super::open_db;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        entries,
        all_subjects,
        force,
    } = cmd
    {
        let mut pool = open_db(ctx)?;
        let request = ExportRequest {
            format: format.clone(),
            file: file.clone(),
            range: range.clone(),
            entries: *entries,
            all_subjects: *all_subjects,
            force: *force,
        };
        ExportLogic::export(&mut pool, ctx, &request)?;
    }
    Ok(())
}
