use crate::cli::parser::Commands;
use crate::context::AppContext;
use crate::core::log::LogLogic;
use crate::errors::AppResult;

use super::open_db;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let mut pool = open_db(ctx)?;
        LogLogic::print_log(&mut pool)?;
    }

    Ok(())
}
