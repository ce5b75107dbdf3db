pub mod add;
pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod log;

use crate::context::AppContext;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Open the configured database, bringing its schema up to date.
pub(crate) fn open_db(ctx: &AppContext) -> AppResult<DbPool> {
    let pool = DbPool::new(&ctx.config.database)?;
    init_db(&pool.conn)?;
    Ok(pool)
}
