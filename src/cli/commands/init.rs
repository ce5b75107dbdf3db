use crate::cli::parser::Cli;
use crate::config::Config;
use crate::context::AppContext;
use crate::db::initialize::init_db;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `init` command
///
/// Creates the config directory and file, the SQLite database and runs
/// every pending migration.
pub fn handle(cli: &Cli, _ctx: &AppContext) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.as_deref(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing Fichalia…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database    : {}", db_path);

    let pool = DbPool::new(&db_path)?;
    init_db(&pool.conn)?;

    // audit failures must not fail init
    if let Err(e) = log::ttlog(
        &pool.conn,
        "init",
        "",
        &format!("Database initialized at {}", db_path),
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    success(format!("Database initialized at {}", db_path));
    Ok(())
}
