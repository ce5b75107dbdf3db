//! Per-invocation state handed explicitly to every command handler.

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::calculator::expected::parse_work_duration;
use crate::errors::{AppError, AppResult};
use crate::utils::DisplayZone;

/// Everything a command needs to know about who is acting and how to
/// display time. Built once in `run()` from the config file and global flags.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: Config,
    pub subject_id: String,
    pub zone: DisplayZone,
    pub expected_daily_minutes: i64,
}

impl AppContext {
    pub fn resolve(cli: &Cli, mut config: Config) -> AppResult<Self> {
        if let Some(custom_db) = &cli.db {
            config.database = custom_db.clone();
        }

        let subject_id = cli
            .subject
            .clone()
            .unwrap_or_else(|| config.default_subject.clone())
            .trim()
            .to_string();
        if subject_id.is_empty() {
            return Err(AppError::Config("subject id cannot be empty".into()));
        }

        let zone = DisplayZone::parse(cli.tz.as_deref().unwrap_or(&config.timezone))?;
        let expected_daily_minutes = parse_work_duration(&config.min_work_duration)?;

        Ok(Self {
            config,
            subject_id,
            zone,
            expected_daily_minutes,
        })
    }
}
