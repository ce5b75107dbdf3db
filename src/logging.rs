use tracing_subscriber::{EnvFilter, fmt};

use crate::errors::{AppError, AppResult};

/// Filter directives, e.g. `FICHALIA_LOG=fichalia=debug`.
pub const LOG_ENV: &str = "FICHALIA_LOG";

/// Diagnostics go to stderr so command output stays clean.
pub fn init() -> AppResult<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}
