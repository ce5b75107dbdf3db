use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Overrides the configuration directory (used by tests and portable installs).
pub const HOME_ENV: &str = "FICHALIA_HOME";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_subject")]
    pub default_subject: String,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default = "default_min_work_duration")]
    pub min_work_duration: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_subject() -> String {
    env::var("USER")
        .or_else(|_| env::var("USERNAME"))
        .ok()
        .filter(|u| !u.trim().is_empty())
        .unwrap_or_else(|| "default".to_string())
}
fn default_timezone() -> String {
    "local".to_string()
}
fn default_min_work_duration() -> String {
    "8h".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            default_subject: default_subject(),
            timezone: default_timezone(),
            min_work_duration: default_min_work_duration(),
        }
    }
}

impl Config {
    /// `$FICHALIA_HOME`, otherwise `~/.fichalia`.
    pub fn config_dir() -> PathBuf {
        if let Some(dir) = env::var_os(HOME_ENV).filter(|d| !d.is_empty()) {
            return PathBuf::from(dir);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".fichalia")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("fichalia.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("fichalia.sqlite")
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("cannot parse configuration: {e}")))
    }

    /// Load the configuration file, or the defaults when there is none.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_yaml(&content)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;
        Ok(())
    }

    /// Create the config directory, the config file (unless `is_test`)
    /// and an empty database file. Returns the database path.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // relative names land in the config directory
        let db_path = match custom_db {
            Some(name) if Path::new(name).is_absolute() => PathBuf::from(name),
            Some(name) => dir.join(name),
            None => Self::database_file(),
        };

        if !is_test {
            let mut config = Self::load()?;
            config.database = db_path.to_string_lossy().to_string();
            config.save_to(&Self::config_file())?;
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        Ok(db_path)
    }
}
