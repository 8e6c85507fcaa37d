use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Keys every config file is expected to carry.
pub const CONFIG_KEYS: &[&str] = &["database", "default_worker", "separator_char"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default)]
    pub default_worker: Option<String>,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}

fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            default_worker: None,
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtreports")
        } else {
            let home = env::var("HOME")
                .map(PathBuf::from)
                .ok()
                .or_else(dirs::home_dir)
                .unwrap_or_else(|| PathBuf::from("."));
            home.join(".rtreports")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtreports.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rtreports.sqlite")
    }

    /// Parse a YAML config document. `~/` in `database` is expanded.
    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let mut cfg: Config =
            serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))?;
        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        Ok(cfg)
    }

    /// Load configuration from `path`, or return defaults if it does not exist.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        Self::from_yaml(&content)
    }

    /// Load the configuration from the standard location.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)
    }

    /// Initialize configuration and database files.
    ///
    /// `custom_db` overrides the default database location.
    /// In test mode the config file is left untouched.
    /// Returns the database path.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = match custom_db {
            Some(name) => expand_tilde(name),
            None => Self::database_file(),
        };

        if !is_test {
            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Config::default()
            };
            config.save_to(&Self::config_file())?;
        }

        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        Ok(db_path)
    }

    /// The worker to use when none is given on the command line.
    pub fn resolve_worker(&self, explicit: Option<&String>) -> AppResult<String> {
        explicit
            .cloned()
            .or_else(|| self.default_worker.clone())
            .filter(|w| !w.trim().is_empty())
            .ok_or(AppError::MissingWorker)
    }
}
