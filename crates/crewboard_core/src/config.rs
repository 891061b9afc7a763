//! Runtime configuration resolved from the process environment.
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `CREWBOARD_DB_PATH` | preferences database file | `<temp>/crewboard_prefs.sqlite3` |
//! | `CREWBOARD_LOG_LEVEL` | `trace`..`error` | `debug` in debug builds, else `info` |
//! | `CREWBOARD_LOG_DIR` | absolute directory for rolling logs | unset: file logging off |

use crate::logging::default_log_level;
use std::path::PathBuf;

pub const DB_PATH_ENV: &str = "CREWBOARD_DB_PATH";
pub const LOG_LEVEL_ENV: &str = "CREWBOARD_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "CREWBOARD_LOG_DIR";

const DEFAULT_DB_FILE_NAME: &str = "crewboard_prefs.sqlite3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub db_path: PathBuf,
    pub log_level: String,
    pub log_dir: Option<PathBuf>,
}

impl CoreConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source.
    ///
    /// Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |name: &str| {
            lookup(name)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            db_path: read(DB_PATH_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_DB_FILE_NAME)),
            log_level: read(LOG_LEVEL_ENV).unwrap_or_else(|| default_log_level().to_string()),
            log_dir: read(LOG_DIR_ENV).map(PathBuf::from),
        }
    }
}
