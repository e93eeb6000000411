//! Runtime configuration resolved from the environment.
//!
//! # Invariants
//! - Every setting has a default; only malformed values are errors.
//! - Secrets (admin key, API key) are never logged.

use crate::auth::{DEFAULT_ADMIN_KEY, DEFAULT_SESSION_TTL};
use crate::insight::DEFAULT_INSIGHT_TIMEOUT;
use crate::logging::default_log_level;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::time::Duration;

pub const ENV_DATA_DIR: &str = "BRAINCARE_DATA_DIR";
pub const ENV_LOG_LEVEL: &str = "BRAINCARE_LOG_LEVEL";
pub const ENV_ADMIN_KEY: &str = "BRAINCARE_ADMIN_KEY";
pub const ENV_MODEL: &str = "BRAINCARE_MODEL";
pub const ENV_INSIGHT_TIMEOUT_SECS: &str = "BRAINCARE_INSIGHT_TIMEOUT_SECS";
pub const ENV_SESSION_TTL_SECS: &str = "BRAINCARE_SESSION_TTL_SECS";
/// Checked in order; the first non-empty value wins.
pub const ENV_API_KEYS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
const DEFAULT_DATA_DIR_NAME: &str = ".braincare";
const DB_FILE_NAME: &str = "braincare.sqlite3";
const LOG_DIR_NAME: &str = "logs";

#[derive(Debug)]
pub enum ConfigError {
    InvalidNumber { key: &'static str, value: String },
    WorkingDir(std::io::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidNumber { key, value } => {
                write!(f, "`{key}` must be a positive integer, got `{value}`")
            }
            Self::WorkingDir(err) => write!(f, "cannot resolve working directory: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::WorkingDir(err) => Some(err),
            Self::InvalidNumber { .. } => None,
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    /// Absolute directory holding the slot database and logs.
    pub data_dir: PathBuf,
    pub log_level: String,
    pub admin_key: String,
    pub gemini_api_key: Option<String>,
    pub model: String,
    pub insight_timeout: Duration,
    pub session_ttl: Duration,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("data_dir", &self.data_dir)
            .field("log_level", &self.log_level)
            .field("admin_key", &"<redacted>")
            .field("gemini_api_key", &self.gemini_api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("insight_timeout", &self.insight_timeout)
            .field("session_ttl", &self.session_ttl)
            .finish()
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let data_dir = match get(ENV_DATA_DIR) {
            Some(dir) => absolutize(PathBuf::from(dir))?,
            None => absolutize(PathBuf::from(DEFAULT_DATA_DIR_NAME))?,
        };

        Ok(Self {
            data_dir,
            log_level: get(ENV_LOG_LEVEL).unwrap_or_else(|| default_log_level().to_string()),
            admin_key: get(ENV_ADMIN_KEY).unwrap_or_else(|| DEFAULT_ADMIN_KEY.to_string()),
            gemini_api_key: ENV_API_KEYS.iter().find_map(|key| get(*key)),
            model: get(ENV_MODEL).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            insight_timeout: parse_secs(
                ENV_INSIGHT_TIMEOUT_SECS,
                get(ENV_INSIGHT_TIMEOUT_SECS),
                DEFAULT_INSIGHT_TIMEOUT,
            )?,
            session_ttl: parse_secs(
                ENV_SESSION_TTL_SECS,
                get(ENV_SESSION_TTL_SECS),
                DEFAULT_SESSION_TTL,
            )?,
        })
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(DB_FILE_NAME)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join(LOG_DIR_NAME)
    }
}

fn absolutize(path: PathBuf) -> Result<PathBuf, ConfigError> {
    if path.is_absolute() {
        return Ok(path);
    }
    let cwd = std::env::current_dir().map_err(ConfigError::WorkingDir)?;
    Ok(cwd.join(path))
}

fn parse_secs(
    key: &'static str,
    value: Option<String>,
    default: Duration,
) -> Result<Duration, ConfigError> {
    let Some(value) = value else {
        return Ok(default);
    };
    match value.parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidNumber { key, value }),
    }
}
