//! Client configuration.
//!
//! The backend base address is fixed per deployment. Native tools read it
//! from the environment at runtime; the WASM bundle bakes it in at build
//! time since a browser has no process environment.
//!
//! - `LABNOTE_API_BASE`: backend base URL, default `http://127.0.0.1:8000`
//! - `LABNOTE_LOG_LEVEL`: console log level, default `info`

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

pub const API_BASE_VAR: &str = "LABNOTE_API_BASE";
pub const LOG_LEVEL_VAR: &str = "LABNOTE_LOG_LEVEL";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid LABNOTE_API_BASE: {0} (expected an http:// or https:// URL)")]
    InvalidBaseUrl(String),

    #[error("invalid LABNOTE_LOG_LEVEL: {0}")]
    InvalidLogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
    pub log_level: log::Level,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base: DEFAULT_API_BASE.to_owned(), log_level: DEFAULT_LOG_LEVEL }
    }
}

impl ClientConfig {
    /// Build a config for `api_base` with the default log level.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] unless the base is an http(s) URL.
    pub fn new(api_base: &str) -> Result<Self, ConfigError> {
        Ok(Self { api_base: parse_api_base(api_base)?, log_level: DEFAULT_LOG_LEVEL })
    }

    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if either variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            std::env::var(API_BASE_VAR).ok().as_deref(),
            std::env::var(LOG_LEVEL_VAR).ok().as_deref(),
        )
    }

    /// Read configuration captured from the build environment.
    ///
    /// # Errors
    ///
    /// Returns an error if either variable was set to an invalid value at build time.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(option_env!("LABNOTE_API_BASE"), option_env!("LABNOTE_LOG_LEVEL"))
    }

    fn from_values(api_base: Option<&str>, log_level: Option<&str>) -> Result<Self, ConfigError> {
        Ok(Self {
            api_base: parse_api_base(api_base.unwrap_or(DEFAULT_API_BASE))?,
            log_level: parse_log_level(log_level)?,
        })
    }
}

fn parse_api_base(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let has_host = trimmed
        .strip_prefix("http://")
        .or_else(|| trimmed.strip_prefix("https://"))
        .is_some_and(|rest| !rest.is_empty());
    if !has_host {
        return Err(ConfigError::InvalidBaseUrl(raw.to_owned()));
    }
    Ok(trimmed.to_owned())
}

fn parse_log_level(raw: Option<&str>) -> Result<log::Level, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_LOG_LEVEL),
        Some(value) => value
            .parse::<log::Level>()
            .map_err(|_| ConfigError::InvalidLogLevel(value.to_owned())),
    }
}
