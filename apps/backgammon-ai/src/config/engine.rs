//! Engine bridge settings read from the environment.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::engine::{DEFAULT_SERVICE_URL, DEFAULT_TIMEOUT};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {name}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    fn invalid(name: &'static str, value: &str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            name,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// How the bridge reaches the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineMode {
    /// Spawn a local executable.
    Process,
    /// POST to an evaluation service.
    Service { base_url: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub mode: EngineMode,
    /// Probed before the usual locations.
    pub executable: Option<PathBuf>,
    pub timeout: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            mode: EngineMode::Process,
            executable: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl EngineConfig {
    /// Read `GNUBG_MODE`, `GNUBG_PATH`, `GNUBG_SERVICE_URL` and `GNUBG_TIMEOUT_MS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            mode: mode()?,
            executable: executable(),
            timeout: timeout()?,
        })
    }
}

fn mode() -> Result<EngineMode, ConfigError> {
    let raw = env::var("GNUBG_MODE").unwrap_or_else(|_| "process".to_string());
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "process" => Ok(EngineMode::Process),
        "service" => Ok(EngineMode::Service {
            base_url: env::var("GNUBG_SERVICE_URL")
                .unwrap_or_else(|_| DEFAULT_SERVICE_URL.to_string()),
        }),
        _ => Err(ConfigError::invalid(
            "GNUBG_MODE",
            &raw,
            "expected 'process' or 'service'",
        )),
    }
}

fn executable() -> Option<PathBuf> {
    env::var_os("GNUBG_PATH")
        .filter(|path| !path.is_empty())
        .map(PathBuf::from)
}

fn timeout() -> Result<Duration, ConfigError> {
    let Ok(raw) = env::var("GNUBG_TIMEOUT_MS") else {
        return Ok(DEFAULT_TIMEOUT);
    };
    let millis: u64 = raw.trim().parse().map_err(|e: std::num::ParseIntError| {
        ConfigError::invalid("GNUBG_TIMEOUT_MS", &raw, e.to_string())
    })?;
    if millis == 0 {
        return Err(ConfigError::invalid(
            "GNUBG_TIMEOUT_MS",
            &raw,
            "must be greater than zero",
        ));
    }
    Ok(Duration::from_millis(millis))
}
