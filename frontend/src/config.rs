use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

const ENV_GLOBAL: &str = "__MEALS_ENV";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default, alias = "LOG_LEVEL")]
    pub log_level: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed runtime config: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("invalid log level: {0}")]
    InvalidLogLevel(String),
}

impl RuntimeConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Defaults to `Info` when unset.
    pub fn log_level(&self) -> Result<log::Level, ConfigError> {
        match self.log_level.as_deref().map(str::trim) {
            None | Some("") => Ok(log::Level::Info),
            Some(level) => log::Level::from_str(level)
                .map_err(|_| ConfigError::InvalidLogLevel(level.to_string())),
        }
    }
}

fn read_env_global() -> Option<String> {
    // Expect optional global object: window.__MEALS_ENV = { log_level: "debug" }
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &ENV_GLOBAL.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    js_sys::JSON::stringify(&any).ok()?.as_string()
}

/// Reads `window.__MEALS_ENV`, falling back to defaults.
pub fn load() -> RuntimeConfig {
    let Some(raw) = read_env_global() else {
        return RuntimeConfig::default();
    };
    match RuntimeConfig::from_json(&raw) {
        Ok(cfg) => cfg,
        Err(err) => {
            web_sys::console::warn_1(&format!("Ignoring {}: {}", ENV_GLOBAL, err).into());
            RuntimeConfig::default()
        }
    }
}
