use log::{info, warn};
use std::{env, path::PathBuf};
use thiserror::Error;

const PORT_VAR: &str = "PORT";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_STATIC_ROOT: &str = ".";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("invalid PORT value {value:?}: {reason}")]
    InvalidPort { value: String, reason: String },
}

/// Runtime settings, resolved once at start-up.
///
/// Only the listening port can be overridden, through the `PORT`
/// environment variable. The host and the static root are fixed.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Directory the companion frontend files are served from.
    pub static_root: PathBuf,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_port_var(env::var(PORT_VAR).ok())
    }

    fn from_port_var(raw: Option<String>) -> Result<Self, ConfigError> {
        let port = match raw {
            Some(value) => value.trim().parse().map_err(|e: std::num::ParseIntError| {
                warn!("Invalid {PORT_VAR} value {value:?}: {e}");
                ConfigError::InvalidPort {
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?,
            None => {
                info!("{PORT_VAR} not set, using default: {DEFAULT_PORT}");
                DEFAULT_PORT
            }
        };

        Ok(Self {
            host: DEFAULT_HOST.to_string(),
            port,
            static_root: PathBuf::from(DEFAULT_STATIC_ROOT),
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
