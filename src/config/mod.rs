//! Typed configuration from environment variables.
//!
//! Loads once at startup, fails fast on malformed values.

use std::env::VarError;

use crate::error::{Error, Result};

#[derive(Debug)]
pub struct Config {
    pub log_level: String,
    /// Max events the store retains. None = unbounded.
    pub event_cap: Option<usize>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// In local dev, call `dotenvy::dotenv().ok()` before this.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            event_cap: optional_usize("WORKITEMS_EVENT_CAP")?,
        })
    }
}

fn optional_usize(name: &str) -> Result<Option<usize>> {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| Error::Config(format!("{name} must be a non-negative integer, got {raw:?}"))),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(raw)) => Err(Error::Config(format!(
            "{name} is not valid UTF-8: {raw:?}"
        ))),
    }
}
