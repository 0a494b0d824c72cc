//! Config: BotConfig for `run`, ServeConfig for `serve`. Loaded from env.

mod bot_config;
mod serve_config;


pub use bot_config::BotConfig;
pub use serve_config::ServeConfig;

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_LOG_FILE: &str = "logs/gembot.log";
pub const DEFAULT_PORT: u16 = 10000;
pub const DEFAULT_RESTART_DELAY: Duration = Duration::from_secs(5);

/// Reads `name`, parsing it when set. Unset or blank yields `None`; a bad value is an error.
pub(crate) fn env_parse<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{} has an invalid value: {}", name, raw)),
        _ => Ok(None),
    }
}

pub(crate) fn env_string(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
