//! `gembot serve` only needs the health port and restart delay; the child loads the rest.

use anyhow::Result;
use std::time::Duration;

use super::{env_parse, env_string, DEFAULT_LOG_FILE, DEFAULT_PORT, DEFAULT_RESTART_DELAY};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServeConfig {
    pub port: u16,
    pub restart_delay: Duration,
    pub log_file: String,
}

impl ServeConfig {
    pub fn load() -> Result<Self> {
        Ok(Self {
            port: env_parse("PORT")?.unwrap_or(DEFAULT_PORT),
            restart_delay: env_parse::<u64>("RESTART_DELAY_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_RESTART_DELAY),
            log_file: env_string("LOG_FILE", DEFAULT_LOG_FILE),
        })
    }
}
