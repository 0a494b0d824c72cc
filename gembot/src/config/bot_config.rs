//! Everything `gembot run` needs: Telegram connection, Gemini, memory, gate, logging.

use anyhow::{Context, Result};
use conversation::{AllowList, DEFAULT_THINKING_MESSAGE};
use gembot_telegram::TelegramConfig;
use gemini_client::{GeminiConfig, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT};
use session_memory::DEFAULT_WINDOW;
use std::env;
use std::time::Duration;

use super::{env_parse, env_string, DEFAULT_LOG_FILE, DEFAULT_PORT, DEFAULT_RESTART_DELAY};

#[derive(Debug, Clone)]
pub struct BotConfig {
    pub telegram: TelegramConfig,
    /// GEMINI_API_KEY
    pub gemini_api_key: String,
    /// GEMINI_MODEL
    pub gemini_model: String,
    /// GEMINI_BASE_URL
    pub gemini_base_url: String,
    /// GEMINI_TIMEOUT_SECS
    pub gemini_timeout: Duration,
    /// MEMORY_WINDOW: turns kept per conversation
    pub memory_window: usize,
    /// SESSION_IDLE_TTL_SECS; `None` keeps sessions for the life of the process
    pub session_idle_ttl: Option<Duration>,
    /// ALLOWED_CHATS
    pub allow_list: AllowList,
    /// THINKING_MESSAGE
    pub thinking_message: String,
    /// LOG_FILE
    pub log_file: String,
    /// PORT for the optional in-process health server
    pub port: u16,
    /// RESTART_DELAY_SECS
    pub restart_delay: Duration,
}

impl BotConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN / AITOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let telegram = TelegramConfig::from_env(token)?;
        let gemini_api_key = env::var("GEMINI_API_KEY")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .context("GEMINI_API_KEY not set")?;
        let allow_list = env::var("ALLOWED_CHATS")
            .unwrap_or_default()
            .parse::<AllowList>()
            .context("ALLOWED_CHATS is malformed")?;

        Ok(Self {
            telegram,
            gemini_api_key,
            gemini_model: env_string("GEMINI_MODEL", DEFAULT_MODEL),
            gemini_base_url: env_string("GEMINI_BASE_URL", DEFAULT_BASE_URL),
            gemini_timeout: env_parse::<u64>("GEMINI_TIMEOUT_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_TIMEOUT),
            memory_window: env_parse("MEMORY_WINDOW")?.unwrap_or(DEFAULT_WINDOW),
            session_idle_ttl: env_parse::<u64>("SESSION_IDLE_TTL_SECS")?.map(Duration::from_secs),
            allow_list,
            thinking_message: env_string("THINKING_MESSAGE", DEFAULT_THINKING_MESSAGE),
            log_file: env_string("LOG_FILE", DEFAULT_LOG_FILE),
            port: env_parse("PORT")?.unwrap_or(DEFAULT_PORT),
            restart_delay: env_parse::<u64>("RESTART_DELAY_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_RESTART_DELAY),
        })
    }

    /// Validate config (Telegram API root must be a URL, window must be positive).
    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()?;
        if self.memory_window == 0 {
            anyhow::bail!("MEMORY_WINDOW must be at least 1");
        }
        if self.gemini_timeout.is_zero() {
            anyhow::bail!("GEMINI_TIMEOUT_SECS must be at least 1");
        }
        Ok(())
    }

    pub fn gemini(&self) -> GeminiConfig {
        GeminiConfig::new(self.gemini_api_key.clone())
            .with_base_url(self.gemini_base_url.clone())
            .with_model(self.gemini_model.clone())
            .with_timeout(self.gemini_timeout)
    }
}
