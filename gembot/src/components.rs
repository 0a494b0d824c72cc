//! Component factory: builds BotComponents from config. Isolates assembly logic from runner.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use conversation::{AllowListHandler, Conversation, ConversationHandler, StartHandler};
use gembot_core::Bot;
use gembot_telegram::TelegramBotAdapter;
use gemini_client::{GeminiClient, GenerativeClient};
use handler_chain::HandlerChain;
use link_resolver::{HttpPageFetcher, PageFetcher};
use session_memory::SessionStore;
use tracing::{info, instrument, warn};

use super::config::BotConfig;

const PAGE_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Core dependencies for one bot attempt; produced by the component factory.
#[derive(Clone)]
pub struct BotComponents {
    pub teloxide_bot: teloxide::Bot,
    /// Bot used by handlers to send/delete. Defaults to the teloxide adapter; tests inject a mock.
    pub handler_bot: Arc<dyn Bot>,
    pub conversation: Arc<Conversation>,
}

/// Builds the teloxide bot, page fetcher, Gemini client and pipeline. `sessions` is shared
/// across attempts so memory survives a restart.
#[instrument(skip(config, sessions, handler_bot_override))]
pub fn build_bot_components(
    config: &BotConfig,
    sessions: Arc<SessionStore>,
    handler_bot_override: Option<Arc<dyn Bot>>,
) -> Result<BotComponents> {
    let teloxide_bot = config.telegram.build_bot()?;
    let handler_bot = handler_bot_override
        .unwrap_or_else(|| Arc::new(TelegramBotAdapter::new(teloxide_bot.clone())));

    let fetcher: Arc<dyn PageFetcher> = Arc::new(
        HttpPageFetcher::new(PAGE_FETCH_TIMEOUT).context("Failed to build page fetcher")?,
    );
    let gemini = GeminiClient::new(config.gemini()).context("Failed to build Gemini client")?;
    info!(endpoint = %gemini.endpoint(), "Gemini client ready");
    let client: Arc<dyn GenerativeClient> = Arc::new(gemini);

    let conversation = Arc::new(Conversation::new(fetcher, sessions, client));

    Ok(BotComponents {
        teloxide_bot,
        handler_bot,
        conversation,
    })
}

/// Chain order: `/start` (ungated) → allow-list gate → conversation.
pub fn build_handler_chain(config: &BotConfig, components: &BotComponents) -> HandlerChain {
    if config.allow_list.is_empty() {
        warn!("ALLOWED_CHATS is empty: the bot will only answer /start");
    } else {
        info!(chats = config.allow_list.len(), "Allow-list loaded");
    }

    HandlerChain::new()
        .add_handler(Arc::new(StartHandler::new(components.handler_bot.clone())))
        .add_handler(Arc::new(AllowListHandler::new(Arc::new(
            config.allow_list.clone(),
        ))))
        .add_handler(Arc::new(
            ConversationHandler::new(
                components.handler_bot.clone(),
                components.conversation.clone(),
            )
            .with_thinking_message(config.thinking_message.clone()),
        ))
}
