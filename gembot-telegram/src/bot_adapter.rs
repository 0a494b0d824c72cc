//! Wraps teloxide::Bot and implements [`gembot_core::Bot`]. Tests substitute another Bot impl.

use async_trait::async_trait;
use gembot_core::{parse_message_id, Bot as CoreBot, Chat, GembotError, ParseMode, Result};
use teloxide::{
    prelude::*,
    types::{ChatId, MessageId, ParseMode as TgParseMode, ThreadId},
};

/// Thin wrapper around teloxide::Bot that implements gembot-core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

#[allow(deprecated)]
fn to_teloxide_parse_mode(mode: ParseMode) -> Option<TgParseMode> {
    match mode {
        ParseMode::Plain => None,
        ParseMode::Html => Some(TgParseMode::Html),
        ParseMode::Markdown => Some(TgParseMode::Markdown),
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(
        &self,
        chat: &Chat,
        thread_id: Option<i32>,
        text: &str,
        parse_mode: ParseMode,
    ) -> Result<String> {
        let mut request = self.bot.send_message(ChatId(chat.id), text.to_string());
        if let Some(thread_id) = thread_id {
            request = request.message_thread_id(ThreadId(MessageId(thread_id)));
        }
        if let Some(mode) = to_teloxide_parse_mode(parse_mode) {
            request = request.parse_mode(mode);
        }
        let sent = request
            .await
            .map_err(|e| GembotError::Bot(e.to_string()))?;
        Ok(sent.id.to_string())
    }

    async fn delete_message(&self, chat: &Chat, message_id: &str) -> Result<()> {
        let id = parse_message_id(message_id)?;
        self.bot
            .delete_message(ChatId(chat.id), MessageId(id))
            .await
            .map_err(|e| GembotError::Bot(e.to_string()))?;
        Ok(())
    }
}
