use std::sync::Arc;

use async_trait::async_trait;
use gembot_core::{Bot, Handler, HandlerResponse, Message, ParseMode, Result};
use reply_format::markdown_to_html;
use tracing::{debug, info, instrument, warn};

use crate::pipeline::{conversation_key, Conversation};

pub const DEFAULT_THINKING_MESSAGE: &str = "🤔 Thinking... please wait...";

/// Sends a placeholder, runs the [`Conversation`] pipeline, removes the placeholder and sends
/// the reply as HTML into the originating thread.
pub struct ConversationHandler {
    bot: Arc<dyn Bot>,
    conversation: Arc<Conversation>,
    thinking_message: String,
}

impl ConversationHandler {
    pub fn new(bot: Arc<dyn Bot>, conversation: Arc<Conversation>) -> Self {
        Self {
            bot,
            conversation,
            thinking_message: DEFAULT_THINKING_MESSAGE.to_string(),
        }
    }

    pub fn with_thinking_message(mut self, thinking_message: impl Into<String>) -> Self {
        self.thinking_message = thinking_message.into();
        self
    }

    /// Sends `reply` formatted as HTML; if the transport rejects the markup, resends it unformatted.
    async fn send_reply(&self, message: &Message, reply: &str) -> Result<()> {
        let html = markdown_to_html(reply);
        if let Err(e) = self
            .bot
            .send_message(&message.chat, message.thread_id, &html, ParseMode::Html)
            .await
        {
            warn!(error = %e, "HTML reply rejected, resending as plain text");
            self.bot
                .send_message(&message.chat, message.thread_id, reply, ParseMode::Plain)
                .await?;
        }
        Ok(())
    }
}

#[async_trait]
impl Handler for ConversationHandler {
    #[instrument(skip(self, message), fields(chat_id = message.chat.id, thread_id = ?message.thread_id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let placeholder = match self
            .bot
            .send_message(
                &message.chat,
                message.thread_id,
                &self.thinking_message,
                ParseMode::Plain,
            )
            .await
        {
            Ok(id) => Some(id),
            Err(e) => {
                warn!(error = %e, "placeholder not sent");
                None
            }
        };

        let key = conversation_key(message);
        let reply = self.conversation.produce_reply(key, &message.content).await;

        if let Some(id) = placeholder {
            if let Err(e) = self.bot.delete_message(&message.chat, &id).await {
                debug!(error = %e, message_id = %id, "placeholder delete failed, ignoring");
            }
        }

        self.send_reply(message, &reply).await?;
        info!(reply_chars = reply.chars().count(), "step: reply sent");
        Ok(HandlerResponse::Reply(reply))
    }
}
