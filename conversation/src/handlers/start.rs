use std::sync::Arc;

use async_trait::async_trait;
use gembot_core::{Bot, Handler, HandlerResponse, Message, ParseMode, Result};
use tracing::info;

/// Static `/start` greeting (legacy Markdown).
pub const WELCOME_MESSAGE: &str = "🤖 Hello! I'm your *UPSC CSE Assistant Bot*.\n\n\
📌 Use this thread for:\n\
• Summaries of news articles (just paste the link)\n\
• Quick explanations of GS topics (Polity, Economy, Environment, S&T, History, etc.)\n\
• Prelims-style MCQs and practice\n\
• Strategy tips for Prelims & Mains\n\n\
⚡ Think of me as your AI study companion, keeping everything focused on the *UPSC Civil Services Exam*.";

/// Answers `/start` in the originating chat and thread. Not subject to the allow-list.
pub struct StartHandler {
    bot: Arc<dyn Bot>,
}

impl StartHandler {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Handler for StartHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if message.command() != Some("start") {
            return Ok(HandlerResponse::Continue);
        }
        self.bot
            .send_message(
                &message.chat,
                message.thread_id,
                WELCOME_MESSAGE,
                ParseMode::Markdown,
            )
            .await?;
        info!(chat_id = message.chat.id, "step: welcome sent");
        Ok(HandlerResponse::Reply(WELCOME_MESSAGE.to_string()))
    }
}
