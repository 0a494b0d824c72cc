use std::sync::Arc;

use async_trait::async_trait;
use gembot_core::{Handler, HandlerResponse, Message, Result};
use tracing::debug;

use crate::AllowList;

/// Lets plain text from allow-listed chats/threads through; stops everything else silently.
pub struct AllowListHandler {
    allow_list: Arc<AllowList>,
}

impl AllowListHandler {
    pub fn new(allow_list: Arc<AllowList>) -> Self {
        Self { allow_list }
    }
}

#[async_trait]
impl Handler for AllowListHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if message.is_command || message.content.is_empty() {
            debug!(chat_id = message.chat.id, "dropped: not plain text");
            return Ok(HandlerResponse::Stop);
        }
        if !self.allow_list.permits(message.chat.id, message.thread_id) {
            debug!(
                chat_id = message.chat.id,
                thread_id = ?message.thread_id,
                "dropped: chat/thread not allowed"
            );
            return Ok(HandlerResponse::Stop);
        }
        Ok(HandlerResponse::Continue)
    }
}
