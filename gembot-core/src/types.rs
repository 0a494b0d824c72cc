//! Core types: user, chat, message, handler response, and Handler trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// User identity (id, username, names).
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Chat (group, supergroup or private) identity.
#[derive(Debug, Clone)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

/// A single incoming message.
#[derive(Debug, Clone)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    /// Forum topic the message belongs to; `None` outside forum threads.
    pub thread_id: Option<i32>,
    pub content: String,
    /// True when the text is a bot command (starts with `/`).
    pub is_command: bool,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Returns the command name without the leading `/` and any `@botname` suffix,
    /// or `None` if this message is not a command.
    pub fn command(&self) -> Option<&str> {
        if !self.is_command {
            return None;
        }
        let word = self.content.split_whitespace().next()?;
        let word = word.strip_prefix('/')?;
        Some(word.split('@').next().unwrap_or(word))
    }
}

/// Handler result for the chain. `Reply(text)` carries the text that was sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; nothing was sent.
    Stop,
    /// Stop the chain; `text` was sent in reply.
    Reply(String),
}

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific message type to core [`Message`].
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Message;
}

/// One step of the chain. Handlers run in order until one returns Stop or Reply.
#[async_trait]
pub trait Handler: Send + Sync {
    async fn handle(&self, message: &Message) -> crate::error::Result<HandlerResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(content: &str, is_command: bool) -> Message {
        Message {
            id: "1".to_string(),
            user: User {
                id: 7,
                username: None,
                first_name: None,
                last_name: None,
            },
            chat: Chat {
                id: -100,
                chat_type: "supergroup".to_string(),
            },
            thread_id: Some(2),
            content: content.to_string(),
            is_command,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_command_strips_slash_and_bot_suffix() {
        assert_eq!(message("/start", true).command(), Some("start"));
        assert_eq!(message("/start@upsc_bot now", true).command(), Some("start"));
    }

    #[test]
    fn test_command_none_for_plain_text() {
        assert_eq!(message("hello", false).command(), None);
    }
}
