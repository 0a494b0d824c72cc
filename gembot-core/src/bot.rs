//! Bot abstraction for sending and deleting messages.
//!
//! [`Bot`] is transport-agnostic; gembot-telegram implements it via teloxide.

use crate::error::{GembotError, Result};
use crate::types::Chat;
use async_trait::async_trait;

/// How the transport should interpret the text of an outgoing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// No markup; text is shown as-is.
    #[default]
    Plain,
    /// HTML subset (`<b>`, `<i>`, `<code>`, ...).
    Html,
    /// Legacy Markdown.
    Markdown,
}

/// Abstraction for sending and deleting messages. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends `text` to the chat (and forum thread, when given). Returns the transport message id.
    async fn send_message(
        &self,
        chat: &Chat,
        thread_id: Option<i32>,
        text: &str,
        parse_mode: ParseMode,
    ) -> Result<String>;

    /// Deletes a previously sent message. `message_id` is the value returned by `send_message`.
    async fn delete_message(&self, chat: &Chat, message_id: &str) -> Result<()>;
}

/// Parses a transport message id string into an i32.
pub fn parse_message_id(s: &str) -> Result<i32> {
    s.parse()
        .map_err(|_| GembotError::Bot(format!("Invalid message_id: {}", s)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_message_id_valid() {
        assert_eq!(parse_message_id("123").unwrap(), 123);
        assert_eq!(parse_message_id("0").unwrap(), 0);
    }

    #[test]
    fn test_parse_message_id_invalid() {
        assert!(parse_message_id("").is_err());
        assert!(parse_message_id("abc").is_err());
        assert!(parse_message_id("12.3").is_err());
    }

    #[test]
    fn test_parse_mode_default_is_plain() {
        assert_eq!(ParseMode::default(), ParseMode::Plain);
    }
}
