use std::fmt;

/// Identifies an isolated memory window: a chat, or one forum thread of a chat.
///
/// Renders as `"<chat_id>"` or `"<chat_id>:<thread_id>"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConversationKey {
    chat_id: i64,
    thread_id: Option<i32>,
}

impl ConversationKey {
    pub fn new(chat_id: i64, thread_id: Option<i32>) -> Self {
        Self { chat_id, thread_id }
    }

    pub fn chat_id(&self) -> i64 {
        self.chat_id
    }

    pub fn thread_id(&self) -> Option<i32> {
        self.thread_id
    }
}

impl fmt::Display for ConversationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.thread_id {
            Some(thread_id) => write!(f, "{}:{}", self.chat_id, thread_id),
            None => write!(f, "{}", self.chat_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_chat_only() {
        assert_eq!(ConversationKey::new(-1003069777509, None).to_string(), "-1003069777509");
    }

    #[test]
    fn test_display_chat_and_thread() {
        assert_eq!(
            ConversationKey::new(-1003018799293, Some(308)).to_string(),
            "-1003018799293:308"
        );
    }

    #[test]
    fn test_threads_of_same_chat_are_distinct_keys() {
        let a = ConversationKey::new(42, Some(1));
        let b = ConversationKey::new(42, Some(2));
        let c = ConversationKey::new(42, None);
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_ne!(b, c);
    }
}
