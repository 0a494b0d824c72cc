//! Chats and forum threads the bot answers in.

use std::collections::HashSet;
use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AllowListError {
    #[error("invalid chat id in allow-list entry '{0}'")]
    InvalidChat(String),

    #[error("invalid thread id in allow-list entry '{0}'")]
    InvalidThread(String),
}

/// Immutable set of (chat id, thread id) pairs.
///
/// A pair with a thread admits only messages from that thread; a pair without one admits every
/// message of the chat. One chat may be listed with several threads. Chats not listed are never
/// admitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
    entries: HashSet<(i64, Option<i32>)>,
}

impl AllowList {
    pub fn new(entries: impl IntoIterator<Item = (i64, Option<i32>)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn permits(&self, chat_id: i64, thread_id: Option<i32>) -> bool {
        self.entries.contains(&(chat_id, None))
            || thread_id.is_some_and(|thread| self.entries.contains(&(chat_id, Some(thread))))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parses `chat[:thread]` entries separated by commas, e.g. `-1003069777509:2,-1003018799293:308`.
impl FromStr for AllowList {
    type Err = AllowListError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut entries = HashSet::new();
        for entry in s.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (chat, thread) = match entry.split_once(':') {
                Some((chat, thread)) => (chat.trim(), Some(thread.trim())),
                None => (entry, None),
            };
            let chat_id: i64 = chat
                .parse()
                .map_err(|_| AllowListError::InvalidChat(entry.to_string()))?;
            let thread_id = thread
                .map(|t| t.parse::<i32>())
                .transpose()
                .map_err(|_| AllowListError::InvalidThread(entry.to_string()))?;
            entries.insert((chat_id, thread_id));
        }
        Ok(Self { entries })
    }
}
