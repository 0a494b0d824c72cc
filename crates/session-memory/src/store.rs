use std::collections::VecDeque;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use tracing::{debug, info};

use crate::{ConversationKey, Role, Turn};

/// Default number of turns retained per conversation.
pub const DEFAULT_WINDOW: usize = 5;

#[derive(Debug)]
struct Session {
    turns: VecDeque<Turn>,
    last_active: Instant,
}

impl Session {
    fn new() -> Self {
        Self {
            turns: VecDeque::new(),
            last_active: Instant::now(),
        }
    }
}

/// Concurrent map from [`ConversationKey`] to a bounded window of turns.
#[derive(Debug)]
pub struct SessionStore {
    sessions: DashMap<ConversationKey, Session>,
    window: usize,
}

impl SessionStore {
    /// Creates an empty store retaining at most `window` turns per key. A zero window is raised to one.
    pub fn new(window: usize) -> Self {
        Self {
            sessions: DashMap::new(),
            window: window.max(1),
        }
    }

    /// Returns the turns of the session for `key`, oldest first, inserting an empty session on first use.
    pub fn get_or_create(&self, key: ConversationKey) -> Vec<Turn> {
        let entry = self.sessions.entry(key).or_insert_with(|| {
            debug!(key = %key, "session created");
            Session::new()
        });
        entry.turns.iter().cloned().collect()
    }

    /// Appends a turn and trims the session to the most recent `window` turns.
    ///
    /// Returns the retained window (oldest first) as observed right after this append, so a
    /// caller can build a request from exactly the state its own append produced.
    pub fn append(&self, key: ConversationKey, role: Role, content: impl Into<String>) -> Vec<Turn> {
        let mut entry = self.sessions.entry(key).or_insert_with(Session::new);
        entry.turns.push_back(Turn::new(role, content));
        while entry.turns.len() > self.window {
            entry.turns.pop_front();
        }
        entry.last_active = Instant::now();
        debug!(key = %key, role = role.as_str(), len = entry.turns.len(), "turn appended");
        entry.turns.iter().cloned().collect()
    }

    /// Turns of an existing session without creating one.
    pub fn snapshot(&self, key: &ConversationKey) -> Option<Vec<Turn>> {
        self.sessions
            .get(key)
            .map(|s| s.turns.iter().cloned().collect())
    }

    /// Number of turns stored for `key` (0 when no session exists).
    pub fn turn_count(&self, key: &ConversationKey) -> usize {
        self.sessions.get(key).map(|s| s.turns.len()).unwrap_or(0)
    }

    /// Number of sessions (distinct keys seen).
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Removes sessions whose last append is older than `max_idle`. Returns how many were removed.
    pub fn evict_idle(&self, max_idle: Duration) -> usize {
        let before = self.sessions.len();
        self.sessions
            .retain(|_, session| session.last_active.elapsed() < max_idle);
        let evicted = before.saturating_sub(self.sessions.len());
        if evicted > 0 {
            info!(evicted, remaining = self.sessions.len(), "step: idle sessions evicted");
        }
        evicted
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}
