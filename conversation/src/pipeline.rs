//! The reply pipeline for one incoming message.

use std::sync::Arc;

use gemini_client::{Content, GenerateContentRequest, GenerativeClient};
use gembot_core::Message;
use link_resolver::{LinkResolver, PageFetcher};
use session_memory::{ConversationKey, Role, SessionStore, Turn};
use tracing::{debug, info, instrument, warn};

/// Upper bound on stored and returned reply length, in characters (Telegram's message limit).
pub const MAX_REPLY_CHARS: usize = 4096;

/// Prepended to every turn sent to the model.
pub const SYSTEM_INSTRUCTION: &str = "[Please keep responses under 4000 characters, and provide 1 empty newline space between statements/bullet points; don't forget to give hyphen to each points. You should keep the responses professional and UPSC CSE relevant. Your prompt with website link will be replaced by that website content, so answer user questions regarding this accordingly.]";

/// Memory key of a message: its chat, or chat and forum thread.
pub fn conversation_key(message: &Message) -> ConversationKey {
    ConversationKey::new(message.chat.id, message.thread_id)
}

/// One request content per turn, oldest first: the instruction, a newline, then `"<Role>: <content>"`.
pub fn build_request(turns: &[Turn]) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: turns
            .iter()
            .map(|turn| {
                Content::text(format!(
                    "{}\n{}: {}",
                    SYSTEM_INSTRUCTION,
                    turn.role().title(),
                    turn.content()
                ))
            })
            .collect(),
    }
}

/// First `max` characters of `text` (not bytes).
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Link expansion, session memory and the model call, for one conversation at a time.
pub struct Conversation {
    resolver: LinkResolver<Arc<dyn PageFetcher>>,
    sessions: Arc<SessionStore>,
    client: Arc<dyn GenerativeClient>,
    max_reply_chars: usize,
}

impl Conversation {
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        sessions: Arc<SessionStore>,
        client: Arc<dyn GenerativeClient>,
    ) -> Self {
        Self {
            resolver: LinkResolver::new(fetcher),
            sessions,
            client,
            max_reply_chars: MAX_REPLY_CHARS,
        }
    }

    /// Produces the reply text for `raw_text` in the conversation `key`.
    ///
    /// The user turn stored (and sent) is the link-expanded text. On success the reply is
    /// truncated to [`MAX_REPLY_CHARS`], stored as the assistant turn and returned. On failure
    /// the error is rendered as `"Error: ..."` / `"Error <status>: <body>"` and returned as the
    /// reply; no assistant turn is stored.
    #[instrument(skip(self, raw_text), fields(key = %key))]
    pub async fn produce_reply(&self, key: ConversationKey, raw_text: &str) -> String {
        let expanded = self.resolver.resolve(raw_text).await;
        let window = self.sessions.append(key, Role::User, expanded);
        info!(turns = window.len(), "step: user turn stored");

        let request = build_request(&window);
        debug!(request = ?request, "step: request built");

        match self.client.generate(&request).await {
            Ok(text) => {
                let reply = truncate_chars(&text, self.max_reply_chars).to_string();
                self.sessions.append(key, Role::Assistant, reply.clone());
                info!(reply_chars = reply.chars().count(), "step: assistant turn stored");
                reply
            }
            Err(e) => {
                warn!(error = %e, "step: model call failed, replying with error text");
                e.to_reply()
            }
        }
    }
}
