//! # Conversation
//!
//! The reply pipeline and the chain handlers around it:
//!
//! - [`Conversation`]: link expansion → session memory → Gemini call → session memory.
//! - [`StartHandler`]: answers `/start` with a static welcome text.
//! - [`AllowListHandler`]: drops commands and messages from chats/threads outside the [`AllowList`].
//! - [`ConversationHandler`]: placeholder message, pipeline, formatted reply.

mod allow_list;
mod handlers;
mod pipeline;

pub use allow_list::{AllowList, AllowListError};
pub use handlers::{
    AllowListHandler, ConversationHandler, StartHandler, DEFAULT_THINKING_MESSAGE, WELCOME_MESSAGE,
};
pub use pipeline::{
    build_request, conversation_key, truncate_chars, Conversation, MAX_REPLY_CHARS,
    SYSTEM_INSTRUCTION,
};
