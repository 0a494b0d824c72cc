//! Chain handlers: `/start`, the allow-list gate, and the conversation reply.

mod conversation_handler;
mod gate;
mod start;

pub use conversation_handler::{ConversationHandler, DEFAULT_THINKING_MESSAGE};
pub use gate::AllowListHandler;
pub use start::{StartHandler, WELCOME_MESSAGE};
