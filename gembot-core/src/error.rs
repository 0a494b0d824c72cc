//! Error type for the bot core.

use thiserror::Error;

/// Core error. Transport failures carry the transport's message.
#[derive(Error, Debug)]
pub enum GembotError {
    #[error("Bot error: {0}")]
    Bot(String),
}

/// Result type for core operations; uses [`GembotError`].
pub type Result<T> = std::result::Result<T, GembotError>;
