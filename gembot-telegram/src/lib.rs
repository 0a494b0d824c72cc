//! # gembot-telegram
//!
//! Telegram layer: adapters, [`gembot_core::Bot`] implementation, minimal config, polling runner
//! and the supervised-restart loop around it. Handles only Telegram connectivity and
//! handler-chain execution; no memory or model logic.

mod adapters;
mod bot_adapter;
mod config;
mod runner;
mod supervisor;

pub use adapters::{is_command_text, TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use config::TelegramConfig;
pub use runner::{probe_transport, run_repl};
pub use supervisor::{classify_crash, run_supervised, CrashKind};
