//! # gembot
//!
//! Application crate: loads config from env, assembles the handler chain
//! (`/start` → allow-list gate → conversation), runs the bot under a restart loop, and serves
//! the health endpoint. `serve` mode supervises `gembot run` as a child process.

pub mod cli;
pub mod components;
pub mod config;
pub mod console;
pub mod health;
pub mod runner;
pub mod supervisor;

pub use cli::{Cli, Commands};
pub use components::{build_bot_components, build_handler_chain, BotComponents};
pub use config::{BotConfig, ServeConfig};
pub use health::{health_router, serve_health};
pub use runner::{run_bot, start_bot};
pub use supervisor::{shutdown_signal, ChildSupervisor};
