//! Bot lifecycle: shared session memory, optional idle sweeper, and the restart loop around
//! build → probe → poll.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use gembot_telegram::{probe_transport, run_repl, run_supervised};
use session_memory::SessionStore;
use tracing::{debug, info, instrument};

use super::components::{build_bot_components, build_handler_chain};
use super::config::BotConfig;

/// Main entry for `gembot run`: validates config, then keeps the bot alive until polling
/// stops cleanly (Ctrl+C). Expects tracing to be initialized already.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;

    let sessions = Arc::new(SessionStore::new(config.memory_window));
    if let Some(ttl) = config.session_idle_ttl {
        spawn_idle_sweeper(sessions.clone(), ttl);
    }

    info!(
        model = %config.gemini_model,
        memory_window = config.memory_window,
        "Initializing bot"
    );

    let restart_delay = config.restart_delay;
    let config = Arc::new(config);
    let attempts = run_supervised(restart_delay, move || {
        let config = config.clone();
        let sessions = sessions.clone();
        async move { start_bot(&config, sessions).await }
    })
    .await;

    info!(attempts, "Bot exited");
    Ok(())
}

/// One attempt: build components, probe Telegram, then long-poll until stopped.
pub async fn start_bot(config: &BotConfig, sessions: Arc<SessionStore>) -> Result<()> {
    info!("step: building components");
    let components = build_bot_components(config, sessions, None)?;

    info!("step: probing transport");
    probe_transport(&components.teloxide_bot).await?;

    let handler_chain = build_handler_chain(config, &components);
    info!("Bot started successfully");

    run_repl(components.teloxide_bot, handler_chain).await
}

fn spawn_idle_sweeper(sessions: Arc<SessionStore>, ttl: Duration) {
    let period = (ttl / 4).max(Duration::from_secs(1));
    info!(ttl_secs = ttl.as_secs(), "Session idle eviction enabled");
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        loop {
            interval.tick().await;
            let evicted = sessions.evict_idle(ttl);
            if evicted > 0 {
                debug!(evicted, remaining = sessions.len(), "Evicted idle sessions");
            }
        }
    });
}
