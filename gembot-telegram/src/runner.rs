//! Long-polling runner: converts teloxide messages to core::Message and hands each to the
//! HandlerChain on its own task.

use anyhow::Result;
use gembot_core::ToCoreMessage;
use handler_chain::HandlerChain;
use teloxide::prelude::*;
use tracing::{error, info, instrument};

use super::adapters::TelegramMessageWrapper;

/// Checks the token and that no other instance is polling: `getMe`, `deleteWebhook`, then a
/// non-blocking `getUpdates` (no offset, so nothing is acknowledged). Errors are teloxide
/// `RequestError`s wrapped in anyhow, so [`crate::classify_crash`] can inspect them.
#[instrument(skip(bot))]
pub async fn probe_transport(bot: &teloxide::Bot) -> Result<()> {
    let me = bot.get_me().await?;
    info!(
        username = ?me.user.username,
        "Bot identity confirmed"
    );
    bot.delete_webhook().await?;
    bot.get_updates().limit(1).timeout(0).await?;
    Ok(())
}

/// Starts long polling. Every message is converted and processed on a separate task, so a slow
/// model call in one conversation does not hold up the others. Returns when polling stops
/// (Ctrl+C).
#[instrument(skip(bot, handler_chain))]
pub async fn run_repl(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    let chain = handler_chain;
    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = chain.clone();

        async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();
            info!(
                chat_id = core_msg.chat.id,
                thread_id = ?core_msg.thread_id,
                user_id = core_msg.user.id,
                has_text = msg.text().is_some(),
                "Received message"
            );

            tokio::spawn(async move {
                if let Err(e) = chain.handle(&core_msg).await {
                    error!(
                        error = %e,
                        chat_id = core_msg.chat.id,
                        "Handler chain failed"
                    );
                }
            });

            respond(())
        }
    })
    .await;

    Ok(())
}
