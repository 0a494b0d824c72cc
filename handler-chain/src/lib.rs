//! # Handler chain
//!
//! Runs a sequence of handlers for each message: `handle` in order until one returns Stop or
//! Reply. A handler error ends the chain and is returned.

use gembot_core::{Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Ordered list of handlers shared by all message tasks.
#[derive(Clone, Default)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn Handler>>,
}

impl HandlerChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a handler (runs in order; first Stop/Reply ends the chain).
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Returns the first Stop or Reply, or Continue when every handler passed.
    #[instrument(skip(self, message), fields(chat_id = message.chat.id, thread_id = ?message.thread_id))]
    pub async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        info!(message_id = %message.id, "step: handler_chain started");

        for handler in &self.handlers {
            let name = std::any::type_name_of_val(handler.as_ref());
            let response = handler.handle(message).await?;
            debug!(handler = %name, response = ?response, "Handler processed");

            if response != HandlerResponse::Continue {
                info!(handler = %name, "step: handler chain stopped by handler");
                return Ok(response);
            }
        }

        info!(message_id = %message.id, "step: handler_chain finished");
        Ok(HandlerResponse::Continue)
    }
}
