//! Shared test doubles: a recording [`Bot`], a table-backed [`PageFetcher`], and message builders.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use gembot_core::{Bot, Chat, GembotError, Message, ParseMode, Result, User};
use link_resolver::PageFetcher;

/// One recorded `send_message` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentRecord {
    pub chat_id: i64,
    pub thread_id: Option<i32>,
    pub text: String,
    pub parse_mode: ParseMode,
}

/// Mock Bot that records sends and deletes. Sends return ids "1", "2", ...
#[derive(Default)]
pub struct MockBot {
    pub sent: Mutex<Vec<SentRecord>>,
    pub deleted: Mutex<Vec<String>>,
    /// When true, every `delete_message` fails.
    pub fail_delete: bool,
    /// When true, HTML sends fail (as Telegram does for unsupported tags).
    pub reject_html: bool,
}

impl MockBot {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn sent(&self) -> Vec<SentRecord> {
        self.sent.lock().unwrap().clone()
    }

    pub fn deleted(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(
        &self,
        chat: &Chat,
        thread_id: Option<i32>,
        text: &str,
        parse_mode: ParseMode,
    ) -> Result<String> {
        if self.reject_html && parse_mode == ParseMode::Html {
            return Err(GembotError::Bot("can't parse entities".to_string()));
        }
        let mut sent = self.sent.lock().unwrap();
        sent.push(SentRecord {
            chat_id: chat.id,
            thread_id,
            text: text.to_string(),
            parse_mode,
        });
        Ok(sent.len().to_string())
    }

    async fn delete_message(&self, _chat: &Chat, message_id: &str) -> Result<()> {
        if self.fail_delete {
            return Err(GembotError::Bot("message to delete not found".to_string()));
        }
        self.deleted.lock().unwrap().push(message_id.to_string());
        Ok(())
    }
}

/// Fetcher answering from a fixed table; unknown URLs fail with the failure marker.
#[derive(Default)]
pub struct TableFetcher {
    pub pages: Vec<(String, String)>,
}

impl TableFetcher {
    pub fn with_page(url: &str, text: &str) -> Arc<Self> {
        Arc::new(Self {
            pages: vec![(url.to_string(), text.to_string())],
        })
    }
}

#[async_trait]
impl PageFetcher for TableFetcher {
    async fn fetch_clean(&self, url: &str) -> String {
        self.pages
            .iter()
            .find(|(u, _)| u == url)
            .map(|(_, text)| text.clone())
            .unwrap_or_else(|| "Failed to fetch content. Status code: 404".to_string())
    }
}

pub fn text_message(chat_id: i64, thread_id: Option<i32>, content: &str) -> Message {
    Message {
        id: "10".to_string(),
        user: User {
            id: 555,
            username: Some("aspirant".to_string()),
            first_name: Some("Asha".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: chat_id,
            chat_type: "supergroup".to_string(),
        },
        thread_id,
        is_command: content.starts_with('/'),
        content: content.to_string(),
        created_at: Utc::now(),
    }
}

pub const GENERATE_PATH: &str = "/v1beta/models/gemini-2.5-pro:generateContent";

pub fn gemini_success_body(text: &str) -> String {
    serde_json::json!({
        "candidates": [{"content": {"parts": [{"text": text}], "role": "model"}}]
    })
    .to_string()
}

pub fn gemini_for(server: &mockito::ServerGuard) -> Arc<gemini_client::GeminiClient> {
    let config = gemini_client::GeminiConfig::new("test-key")
        .with_base_url(format!("{}/v1beta", server.url()))
        .with_timeout(std::time::Duration::from_secs(5));
    Arc::new(gemini_client::GeminiClient::new(config).unwrap())
}
