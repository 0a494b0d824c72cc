//! # Gemini client
//!
//! Defines the [`GenerativeClient`] trait and [`GeminiClient`], its implementation over the
//! `models/{model}:generateContent` HTTP endpoint. The API key travels in the
//! `x-goog-api-key` header; every request carries a fixed timeout.

mod client;
mod error;
mod types;

pub use client::{GeminiClient, GeminiConfig, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT};
pub use error::GeminiError;
pub use types::{Candidate, Content, GenerateContentRequest, GenerateContentResponse, Part};

use async_trait::async_trait;

/// Generative-language API: send conversation contents, receive the completion text.
#[async_trait]
pub trait GenerativeClient: Send + Sync {
    async fn generate(&self, request: &GenerateContentRequest) -> Result<String, GeminiError>;
}
