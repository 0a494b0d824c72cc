//! Page fetch and HTML cleaning.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use scraper::{Html, Node};
use tracing::{info, instrument, warn};

/// Prefix of every fetch result that signals failure.
pub const FETCH_FAILURE_MARKER: &str = "Failed to fetch";

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36";

/// Elements whose whole subtree is dropped before text extraction.
const SKIPPED_ELEMENTS: &[&str] = &[
    "script", "style", "noscript", "header", "footer", "nav", "aside",
];

/// Fetches a URL and returns its readable text, or a string starting with [`FETCH_FAILURE_MARKER`].
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_clean(&self, url: &str) -> String;
}

#[async_trait]
impl<T: PageFetcher + ?Sized> PageFetcher for std::sync::Arc<T> {
    async fn fetch_clean(&self, url: &str) -> String {
        (**self).fetch_clean(url).await
    }
}

/// reqwest-based [`PageFetcher`].
#[derive(Clone)]
pub struct HttpPageFetcher {
    client: reqwest::Client,
}

impl HttpPageFetcher {
    /// Builds a fetcher with a browser user agent and the given request timeout.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    #[instrument(skip(self))]
    async fn fetch_clean(&self, url: &str) -> String {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "page fetch failed");
                return format!("{FETCH_FAILURE_MARKER} content: {e}");
            }
        };

        let status = response.status();
        if status != StatusCode::OK {
            warn!(status = status.as_u16(), "page fetch returned non-200");
            return format!(
                "{FETCH_FAILURE_MARKER} content. Status code: {}",
                status.as_u16()
            );
        }

        match response.text().await {
            Ok(body) => {
                let text = extract_readable_text(&body);
                info!(chars = text.chars().count(), "step: page fetched and cleaned");
                text
            }
            Err(e) => {
                warn!(error = %e, "page body read failed");
                format!("{FETCH_FAILURE_MARKER} content: {e}")
            }
        }
    }
}

/// Parses HTML and returns its visible text: one stripped, non-empty text node per line,
/// skipping `script`, `style`, `noscript`, `header`, `footer`, `nav` and `aside` subtrees.
pub fn extract_readable_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut lines = Vec::new();

    for node in document.root_element().descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };
        let skipped = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|el| SKIPPED_ELEMENTS.contains(&el.name()))
        });
        if skipped {
            continue;
        }
        lines.extend(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string),
        );
    }

    lines.join("\n")
}
