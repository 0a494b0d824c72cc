//! Link expansion over free text.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, info};

use crate::fetcher::{PageFetcher, FETCH_FAILURE_MARKER};

static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("URL pattern is valid"));

/// Returns every link in `text`, left to right, non-overlapping.
pub fn find_links(text: &str) -> Vec<&str> {
    URL_PATTERN.find_iter(text).map(|m| m.as_str()).collect()
}

/// Replaces links in text with fetched page content.
pub struct LinkResolver<F> {
    fetcher: F,
}

impl<F: PageFetcher> LinkResolver<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Substitutes each link with its page text; a link whose fetch result starts with
    /// [`FETCH_FAILURE_MARKER`] is kept verbatim. Text without links is returned unchanged.
    pub async fn resolve(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        let mut expanded = 0usize;

        for m in URL_PATTERN.find_iter(text) {
            out.push_str(&text[last..m.start()]);
            let url = m.as_str();
            let content = self.fetcher.fetch_clean(url).await;
            if content.starts_with(FETCH_FAILURE_MARKER) {
                debug!(url = %url, "keeping link, fetch failed");
                out.push_str(url);
            } else {
                expanded += 1;
                out.push_str(&content);
            }
            last = m.end();
        }
        out.push_str(&text[last..]);

        if expanded > 0 {
            info!(expanded, "step: links replaced with page content");
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_links_stops_at_whitespace() {
        let text = "see https://a.example/x?y=1 and http://b.example, then done";
        assert_eq!(
            find_links(text),
            vec!["https://a.example/x?y=1", "http://b.example,"]
        );
    }

    #[test]
    fn test_find_links_requires_scheme() {
        assert!(find_links("www.example.com ftp://example.com").is_empty());
    }
}
