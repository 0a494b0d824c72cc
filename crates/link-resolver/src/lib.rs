//! # Link resolver
//!
//! Finds `http(s)://` links in a piece of text and replaces each with the readable text of the
//! page it points to. A link whose page cannot be fetched is left untouched.
//!
//! Fetching goes through the [`PageFetcher`] trait; [`HttpPageFetcher`] is the reqwest-based
//! implementation. A fetcher never returns an error: failure is signalled by a result starting
//! with [`FETCH_FAILURE_MARKER`].

mod fetcher;
mod resolver;

pub use fetcher::{extract_readable_text, HttpPageFetcher, PageFetcher, FETCH_FAILURE_MARKER};
pub use resolver::{find_links, LinkResolver};
