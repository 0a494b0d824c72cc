//! # Session memory
//!
//! Short rolling conversation memory, one window per [`ConversationKey`].
//!
//! ## SessionStore
//!
//! A [`SessionStore`] maps keys to bounded, oldest-first lists of [`Turn`]s. Every append
//! trims the window from the front so at most `window` turns are retained.
//!
//! Sessions are created lazily and live for the lifetime of the store (the process). Idle
//! eviction is available through [`SessionStore::evict_idle`] for long-running deployments.
//!
//! ## Thread Safety
//!
//! The store is backed by a `DashMap`; append-and-trim on one key happens while holding that
//! key's entry lock, so concurrent appends to the same key cannot interleave.

mod key;
mod store;
mod turn;

pub use key::ConversationKey;
pub use store::{SessionStore, DEFAULT_WINDOW};
pub use turn::{Role, Turn};
