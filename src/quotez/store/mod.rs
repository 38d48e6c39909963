//! # Storage Layer
//!
//! The [`QuoteStore`] trait abstracts where the quote collection lives.
//!
//! ## Implementations
//!
//! - [`fs::JsonFileStore`]: a single JSON array on disk, the format users edit by hand.
//! - [`memory::InMemoryStore`]: no persistence, for tests.
//!
//! ## Storage Format
//!
//! ```text
//! [
//!   { "text": "Work hard.", "author": "Bo", "tags": ["work", "joy"] }
//! ]
//! ```
//!
//! `author` and `tags` are optional. The store has no key field: quotes are
//! identified by position or by full value.
//!
//! ## Consistency
//!
//! The store is read whole at startup and rewritten whole on save. Nothing guards
//! against two processes saving at once: the last writer wins.

use crate::error::Result;
use crate::model::Quote;

pub mod fs;
pub mod memory;

/// Abstract interface for the quote collection.
pub trait QuoteStore {
    /// Loads every quote. An empty collection is an error
    /// ([`crate::error::QuotezError::EmptyStore`]).
    fn load(&self) -> Result<Vec<Quote>>;

    /// Replaces the stored collection with `quotes`.
    fn save(&mut self, quotes: &[Quote]) -> Result<()>;

    /// Human readable location, for messages.
    fn location(&self) -> String;
}
