//! # Quote Filtering
//!
//! Selects the quotes matching a tag or author key.
//!
//! Matching is case-insensitive and the key is trimmed first. An empty key
//! matches nothing. Results keep store order and each quote appears at most
//! once, even when several of its tags match.

use crate::model::Quote;

/// How a search key is compared against a tag or author.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Case-folded, trimmed equality.
    Exact,
    /// Case-folded substring containment.
    Partial,
}

impl MatchMode {
    /// `key` must already be trimmed and lowercased.
    fn matches(self, candidate: &str, key: &str) -> bool {
        let candidate = candidate.trim().to_lowercase();
        match self {
            MatchMode::Exact => candidate == key,
            MatchMode::Partial => candidate.contains(key),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Tag,
    Author,
}

/// A complete search request: which field, which key, and how to compare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub field: SearchField,
    pub key: String,
    pub mode: MatchMode,
}

impl Query {
    pub fn tag(key: impl Into<String>, mode: MatchMode) -> Self {
        Self {
            field: SearchField::Tag,
            key: key.into(),
            mode,
        }
    }

    pub fn author(key: impl Into<String>, mode: MatchMode) -> Self {
        Self {
            field: SearchField::Author,
            key: key.into(),
            mode,
        }
    }

    fn normalized_key(&self) -> String {
        self.key.trim().to_lowercase()
    }

    fn matches(&self, quote: &Quote, key: &str) -> bool {
        match self.field {
            SearchField::Tag => quote.tags.iter().any(|tag| self.mode.matches(tag, key)),
            SearchField::Author => self.mode.matches(&quote.author, key),
        }
    }
}

/// Returns the quotes matching `query`, in store order.
pub fn search<'a>(quotes: &'a [Quote], query: &Query) -> Vec<&'a Quote> {
    let key = query.normalized_key();
    if key.is_empty() {
        return Vec::new();
    }
    quotes.iter().filter(|q| query.matches(q, &key)).collect()
}

pub fn by_tag<'a>(quotes: &'a [Quote], tag: &str, mode: MatchMode) -> Vec<&'a Quote> {
    search(quotes, &Query::tag(tag, mode))
}

pub fn by_author<'a>(quotes: &'a [Quote], author: &str, mode: MatchMode) -> Vec<&'a Quote> {
    search(quotes, &Query::author(author, mode))
}
