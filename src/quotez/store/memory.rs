use super::QuoteStore;
use crate::error::{QuotezError, Result};
use crate::model::Quote;
use std::path::PathBuf;

const MEMORY_LOCATION: &str = "<memory>";

/// In-memory storage for testing. Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    quotes: Vec<Quote>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quotes(quotes: Vec<Quote>) -> Self {
        Self { quotes, saves: 0 }
    }

    /// Raw contents, without the non-empty check `load` applies.
    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    /// Number of times `save` has been called.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl QuoteStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Quote>> {
        if self.quotes.is_empty() {
            return Err(QuotezError::EmptyStore {
                path: PathBuf::from(MEMORY_LOCATION),
            });
        }
        Ok(self.quotes.clone())
    }

    fn save(&mut self, quotes: &[Quote]) -> Result<()> {
        self.quotes = quotes.to_vec();
        self.saves += 1;
        Ok(())
    }

    fn location(&self) -> String {
        MEMORY_LOCATION.to_string()
    }
}

// --- Test Fixtures ---
