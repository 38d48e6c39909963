//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for every
//! quotez operation, whatever the UI.
//!
//! The API owns the store and the random source. It dispatches to
//! `commands/*.rs` and returns [`CmdResult`]s. It never prints and never decides
//! how a result looks.
//!
//! `QuotezApi<S, R>` is generic over both:
//! - Production: `QuotezApi<JsonFileStore, StdRng>`
//! - Testing: `QuotezApi<InMemoryStore, StepRng>` or a seeded `StdRng`

use crate::commands;
use crate::error::Result;
use crate::filter::Query;
use crate::model::Quote;
use crate::select;
use crate::store::QuoteStore;
use rand::RngCore;

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
pub use crate::filter::{MatchMode, SearchField};

pub struct QuotezApi<S: QuoteStore, R: RngCore> {
    store: S,
    rng: R,
}

impl<S: QuoteStore, R: RngCore> QuotezApi<S, R> {
    pub fn new(store: S, rng: R) -> Self {
        Self { store, rng }
    }

    /// One quote, chosen at random from the whole store.
    pub fn random_quote(&mut self) -> Result<CmdResult> {
        commands::random::run(&self.store, &mut self.rng)
    }

    /// Every quote matching `query`. With `pick_one`, a single random match instead.
    pub fn search_quotes(&mut self, query: &Query, pick_one: bool) -> Result<CmdResult> {
        let mut result = commands::search::run(&self.store, query)?;
        if pick_one && !result.listed_quotes.is_empty() {
            let index = select::pick_index(result.listed_quotes.len(), &mut self.rng)?;
            let chosen = result.listed_quotes.swap_remove(index);
            result.listed_quotes = vec![chosen];
        }
        Ok(result)
    }

    pub fn add_quote(&mut self, quote: Quote) -> Result<CmdResult> {
        commands::add::run(&mut self.store, quote)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
