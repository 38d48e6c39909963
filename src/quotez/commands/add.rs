use crate::commands::{CmdMessage, CmdResult};
use crate::error::{QuotezError, Result};
use crate::model::Quote;
use crate::store::QuoteStore;

/// Appends `quote` to the store and rewrites it.
///
/// A store that does not exist yet, or holds an empty array, starts out empty.
/// A quote whose text already exists (ignoring case and surrounding whitespace)
/// is skipped with a warning.
pub fn run<S: QuoteStore>(store: &mut S, quote: Quote) -> Result<CmdResult> {
    let quote = normalize(quote);
    if quote.text.is_empty() {
        return Err(QuotezError::InvalidQuote(
            "quote text cannot be empty".to_string(),
        ));
    }

    let mut quotes = match store.load() {
        Ok(quotes) => quotes,
        Err(QuotezError::EmptyStore { .. }) => Vec::new(),
        Err(e) if e.is_missing_file() => {
            log::info!("starting a new quote file at {}", store.location());
            Vec::new()
        }
        Err(e) => return Err(e),
    };

    let mut result = CmdResult::default();
    let needle = quote.text.to_lowercase();
    if quotes.iter().any(|q| q.text.trim().to_lowercase() == needle) {
        result.add_message(CmdMessage::warning(
            "That quote is already in your collection.",
        ));
        return Ok(result);
    }

    quotes.push(quote.clone());
    store.save(&quotes)?;

    result.add_message(CmdMessage::success(format!(
        "Quote added ({} total) to {}",
        quotes.len(),
        store.location()
    )));
    Ok(result.with_affected_quotes(vec![quote]))
}

fn normalize(quote: Quote) -> Quote {
    Quote {
        text: quote.text.trim().to_string(),
        author: quote.author.trim().to_string(),
        tags: quote
            .tags
            .into_iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect(),
    }
}
