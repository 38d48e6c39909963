use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::filter::{self, Query, SearchField};
use crate::store::QuoteStore;

pub fn run<S: QuoteStore>(store: &S, query: &Query) -> Result<CmdResult> {
    let quotes = store.load()?;
    let matches: Vec<_> = filter::search(&quotes, query)
        .into_iter()
        .cloned()
        .collect();
    log::debug!(
        "{:?} search for {:?} ({:?}) matched {} of {}",
        query.field,
        query.key,
        query.mode,
        matches.len(),
        quotes.len()
    );

    let mut result = CmdResult::default();
    if matches.is_empty() {
        let field = match query.field {
            SearchField::Tag => "tag",
            SearchField::Author => "author",
        };
        result.add_message(CmdMessage::info(format!(
            "No quotes found for {} \"{}\".",
            field,
            query.key.trim()
        )));
    }
    Ok(result.with_listed_quotes(matches))
}
