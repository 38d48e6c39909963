use crate::commands::CmdResult;
use crate::error::Result;
use crate::select;
use crate::store::QuoteStore;
use rand::Rng;

pub fn run<S: QuoteStore, R: Rng + ?Sized>(store: &S, rng: &mut R) -> Result<CmdResult> {
    let quotes = store.load()?;
    let quote = select::pick(&quotes, rng)?.clone();
    Ok(CmdResult::default().with_listed_quotes(vec![quote]))
}
