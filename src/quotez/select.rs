//! # Random Selection
//!
//! The random source is always passed in. The CLI seeds one generator per
//! process; tests hand in seeded or mock generators.

use crate::error::{QuotezError, Result};
use crate::model::Quote;
use rand::Rng;

/// Picks one quote uniformly at random.
///
/// Fails with [`QuotezError::EmptyInput`] when there is nothing to pick from.
pub fn pick<'a, R: Rng + ?Sized>(quotes: &'a [Quote], rng: &mut R) -> Result<&'a Quote> {
    pick_index(quotes.len(), rng).map(|i| &quotes[i])
}

/// Picks an index in `0..len`.
pub fn pick_index<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Result<usize> {
    if len == 0 {
        return Err(QuotezError::EmptyInput);
    }
    let index = rng.gen_range(0..len);
    log::debug!("picked quote {} of {}", index + 1, len);
    Ok(index)
}
