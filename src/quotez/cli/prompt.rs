//! The interactive add-a-quote dialogue.

use quotez::model::Quote;
use std::io::{self, BufRead, Write};

const TEXT_PROMPT: &str = "Enter your quote: ";
const AUTHOR_PROMPT: &str = "Enter author name: ";
const TAG_PROMPT: &str = "Enter quote tag (type Done to exit): ";
const DONE: &str = "done";

/// Asks for text, author and tags. Returns `None` when no text was entered.
///
/// Tags are read until `done` (any case) or end of input. Blank tag lines are skipped.
pub fn read_new_quote<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> io::Result<Option<Quote>> {
    let text = ask(input, out, TEXT_PROMPT)?.unwrap_or_default();
    if text.trim().is_empty() {
        return Ok(None);
    }
    let author = ask(input, out, AUTHOR_PROMPT)?.unwrap_or_default();

    let mut tags = Vec::new();
    while let Some(tag) = ask(input, out, TAG_PROMPT)? {
        let tag = tag.trim();
        if tag.eq_ignore_ascii_case(DONE) {
            break;
        }
        if !tag.is_empty() {
            tags.push(tag.to_string());
        }
    }

    Ok(Some(Quote::new(text, author, tags)))
}

/// `None` on end of input.
fn ask<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{}", prompt)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(|c| c == '\n' || c == '\r').to_string()))
}
