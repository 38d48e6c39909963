//! # Text Wrapping
//!
//! Breaks a single logical string into display lines no wider than a target width.
//!
//! Rules:
//! 1. Input is tokenized on whitespace runs. Consecutive whitespace (spaces, tabs,
//!    newlines) collapses to a single separator; leading and trailing whitespace
//!    is dropped.
//! 2. Tokens are packed greedily: a token joins the current line (after a single
//!    space) when the result stays within the width, otherwise it starts a new line.
//! 3. Words are never split. A token wider than the target sits alone on its own
//!    line and is allowed to overflow.
//! 4. A width of zero or less disables wrapping: the input comes back untouched as
//!    a single line.
//! 5. Empty or whitespace-only input (with a positive width) yields no lines.
//!
//! Width is measured in chars, so multi-byte characters count as one column each.
//!
//! [`wrap_lines`] is the primitive. It returns a lazy iterator that can be cloned to
//! restart from the beginning. [`wrap`] joins the same lines with `\n`.

use std::str::SplitWhitespace;

/// Lazily wraps `text` to `width` columns. See the module docs for the rules.
pub fn wrap_lines(text: &str, width: isize) -> WrappedLines<'_> {
    let width = usize::try_from(width).ok().filter(|w| *w > 0);
    WrappedLines {
        words: text.split_whitespace(),
        pending: None,
        width,
        unsplit: width.is_none().then_some(text),
    }
}

/// Wraps `text` to `width` columns and joins the lines with newlines.
pub fn wrap(text: &str, width: isize) -> String {
    wrap_lines(text, width).collect::<Vec<_>>().join("\n")
}

/// Iterator over wrapped lines, produced by [`wrap_lines`].
///
/// Cloning the iterator before consuming it gives an independent pass over the
/// same lines.
#[derive(Debug, Clone)]
pub struct WrappedLines<'a> {
    words: SplitWhitespace<'a>,
    /// A word that overflowed the previous line and opens the next one.
    pending: Option<&'a str>,
    width: Option<usize>,
    /// Whole input, yielded once when wrapping is disabled.
    unsplit: Option<&'a str>,
}

impl Iterator for WrappedLines<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let Some(width) = self.width else {
            return self.unsplit.take().map(str::to_string);
        };

        let first = self.pending.take().or_else(|| self.words.next())?;
        let mut line = String::from(first);
        let mut line_len = first.chars().count();

        for word in self.words.by_ref() {
            let word_len = word.chars().count();
            if line_len + 1 + word_len > width {
                self.pending = Some(word);
                break;
            }
            line.push(' ');
            line.push_str(word);
            line_len += 1 + word_len;
        }

        Some(line)
    }
}

impl std::iter::FusedIterator for WrappedLines<'_> {}
