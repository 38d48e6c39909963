//! # Rendering Module
//!
//! Turns quotes into terminal text in one of two styles.
//!
//! Layout (wrapping, framing, padding) is computed here on plain text, so ANSI
//! codes never skew widths. The templates then apply styles to the finished pieces.
//!
//! ## Plain (40 columns)
//!
//! ```text
//! "The only way to do great work is to
//! love what you do."
//!   - Steve Jobs
//! ```
//!
//! ## Bordered (40 columns)
//!
//! ```text
//!  ------------------------------------
//!  |     The only way to do great     |
//!  | work is to love what you         |
//!  | do.                              |
//!  | - Steve Jobs                     |
//!  ------------------------------------
//! ```
//!
//! The frame is `min(width, max_box_width)` columns wide minus a margin. Text wraps
//! narrower than the frame so the first line has room for its indent.

use super::styles::QUOTEZ_THEME;
use super::templates::{BORDERED_TEMPLATE, PLAIN_TEMPLATE};
use colored::Colorize;
use console::Term;
use minijinja::{Environment, Value};
use quotez::api::{CmdMessage, MessageLevel};
use quotez::config::DisplayStyle;
use quotez::model::Quote;
use quotez::wrap::wrap_lines;
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

/// Columns kept free on the right in the plain style.
const PLAIN_MARGIN: usize = 4;
/// Columns between the terminal edge and the frame.
const BOX_MARGIN: usize = 4;
/// How much narrower than the frame interior the text wraps.
const BOX_TEXT_INSET: usize = 10;

const OPEN_QUOTE: &str = "\"";
const CLOSE_QUOTE: &str = "\"";
const ATTRIBUTION_PREFIX: &str = "  - ";

const FIRST_LINE_OPEN: &str = " |     ";
const LINE_OPEN: &str = " | ";
const LINE_CLOSE: &str = " |";
const ATTRIBUTION_OPEN: &str = " | - ";

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub style: DisplayStyle,
    pub width: usize,
    pub max_box_width: usize,
    pub use_color: bool,
}

#[derive(Serialize)]
struct PlainData {
    lines: Vec<String>,
    attribution: String,
}

/// One row of the box: opening fence, text, padding, closing fence.
#[derive(Serialize)]
struct FramedLine {
    open: &'static str,
    text: String,
    pad: String,
    close: &'static str,
}

impl FramedLine {
    /// Pads so that `open + text + pad` spans `body_width` columns.
    fn new(open: &'static str, text: String, body_width: usize) -> Self {
        let used = open.width() + text.width();
        Self {
            open,
            pad: " ".repeat(body_width.saturating_sub(used)),
            text,
            close: LINE_CLOSE,
        }
    }
}

#[derive(Serialize)]
struct BorderedData {
    cap: String,
    lines: Vec<FramedLine>,
    attribution: FramedLine,
}

/// Width of stdout when it is a terminal, `fallback` otherwise.
pub fn terminal_width(fallback: usize) -> usize {
    let term = Term::stdout();
    let size = term.is_term().then(|| term.size_checked()).flatten();
    columns_or(size, fallback)
}

/// Columns from a `(rows, cols)` terminal size, `fallback` when unknown or zero.
fn columns_or(size: Option<(u16, u16)>, fallback: usize) -> usize {
    match size {
        Some((_, cols)) if cols > 0 => cols as usize,
        _ => fallback,
    }
}

/// Whether stdout can show colors.
pub fn colors_supported() -> bool {
    Term::stdout().features().colors_supported()
}

fn signed(n: usize) -> isize {
    isize::try_from(n).unwrap_or(isize::MAX)
}

fn layout_plain(quote: &Quote, width: usize) -> PlainData {
    let wrap_width = signed(width) - signed(PLAIN_MARGIN);
    let mut lines: Vec<String> = wrap_lines(&quote.text, wrap_width).collect();
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines[0].insert_str(0, OPEN_QUOTE);
    if let Some(last) = lines.last_mut() {
        last.push_str(CLOSE_QUOTE);
    }

    PlainData {
        lines,
        attribution: format!("{}{}", ATTRIBUTION_PREFIX, quote.display_author()),
    }
}

fn layout_bordered(quote: &Quote, width: usize, max_box_width: usize) -> BorderedData {
    let frame = width.min(max_box_width);
    let inner = frame.saturating_sub(BOX_MARGIN);
    // Everything left of the closing fence.
    let body_width = inner.saturating_sub(1);
    let wrap_width = signed(inner) - signed(BOX_TEXT_INSET);

    let lines = wrap_lines(&quote.text, wrap_width)
        .enumerate()
        .map(|(i, text)| {
            let open = if i == 0 { FIRST_LINE_OPEN } else { LINE_OPEN };
            FramedLine::new(open, text, body_width)
        })
        .collect();

    BorderedData {
        cap: format!(" {}", "-".repeat(inner)),
        lines,
        attribution: FramedLine::new(
            ATTRIBUTION_OPEN,
            quote.display_author().to_string(),
            body_width,
        ),
    }
}

fn render_template<T: Serialize>(
    name: &'static str,
    source: &'static str,
    data: &T,
    use_color: bool,
) -> Result<String, minijinja::Error> {
    let mut env = Environment::new();
    let theme = &*QUOTEZ_THEME;
    env.add_filter("style", move |value: Value, style: String| -> String {
        theme.apply(&style, &value.to_string(), use_color)
    });
    env.add_template(name, source)?;
    env.get_template(name)?.render(data)
}

/// Renders one quote, without a trailing newline.
pub fn render_quote(quote: &Quote, opts: &RenderOptions) -> String {
    let rendered = match opts.style {
        DisplayStyle::Plain => render_template(
            "plain",
            PLAIN_TEMPLATE,
            &layout_plain(quote, opts.width),
            opts.use_color,
        ),
        DisplayStyle::Bordered => render_template(
            "bordered",
            BORDERED_TEMPLATE,
            &layout_bordered(quote, opts.width, opts.max_box_width),
            opts.use_color,
        ),
    };
    rendered.unwrap_or_else(|e| format!("Render error: {}", e))
}

/// Renders quotes one after another, separated by a blank line.
pub fn render_quotes(quotes: &[Quote], opts: &RenderOptions) -> String {
    quotes
        .iter()
        .map(|q| render_quote(q, opts))
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn print_quotes(quotes: &[Quote], opts: &RenderOptions) {
    if !quotes.is_empty() {
        println!("{}", render_quotes(quotes, opts));
    }
}

fn format_message(message: &CmdMessage, use_color: bool) -> String {
    if !use_color {
        return message.content.clone();
    }
    let styled = match message.level {
        MessageLevel::Info => message.content.dimmed(),
        MessageLevel::Success => message.content.green(),
        MessageLevel::Warning => message.content.yellow(),
    };
    styled.to_string()
}

pub fn print_messages(messages: &[CmdMessage], use_color: bool) {
    for message in messages {
        println!("{}", format_message(message, use_color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(style: DisplayStyle, width: usize) -> RenderOptions {
        RenderOptions {
            style,
            width,
            max_box_width: 90,
            use_color: false,
        }
    }

    fn jobs() -> Quote {
        Quote::new(
            "The only way to do great work is to love what you do.",
            "Steve Jobs",
            vec![],
        )
    }

    #[test]
    fn plain_short_quote() {
        let quote = Quote::new("A great day.", "Ann", vec![]);
        assert_eq!(
            render_quote(&quote, &opts(DisplayStyle::Plain, 80)),
            "\"A great day.\"\n  - Ann"
        );
    }

    #[test]
    fn plain_wraps_at_width_minus_margin() {
        let out = render_quote(&jobs(), &opts(DisplayStyle::Plain, 24));
        assert_eq!(
            out,
            "\"The only way to do\ngreat work is to\nlove what you do.\"\n  - Steve Jobs"
        );
    }

    #[test]
    fn plain_empty_author_gets_placeholder() {
        let quote = Quote::new("Anon.", "", vec![]);
        assert_eq!(
            render_quote(&quote, &opts(DisplayStyle::Plain, 80)),
            "\"Anon.\"\n  - ?"
        );
    }

    #[test]
    fn bordered_small_box() {
        let quote = Quote::new("Work hard.", "Bo", vec![]);
        let out = render_quote(&quote, &opts(DisplayStyle::Bordered, 30));
        let cap = format!(" {}", "-".repeat(26));
        let expected = [
            cap.clone(),
            format!(" |     Work hard.{} |", " ".repeat(8)),
            format!(" | - Bo{} |", " ".repeat(18)),
            cap,
        ]
        .join("\n");
        assert_eq!(out, expected);
    }

    #[test]
    fn bordered_lines_share_one_width() {
        let out = render_quote(&jobs(), &opts(DisplayStyle::Bordered, 40));
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines.len() > 4, "quote should wrap: {out}");
        for line in &lines {
            assert_eq!(line.width(), 37, "uneven line {line:?}");
        }
        assert!(lines[1].starts_with(" |     The"));
        assert!(lines[2].starts_with(" | "));
    }

    #[test]
    fn bordered_width_is_clamped() {
        let out = render_quote(&jobs(), &opts(DisplayStyle::Bordered, 200));
        let cap = out.lines().next().unwrap();
        assert_eq!(cap, format!(" {}", "-".repeat(86)));
    }

    #[test]
    fn bordered_long_word_overflows_without_breaking() {
        let quote = Quote::new("Pneumonoultramicroscopicsilicovolcanoconiosis", "X", vec![]);
        let out = render_quote(&quote, &opts(DisplayStyle::Bordered, 30));
        assert!(out.contains(" |     Pneumonoultramicroscopicsilicovolcanoconiosis |"));
    }

    #[test]
    fn tiny_width_does_not_panic() {
        let out = render_quote(&jobs(), &opts(DisplayStyle::Bordered, 3));
        assert!(out.contains(&jobs().text));
        let out = render_quote(&jobs(), &opts(DisplayStyle::Plain, 0));
        assert!(out.contains(&jobs().text));
    }

    #[test]
    fn unknown_terminal_size_uses_fallback() {
        assert_eq!(columns_or(None, 80), 80);
        assert_eq!(columns_or(Some((24, 0)), 57), 57);
        assert_eq!(columns_or(Some((24, 132)), 80), 132);
    }

    #[test]
    fn messages_stay_plain_without_color() {
        colored::control::set_override(true);
        let message = CmdMessage::info("No quotes found.");
        assert_eq!(format_message(&message, false), "No quotes found.");
        assert!(format_message(&message, true).contains("\x1b["));
        colored::control::unset_override();
    }

    #[test]
    fn several_quotes_are_separated() {
        let quotes = vec![
            Quote::new("One.", "A", vec![]),
            Quote::new("Two.", "B", vec![]),
        ];
        assert_eq!(
            render_quotes(&quotes, &opts(DisplayStyle::Plain, 80)),
            "\"One.\"\n  - A\n\n\"Two.\"\n  - B"
        );
    }
}
