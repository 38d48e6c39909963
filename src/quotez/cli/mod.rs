//! # CLI Layer
//!
//! One possible client for quotez. This is the only code that touches the
//! terminal: it parses flags, reads the add prompt from stdin, renders quotes
//! and messages to stdout, and turns errors into an exit code (in `main.rs`).
//!
//! ## Structure
//!
//! - `setup`: clap definitions and version string
//! - `commands`: `run()`, context setup and per-mode handlers
//! - `render`: layout (wrapping, framing, padding) and templated output
//! - `styles` / `templates`: the style theme and the minijinja templates
//! - `prompt`: the interactive add-a-quote dialogue

mod commands;
mod prompt;
mod render;
mod setup;
mod styles;
mod templates;

pub use commands::run;
