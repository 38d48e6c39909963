//! Output templates, kept as standalone minijinja files and embedded here.
//!
//! Templates never compute layout. Wrapping and padding arrive precomputed from
//! `render.rs`; templates only choose styles. Each template ends without a
//! trailing newline; the caller adds it.

pub const PLAIN_TEMPLATE: &str = include_str!("templates/plain.tmp");
pub const BORDERED_TEMPLATE: &str = include_str!("templates/bordered.tmp");
