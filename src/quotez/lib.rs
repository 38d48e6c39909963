//! # Quotez Architecture
//!
//! Quotez keeps a personal collection of quotations in a JSON file and prints one
//! to the terminal, wrapped to fit. The library does the work; the binary is a
//! thin client over it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses flags, renders quotes, runs the add prompt        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the store and the random source                     │
//! │  - Returns structured Result<CmdResult> values              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - random, search, add                                      │
//! │  - Built on filter, select and the store trait              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - QuoteStore trait                                         │
//! │  - JsonFileStore (production), InMemoryStore (testing)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Text wrapping ([`wrap`]) is a pure function used by the CLI renderer. It has no
//! knowledge of quotes or terminals.
//!
//! ## Pipeline
//!
//! load store → filter or select → wrap → render → stdout
//!
//! Every step runs once per invocation. Nothing is cached between runs.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: The [`model::Quote`] record
//! - [`filter`]: Tag and author matching
//! - [`select`]: Random selection with an injected generator
//! - [`wrap`]: Word-preserving line wrapping
//! - [`config`]: Configuration file
//! - [`init`]: Path resolution and API wiring
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod init;
pub mod model;
pub mod select;
pub mod store;
pub mod wrap;
