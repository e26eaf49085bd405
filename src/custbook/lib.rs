//! # custbook
//!
//! A local-first customer book: customer records with received-item notes and
//! detail entries, currency and language preferences, search, and paginated
//! PDF export. The crate is a library first; the `custbook` binary is one
//! client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (cli/, wired by main.rs)                               │
//! │  - Parses arguments, prints results, owns exit codes        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                               │
//! │  - Thin facade; turns raw selectors into CustomerSelectors  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - Business logic, returns CmdResult                        │
//! └─────────────────────────────────────────────────────────────┘
//!               │                              │
//!               ▼                              ▼
//! ┌──────────────────────────┐   ┌──────────────────────────────┐
//! │  Storage (store/)        │   │  Layout + Render             │
//! │  DataStore, FileStore,   │   │  layout: Customer -> pages   │
//! │  InMemoryStore           │   │  render: pages -> PDF bytes  │
//! └──────────────────────────┘   └──────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout or stderr and nothing exits
//! the process. Diagnostics go through `tracing`; the CLI decides whether and
//! where they are shown (see [`logging`]).
//!
//! ## Module Overview
//!
//! - [`api`]: the facade, entry point for all operations
//! - [`commands`]: one module per operation
//! - [`layout`]: the paginated document layout engine
//! - [`render`]: PDF serialization of a laid-out document
//! - [`store`]: storage trait and implementations
//! - [`model`]: `Customer`, `Entry`, `Section`, input validation
//! - [`index`]: 1-based display indexes and selectors
//! - [`config`], [`currency`], [`i18n`]: user preferences
//! - [`error`]: error type and `Result` alias

pub mod api;
pub mod commands;
pub mod config;
pub mod currency;
pub mod error;
pub mod i18n;
pub mod index;
pub mod init;
pub mod layout;
pub mod logging;
pub mod model;
pub mod render;
pub mod store;
