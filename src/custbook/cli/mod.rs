//! # CLI Layer
//!
//! One client of the custbook library, and the only code that:
//! - parses arguments (`setup.rs`, clap derive)
//! - installs the log subscriber
//! - reads stdin or writes stdout
//! - formats results for people (`print.rs`)
//!
//! `commands.rs` maps each subcommand onto one [`custbook::api::CustbookApi`] call
//! and hands the returned `CmdResult` to the printer.

mod commands;
mod print;
mod setup;

pub use commands::run;
