//! # custbook CLI
//!
//! The binary is intentionally thin: the client lives in `cli/`, and this file
//! only invokes [`cli::run`] and turns an error into a message and exit code.
//! Everything below the CLI (API, commands, storage, layout) is the `custbook`
//! library and never touches the terminal.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
