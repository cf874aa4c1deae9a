//! # Mandala CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, and this file
//! only invokes `cli::run()` and handles process termination.
//!
//! `cli::setup` parses arguments with clap, `cli::commands` builds the context
//! and dispatches to the [`mandala::api::MandalaApi`] facade, and `cli::render`
//! turns the returned `CmdResult` values into terminal output.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
