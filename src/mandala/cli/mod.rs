//! # CLI Behavior
//!
//! This is **one possible UI client** for mandala, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes and
//! output formatting.
//!
//! ## Naked Execution (`mandala`)
//!
//! Running `mandala` with no arguments defaults to `mandala show`.
//!
//! ## Sessions From the Shell
//!
//! The library models drag and edit as sessions. A shell invocation runs one
//! session start to finish:
//!
//! - `mandala edit 1.8` opens `$EDITOR` on a `title\n\ncontent` buffer. Saving
//!   commits; an editor that fails cancels the session.
//! - `mandala move 3 17` is a drag from cell 3 followed by a drop on cell 17.
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that call the API and print output
//! - `render`: Grid, card and message formatting
//! - `setup`: Argument parsing via clap, help text
//! - `styles`: Terminal styling

mod commands;
mod render;
pub mod setup;
mod styles;

pub use commands::run;
