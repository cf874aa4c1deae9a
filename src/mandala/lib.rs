//! # Mandala Architecture
//!
//! Mandala is a **UI-agnostic goal-board library**. A mandala chart is a 3x3
//! board of goal cards, or a 9x9 board whose center section lays out eight
//! sub-goals that are each expanded in a section of their own. The command
//! line client is one consumer of this library.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders the grid, drives $EDITOR       │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Resolves cell references (17, 1.8, 3-5) to indexes       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Edit, drag/drop and reset sessions                       │
//! │  - Commits new grids: persist, then replace                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Engine (index, sync, swap, defaults, persist)              │
//! │  - Pure functions from grid to grid                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait: FileStore, InMemoryStore                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Mirror Invariant
//!
//! In the 9x9 board, card `p` of the center section and the center card of
//! section `p` always show the same title, content and color. [`sync`] is the
//! only code that writes mirrors; edits and swaps go through it.
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr, never exits the
//! process and never assumes a terminal. Diagnostics go through the `log`
//! facade; see [`logging`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Session logic for each command
//! - [`index`]: Global index <-> (section, card) mapping, cell references
//! - [`sync`]: Mirror synchronization
//! - [`swap`]: Cell rearrangement
//! - [`defaults`]: Default grid generation
//! - [`persist`]: Snapshot encoding and recovery
//! - [`grid_store`]: Holder of the current grid
//! - [`session`]: Drag and edit session state
//! - [`store`]: Key-value storage abstraction and implementations
//! - [`model`]: Core data types (`Card`, `Section`, `Grid`, `Variant`)
//! - [`config`]: Configuration management
//! - [`editor`]: External editor integration
//! - [`init`]: Data directory discovery and context setup
//! - [`logging`]: Logger bootstrap
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod defaults;
pub mod editor;
pub mod error;
pub mod grid_store;
pub mod index;
pub mod init;
pub mod logging;
pub mod model;
pub mod persist;
pub mod session;
pub mod store;
pub mod swap;
pub mod sync;
