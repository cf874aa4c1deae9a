//! # Storage Layer
//!
//! The grid is persisted as one serialized snapshot per variant, held in a
//! named slot of a key-value store. The [`DataStore`] trait is that store.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one `<key>.json` file per slot
//!   in the data directory. Writes are atomic (temp file, then rename).
//! - [`memory::InMemoryStore`]: in-memory storage for tests. No persistence.
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── mandala-chart-3x3-cards.json      # small grid: JSON array of 9 cards
//! ├── mandala-chart-9x9-sections.json   # large grid: JSON array of 9 sections
//! └── config.json                       # configuration
//! ```
//!
//! The store knows nothing about grids. Encoding, decoding and shape checks
//! live in [`crate::persist`].

use crate::error::{MandalaError, Result};
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// Abstract interface for a durable key-value slot store.
pub trait DataStore {
    /// Read the raw value of a slot. `Ok(None)` when the slot is empty.
    fn read_slot(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite a slot with a new value.
    fn write_slot(&mut self, key: &str, value: &str) -> Result<()>;

    /// Empty a slot. Removing an empty slot is not an error.
    fn remove_slot(&mut self, key: &str) -> Result<()>;

    /// Where the slot lives (a virtual path for non-file stores).
    fn slot_path(&self, key: &str) -> Result<PathBuf>;
}

/// Slot keys become file names, so they are restricted to a safe alphabet.
pub fn validate_key(key: &str) -> Result<()> {
    if key.is_empty()
        || !key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(MandalaError::Store(format!("Invalid slot key: {:?}", key)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_restricted() {
        assert!(validate_key("mandala-chart-9x9-sections").is_ok());
        assert!(validate_key("").is_err());
        assert!(validate_key("../etc/passwd").is_err());
        assert!(validate_key("a b").is_err());
    }
}
