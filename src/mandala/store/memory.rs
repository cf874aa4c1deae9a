use super::{validate_key, DataStore};
use crate::error::{MandalaError, Result};
use std::collections::HashMap;
use std::path::PathBuf;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    slots: HashMap<String, String>,
    simulate_write_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    /// Number of slots currently holding a value.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl DataStore for InMemoryStore {
    fn read_slot(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        Ok(self.slots.get(key).cloned())
    }

    fn write_slot(&mut self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        if self.simulate_write_error {
            return Err(MandalaError::Store("Simulated write error".to_string()));
        }
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_slot(&mut self, key: &str) -> Result<()> {
        validate_key(key)?;
        self.slots.remove(key);
        Ok(())
    }

    fn slot_path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(PathBuf::from(format!("memory://{}", key)))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::defaults::{seeded_grid, Palette};
    use crate::model::Variant;
    use crate::persist;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Persists the seeded default grid of `variant`.
        pub fn with_default_grid(mut self, variant: Variant) -> Self {
            let grid = seeded_grid(variant, &Palette::default());
            persist::save(&mut self.store, &grid).unwrap();
            self
        }

        /// Puts arbitrary text into a variant's slot.
        pub fn with_raw_slot(mut self, variant: Variant, raw: &str) -> Self {
            self.store.write_slot(&variant.storage_key(), raw).unwrap();
            self
        }
    }
}
