use super::{validate_key, DataStore};
use crate::error::{MandalaError, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn slot_file(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(format!("{}.json", key)))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(MandalaError::Io)?;
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn read_slot(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_file(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(MandalaError::Io)?;
        Ok(Some(content))
    }

    fn write_slot(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.slot_file(key)?;
        self.ensure_dir()?;

        // Atomic write
        let tmp_path = self
            .root
            .join(format!(".{}-{}.tmp", key, std::process::id()));
        fs::write(&tmp_path, value).map_err(MandalaError::Io)?;
        fs::rename(&tmp_path, path).map_err(MandalaError::Io)?;
        Ok(())
    }

    fn remove_slot(&mut self, key: &str) -> Result<()> {
        let path = self.slot_file(key)?;
        if path.exists() {
            fs::remove_file(path).map_err(MandalaError::Io)?;
        }
        Ok(())
    }

    fn slot_path(&self, key: &str) -> Result<PathBuf> {
        self.slot_file(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileStore) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("data"));
        (dir, store)
    }

    #[test]
    fn missing_slot_reads_as_none() {
        let (_dir, store) = setup();
        assert_eq!(store.read_slot("absent").unwrap(), None);
    }

    #[test]
    fn write_creates_dir_and_overwrites() {
        let (_dir, mut store) = setup();
        store.write_slot("grid", "[1]").unwrap();
        store.write_slot("grid", "[2]").unwrap();
        assert_eq!(store.read_slot("grid").unwrap(), Some("[2]".to_string()));
        assert!(store.root().join("grid.json").exists());
    }

    #[test]
    fn write_leaves_no_tmp_files() {
        let (_dir, mut store) = setup();
        store.write_slot("grid", "[]").unwrap();
        for entry in fs::read_dir(store.root()).unwrap() {
            let name = entry.unwrap().file_name().into_string().unwrap();
            assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
        }
    }

    #[test]
    fn remove_is_idempotent() {
        let (_dir, mut store) = setup();
        store.write_slot("grid", "[]").unwrap();
        store.remove_slot("grid").unwrap();
        store.remove_slot("grid").unwrap();
        assert_eq!(store.read_slot("grid").unwrap(), None);
    }

    #[test]
    fn rejects_unsafe_keys() {
        let (_dir, mut store) = setup();
        assert!(store.write_slot("../escape", "x").is_err());
    }
}
