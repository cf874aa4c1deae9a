use crate::api::{MandalaApi, MandalaPaths};
use crate::config::MandalaConfig;
use crate::error::{MandalaError, Result};
use crate::model::Variant;
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use log::warn;
use std::path::PathBuf;

/// Overrides the platform data directory.
pub const HOME_ENV: &str = "MANDALA_HOME";

pub struct MandalaContext {
    pub api: MandalaApi<FileStore>,
    pub config: MandalaConfig,
}

/// `$MANDALA_HOME` when set, otherwise the platform data directory.
pub fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        if !home.is_empty() {
            return Ok(PathBuf::from(home));
        }
    }
    ProjectDirs::from("com", "mandala", "mandala")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| MandalaError::Config("Could not determine data dir".to_string()))
}

/// Opens the grid stored under `data_dir`. An explicit `variant` wins over
/// the configured one. An unreadable config falls back to defaults.
pub fn initialize(data_dir: PathBuf, variant: Option<Variant>) -> Result<MandalaContext> {
    let config = MandalaConfig::load(&data_dir).unwrap_or_else(|err| {
        warn!("event=config_load status=fallback error={}", err);
        MandalaConfig::default()
    });
    let variant = variant.unwrap_or(config.variant);

    let store = FileStore::new(data_dir.clone());
    let api = MandalaApi::open(
        store,
        MandalaPaths::new(data_dir),
        variant,
        config.palette.clone(),
    )?;
    Ok(MandalaContext { api, config })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn initialize_uses_configured_variant_and_persists() {
        let dir = TempDir::new().unwrap();
        let mut config = MandalaConfig::default();
        config.set("variant", "9x9").unwrap();
        config.save(dir.path()).unwrap();

        let ctx = initialize(dir.path().to_path_buf(), None).unwrap();
        assert_eq!(ctx.api.variant(), Variant::Large);
        assert!(dir.path().join("mandala-chart-9x9-sections.json").exists());
    }

    #[test]
    fn explicit_variant_overrides_config() {
        let dir = TempDir::new().unwrap();
        let ctx = initialize(dir.path().to_path_buf(), Some(Variant::Large)).unwrap();
        assert_eq!(ctx.api.variant(), Variant::Large);
    }

    #[test]
    fn broken_config_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.json"), "{ nope").unwrap();
        let ctx = initialize(dir.path().to_path_buf(), None).unwrap();
        assert_eq!(ctx.config, MandalaConfig::default());
        assert_eq!(ctx.api.variant(), Variant::Small);
    }
}
