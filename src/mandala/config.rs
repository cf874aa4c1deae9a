use crate::defaults::Palette;
use crate::error::{MandalaError, Result};
use crate::model::{Color, Variant};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_FILE_EXT: &str = ".md";

pub const CONFIG_KEYS: [&str; 5] = [
    "variant",
    "file-ext",
    "color-main",
    "color-secondary",
    "color-tertiary",
];

/// Configuration for mandala, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MandalaConfig {
    /// Grid variant used when none is given on the command line
    #[serde(default = "default_variant")]
    pub variant: Variant,

    /// Extension of the temporary buffer handed to the editor
    #[serde(default = "default_file_ext")]
    pub file_ext: String,

    /// Colors of a freshly generated center section
    #[serde(default)]
    pub palette: Palette,
}

fn default_variant() -> Variant {
    Variant::Small
}

fn default_file_ext() -> String {
    DEFAULT_FILE_EXT.to_string()
}

impl Default for MandalaConfig {
    fn default() -> Self {
        Self {
            variant: default_variant(),
            file_ext: default_file_ext(),
            palette: Palette::default(),
        }
    }
}

impl MandalaConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(MandalaError::Io)?;
        let config: MandalaConfig =
            serde_json::from_str(&content).map_err(MandalaError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(MandalaError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(MandalaError::Serialization)?;
        fs::write(config_path, content).map_err(MandalaError::Io)?;
        Ok(())
    }

    pub fn file_ext(&self) -> &str {
        &self.file_ext
    }

    /// Set the file extension (normalizes to start with a dot)
    pub fn set_file_ext(&mut self, ext: &str) {
        if ext.starts_with('.') {
            self.file_ext = ext.to_string();
        } else {
            self.file_ext = format!(".{}", ext);
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "variant" => Some(self.variant.to_string()),
            "file-ext" => Some(self.file_ext.clone()),
            "color-main" => Some(self.palette.main.to_string()),
            "color-secondary" => Some(self.palette.secondary.to_string()),
            "color-tertiary" => Some(self.palette.tertiary.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let color = |value: &str| Color::from_str(value);
        match key {
            "variant" => {
                self.variant = value.parse().map_err(MandalaError::Config)?;
            }
            "file-ext" => {
                if value.trim_start_matches('.').is_empty() {
                    return Err(MandalaError::Config("file-ext cannot be empty".to_string()));
                }
                self.set_file_ext(value);
            }
            "color-main" => self.palette.main = color(value)?,
            "color-secondary" => self.palette.secondary = color(value)?,
            "color-tertiary" => self.palette.tertiary = color(value)?,
            other => {
                return Err(MandalaError::Config(format!(
                    "Unknown config key: {} (known keys: {})",
                    other,
                    CONFIG_KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }
}
