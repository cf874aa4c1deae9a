use crate::commands::{CmdMessage, CmdResult, MandalaPaths};
use crate::config::MandalaConfig;
use crate::error::Result;
use std::fs;

/// Creates the data directory and writes a default config if none exists.
pub fn run(paths: &MandalaPaths) -> Result<CmdResult> {
    let dir = paths.config_dir();
    fs::create_dir_all(dir)?;
    let mut result = CmdResult::default();
    if !dir.join("config.json").exists() {
        MandalaConfig::default().save(dir)?;
    }
    result.add_message(CmdMessage::success(format!(
        "Initialized mandala store at {}",
        dir.display()
    )));
    Ok(result)
}
