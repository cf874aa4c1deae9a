use crate::config::MandalaConfig;
use crate::index::{CellAddress, CellView};
use crate::model::{Card, Color, RichText, Variant};
use std::path::PathBuf;

pub mod arrange;
pub mod config;
pub mod edit;
pub mod helpers;
pub mod init;
pub mod open;
pub mod reset;
pub mod view;

#[derive(Debug, Clone)]
pub struct MandalaPaths {
    pub data_dir: PathBuf,
}

impl MandalaPaths {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn config_dir(&self) -> &PathBuf {
        &self.data_dir
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Where a variant lives and how external collaborators find it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridInfo {
    pub variant: Variant,
    pub cell_count: usize,
    pub storage_key: String,
    pub storage_path: PathBuf,
    pub capture_region_id: &'static str,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_cells: Vec<CellView>,
    pub listed_cells: Vec<CellView>,
    pub config: Option<MandalaConfig>,
    pub grid_info: Option<GridInfo>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_cells(mut self, cells: Vec<CellView>) -> Self {
        self.affected_cells = cells;
        self
    }

    pub fn with_listed_cells(mut self, cells: Vec<CellView>) -> Self {
        self.listed_cells = cells;
        self
    }

    pub fn with_config(mut self, config: MandalaConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_grid_info(mut self, info: GridInfo) -> Self {
        self.grid_info = Some(info);
        self
    }
}

/// What the edit surface is handed when an edit session opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditTarget {
    pub global_index: usize,
    pub address: CellAddress,
    pub card: Card,
}

/// What the edit surface hands back on save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardUpdate {
    pub title: String,
    pub content: RichText,
    pub bg_color: Color,
    /// Also recolor every sibling in the section except its center card.
    pub sync_background: bool,
}

impl CardUpdate {
    /// An update that leaves `card` as it is.
    pub fn from_card(card: &Card) -> Self {
        Self {
            title: card.title.clone(),
            content: card.content.clone(),
            bg_color: card.bg_color.clone(),
            sync_background: false,
        }
    }
}

/// The explicit command that returns a grid to its initial state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResetRequest;
