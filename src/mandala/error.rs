use thiserror::Error;

#[derive(Error, Debug)]
pub enum MandalaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Cell {index} is out of range (grid has {cells} cells)")]
    OutOfRange { index: usize, cells: usize },

    #[error("Invalid cell reference: {0}")]
    InvalidCellRef(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Invalid title: {0}")]
    InvalidTitle(String),

    #[error("Invalid rich text: {0}")]
    InvalidRichText(String),

    #[error("Grid shape mismatch: {0}")]
    Shape(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Editor error: {0}")]
    Editor(String),
}

pub type Result<T> = std::result::Result<T, MandalaError>;
