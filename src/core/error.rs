//! Error types for route queries, storage and rendering.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PlannerError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlannerError {
    #[error("Please select valid start and end locations: unknown spot '{name}'")]
    InvalidSelection { name: String },
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("PNG write error: {0}")]
    Png(#[from] cairo::IoError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
