//! Error types for the draft helper

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DraftError>;

#[derive(Error, Debug)]
pub enum DraftError {
    #[error("CSV parsing failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Required column missing from draft board: {column}")]
    MissingColumn { column: String },

    #[error("Could not find Adjusted or Projected points in the file.")]
    MissingPointsColumn,

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },
}
