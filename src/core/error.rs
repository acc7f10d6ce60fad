use thiserror::Error;

use crate::core::types::{Coordinate, Side};

#[derive(Error, Debug)]
pub enum TissueError {
    #[error("Location occupied: {0}")]
    LocationOccupied(Coordinate),

    #[error("No cell at {0}")]
    NotFound(Coordinate),

    #[error("No coordinate {1} of {0}: outside the grid")]
    OffGrid(Coordinate, Side),

    #[error("Tissue not found: {0}")]
    TissueNotFound(String),

    #[error("Tissue already exists: {0}")]
    TissueExists(String),

    #[error("Unrecognized membrane side: {0}")]
    InvalidSide(String),

    #[error("Malformed command: {0}")]
    MalformedCommand(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, TissueError>;
