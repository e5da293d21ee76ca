//! Error types.
//!
//! Invalid player input (bad coordinates, full columns, moves after the game
//! ended) is not an error: the controller reports it as a rejected action.
//! These types cover the inputs that carry a reason worth reporting.

use std::path::PathBuf;

/// Reasons a state string can be rejected on import.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateStringError {
    #[error("state string has {actual} cells, expected {expected}")]
    Length { expected: usize, actual: usize },

    #[error("invalid cell digit {digit:?} at index {index}")]
    InvalidDigit { index: usize, digit: char },

    #[error("piece at column {column}, row {row} has an empty cell beneath it")]
    FloatingPiece { column: usize, row: usize },

    #[error("board has not been set up")]
    NotSetUp,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Validation(String),
}
