//! Board configuration.
//!
//! Drop-style variants are played on a rectangular grid whose size is fixed
//! for the lifetime of a game. The engine never hardcodes the 7x6 layout;
//! it is only the default.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Smallest board edge on which four-in-a-row is possible.
pub const MIN_BOARD_EDGE: usize = 4;

/// Largest supported board edge.
pub const MAX_BOARD_EDGE: usize = 16;

/// Dimensions of a drop-style board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Number of columns (board width).
    pub columns: usize,

    /// Number of rows (board height).
    pub rows: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self { columns: 7, rows: 6 }
    }
}

impl BoardConfig {
    /// Create a configuration with the given dimensions.
    #[must_use]
    pub const fn new(columns: usize, rows: usize) -> Self {
        Self { columns, rows }
    }

    /// Total number of cells.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.columns * self.rows
    }

    /// Check that both edges lie in `MIN_BOARD_EDGE..=MAX_BOARD_EDGE`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let edges = MIN_BOARD_EDGE..=MAX_BOARD_EDGE;
        if !edges.contains(&self.columns) {
            return Err(ConfigError::Validation(format!(
                "board.columns must be in {MIN_BOARD_EDGE}..={MAX_BOARD_EDGE}, got {}",
                self.columns
            )));
        }
        if !edges.contains(&self.rows) {
            return Err(ConfigError::Validation(format!(
                "board.rows must be in {MIN_BOARD_EDGE}..={MAX_BOARD_EDGE}, got {}",
                self.rows
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_board() {
        let config = BoardConfig::default();
        assert_eq!(config.columns, 7);
        assert_eq!(config.rows, 6);
        assert_eq!(config.cell_count(), 42);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_bounds() {
        assert!(BoardConfig::new(3, 6).validate().is_err());
        assert!(BoardConfig::new(7, 17).validate().is_err());
        assert!(BoardConfig::new(4, 4).validate().is_ok());
        assert!(BoardConfig::new(16, 16).validate().is_ok());
    }

    #[test]
    fn test_serialization() {
        let config = BoardConfig::new(8, 7);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: BoardConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
